// Log records and stderr rendering

use crate::{config, is_level_enabled, Format, Level, LogConfig};
use std::fmt::Write as _;
use std::io::Write;

/// A single structured log event.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    /// Module path or explicit `target:` of the macro call
    pub target: &'a str,
    pub message: &'a str,
    /// Structured `key = value` pairs, rendered after the message
    pub fields: &'a [(&'a str, String)],
}

impl<'a> Record<'a> {
    pub fn new(
        level: Level,
        target: &'a str,
        message: &'a str,
        fields: &'a [(&'a str, String)],
    ) -> Self {
        Self {
            level,
            target,
            message,
            fields,
        }
    }

    /// Render the record as a single line in the given configuration.
    pub fn render(&self, config: &LogConfig) -> String {
        match config.format {
            Format::Pretty => self.render_pretty(config),
            Format::Compact => self.render_compact(config),
            Format::Json => self.render_json(config),
        }
    }

    fn render_pretty(&self, config: &LogConfig) -> String {
        let mut line = String::new();
        if config.timestamps {
            let now = chrono::Local::now();
            let _ = write!(line, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
        }

        #[cfg(feature = "color")]
        if config.color {
            let _ = write!(line, "{:5} ", self.level.colored());
        } else {
            let _ = write!(line, "{:5} ", self.level.as_str());
        }
        #[cfg(not(feature = "color"))]
        let _ = write!(line, "{:5} ", self.level.as_str());

        if !self.target.is_empty() {
            let _ = write!(line, "[{}] ", self.target);
        }
        line.push_str(self.message);
        self.push_fields(&mut line);
        line
    }

    fn render_compact(&self, config: &LogConfig) -> String {
        let mut line = String::new();
        if config.timestamps {
            let _ = write!(line, "{} ", chrono::Local::now().format("%H:%M:%S"));
        }
        let initial = self.level.as_str().chars().next().unwrap_or('?');
        let _ = write!(line, "{} ", initial);
        if !self.target.is_empty() {
            let _ = write!(line, "{}: ", self.target);
        }
        line.push_str(self.message);
        self.push_fields(&mut line);
        line
    }

    fn push_fields(&self, line: &mut String) {
        for (key, value) in self.fields {
            let _ = write!(line, " {}={}", key, value);
        }
    }

    #[cfg(feature = "json")]
    fn render_json(&self, config: &LogConfig) -> String {
        let mut entry = serde_json::Map::new();
        if config.timestamps {
            entry.insert(
                "timestamp".into(),
                chrono::Utc::now().to_rfc3339().into(),
            );
        }
        entry.insert("level".into(), self.level.as_str().into());
        entry.insert("target".into(), self.target.into());
        entry.insert("message".into(), self.message.into());
        if !self.fields.is_empty() {
            let fields = self
                .fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone().into()))
                .collect::<serde_json::Map<_, _>>();
            entry.insert("fields".into(), fields.into());
        }
        serde_json::Value::Object(entry).to_string()
    }

    #[cfg(not(feature = "json"))]
    fn render_json(&self, config: &LogConfig) -> String {
        let mut line = String::from("{");
        if config.timestamps {
            let _ = write!(line, r#""timestamp":"{}","#, chrono::Utc::now().to_rfc3339());
        }
        let _ = write!(
            line,
            r#""level":"{}","target":"{}","message":"{}""#,
            self.level.as_str(),
            escape_json(self.target),
            escape_json(self.message)
        );
        if !self.fields.is_empty() {
            line.push_str(r#","fields":{"#);
            for (i, (key, value)) in self.fields.iter().enumerate() {
                if i > 0 {
                    line.push(',');
                }
                let _ = write!(line, r#""{}":"{}""#, escape_json(key), escape_json(value));
            }
            line.push('}');
        }
        line.push('}');
        line
    }
}

#[cfg(not(feature = "json"))]
fn escape_json(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04x}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Write a record to stderr if its level is enabled.
#[doc(hidden)]
pub fn emit(record: &Record<'_>) {
    if !is_level_enabled(record.level) {
        return;
    }
    let line = record.render(config());
    let _ = writeln!(std::io::stderr().lock(), "{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(format: Format) -> LogConfig {
        LogConfig::default()
            .with_format(format)
            .with_timestamps(false)
    }

    #[test]
    fn test_pretty_rendering() {
        let fields = [("kind", "types".to_string())];
        let record = Record::new(Level::Debug, "argus::guard", "call rejected", &fields);
        assert_eq!(
            record.render(&plain(Format::Pretty)),
            "DEBUG [argus::guard] call rejected kind=types"
        );
    }

    #[test]
    fn test_compact_rendering() {
        let record = Record::new(Level::Warn, "argus", "slow", &[]);
        assert_eq!(record.render(&plain(Format::Compact)), "W argus: slow");
    }

    #[test]
    fn test_json_rendering() {
        let fields = [("field", "kwarg 'pid'".to_string())];
        let record = Record::new(Level::Info, "argus::guard", "say \"hi\"", &fields);
        let line = record.render(&plain(Format::Json));
        assert!(line.starts_with('{') && line.ends_with('}'));
        assert!(line.contains(r#""level":"INFO""#));
        assert!(line.contains(r#""message":"say \"hi\"""#));
        assert!(line.contains(r#""field":"kwarg 'pid'""#));
        assert!(!line.contains("timestamp"));
    }

    #[test]
    fn test_timestamps_are_prefixed() {
        let config = LogConfig::default().with_format(Format::Compact);
        let record = Record::new(Level::Error, "", "boom", &[]);
        let line = record.render(&config);
        assert!(line.ends_with("E boom"));
        assert!(line.len() > "E boom".len());
    }
}
