// Environment-driven logging configuration

use crate::{Format, Level};
use once_cell::sync::OnceCell;
use std::env;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Prefix shared by every environment variable read by this crate.
pub const ENV_PREFIX: &str = "ARGUS";

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);
static CONFIG: OnceCell<LogConfig> = OnceCell::new();

/// Logging configuration.
///
/// Read once from the environment on first use, or installed explicitly
/// with [`init_with`] before any record is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `ARGUS_DEBUG`: forces debug records on regardless of level
    pub debug: bool,
    /// `ARGUS_LOG_LEVEL`
    pub level: Level,
    /// `ARGUS_LOG_FORMAT`
    pub format: Format,
    /// `ARGUS_LOG_COLOR`, only honored with the `color` feature
    pub color: bool,
    /// `ARGUS_LOG_TIMESTAMPS`
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Build a configuration from `ARGUS_*` environment variables.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}_{}", ENV_PREFIX, name));
        let defaults = Self::default();

        let debug = var("DEBUG").map(|v| is_truthy(&v)).unwrap_or(defaults.debug);
        let level = var("LOG_LEVEL")
            .and_then(|v| v.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { defaults.level });
        let format = var("LOG_FORMAT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.format);
        let color = var("LOG_COLOR")
            .map(|v| is_truthy(&v))
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());
        let timestamps = var("LOG_TIMESTAMPS")
            .map(|v| is_truthy(&v))
            .unwrap_or(defaults.timestamps);

        Self {
            debug,
            level,
            format,
            color,
            timestamps,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    fn publish(&self) {
        DEBUG_ENABLED.store(self.debug, Ordering::SeqCst);
        LOG_LEVEL.store(self.level as u8, Ordering::SeqCst);
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Initialize logging from the environment.
///
/// Called lazily by the first emitted record; calling it explicitly is only
/// needed for eager initialization.
pub fn init() {
    let _ = config();
}

/// Install `config` as the global configuration.
///
/// Returns `false` when a configuration was already installed, in which case
/// the existing one is kept.
pub fn init_with(config: LogConfig) -> bool {
    let mut installed = false;
    CONFIG.get_or_init(|| {
        installed = true;
        config.publish();
        config
    });
    installed
}

/// The active configuration.
pub fn config() -> &'static LogConfig {
    CONFIG.get_or_init(|| {
        let config = LogConfig::from_env();
        config.publish();
        config
    })
}

/// Whether a record at `level` would be emitted.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    if level == Level::Debug && DEBUG_ENABLED.load(Ordering::Relaxed) {
        return true;
    }
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Change the minimum level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Toggle debug mode at runtime; enabling it lowers the level to `Debug`.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}
