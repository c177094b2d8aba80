//! Argus Logging
//!
//! Structured, environment-configured logging used by the Argus guard
//! crates to report guard construction, argument resolution and rejected
//! calls.
//!
//! # Usage
//!
//! ```rust
//! use argus_log::{debug, info, trace};
//!
//! info!("guard ready");
//! debug!(target: "argus::guard", "bound {} selectors", 3);
//!
//! // Structured fields are rendered after the message
//! let label = "kwarg 'pid'";
//! debug!(target: "argus::guard", { kind = "types", field = label }, "call rejected");
//! trace!({ index = 2 }, "validated positional argument");
//! ```
//!
//! # Environment Variables
//!
//! - `ARGUS_DEBUG=1` - Enable debug records
//! - `ARGUS_LOG_LEVEL=trace|debug|info|warn|error|off` - Minimum level
//! - `ARGUS_LOG_FORMAT=pretty|compact|json` - Output format (default `json`)
//! - `ARGUS_LOG_COLOR=1|0` - Colors for the pretty format (`color` feature)
//! - `ARGUS_LOG_TIMESTAMPS=1|0` - Timestamp prefix

mod config;
mod level;
mod record;

pub use config::{
    ENV_PREFIX, LogConfig, config, current_level, init, init_with, is_debug_enabled,
    is_level_enabled, set_debug, set_level,
};
pub use level::{Format, Level, UnknownVariant};
pub use record::{Record, emit};

#[doc(hidden)]
#[macro_export]
macro_rules! __event {
    ($level:expr, $target:expr, { $($key:ident = $value:expr),* $(,)? }, $($arg:tt)+) => {
        if $crate::is_level_enabled($level) {
            let message = format!($($arg)+);
            let fields: &[(&str, String)] = &[$((stringify!($key), ($value).to_string())),*];
            $crate::emit(&$crate::Record::new($level, $target, &message, fields));
        }
    };
}

/// Log a trace record.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, { $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Trace, $target, { $($fields)* }, $($arg)+)
    };
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Trace, $target, {}, $($arg)+)
    };
    ({ $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Trace, module_path!(), { $($fields)* }, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__event!($crate::Level::Trace, module_path!(), {}, $($arg)+)
    };
}

/// Log a debug record.
///
/// Emitted when `ARGUS_DEBUG=1` or the level is `debug` or lower.
///
/// ```rust
/// use argus_log::debug;
///
/// let n = 2;
/// debug!("resolved {} targets", n);
/// debug!(target: "argus::guard", { kind = "missing" }, "call rejected");
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, { $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Debug, $target, { $($fields)* }, $($arg)+)
    };
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Debug, $target, {}, $($arg)+)
    };
    ({ $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Debug, module_path!(), { $($fields)* }, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__event!($crate::Level::Debug, module_path!(), {}, $($arg)+)
    };
}

/// Log an info record.
#[macro_export]
macro_rules! info {
    (target: $target:expr, { $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Info, $target, { $($fields)* }, $($arg)+)
    };
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Info, $target, {}, $($arg)+)
    };
    ({ $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Info, module_path!(), { $($fields)* }, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__event!($crate::Level::Info, module_path!(), {}, $($arg)+)
    };
}

/// Log a warning record.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, { $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Warn, $target, { $($fields)* }, $($arg)+)
    };
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Warn, $target, {}, $($arg)+)
    };
    ({ $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Warn, module_path!(), { $($fields)* }, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__event!($crate::Level::Warn, module_path!(), {}, $($arg)+)
    };
}

/// Log an error record.
#[macro_export]
macro_rules! error {
    (target: $target:expr, { $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Error, $target, { $($fields)* }, $($arg)+)
    };
    (target: $target:expr, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Error, $target, {}, $($arg)+)
    };
    ({ $($fields:tt)* }, $($arg:tt)+) => {
        $crate::__event!($crate::Level::Error, module_path!(), { $($fields)* }, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__event!($crate::Level::Error, module_path!(), {}, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_compile() {
        trace!("trace message");
        debug!("debug message");
        info!("info message");
        warn!("warn message");
        error!("error message");

        trace!(target: "test", "with target");
        debug!(target: "test", "with target {}", 1);
        info!(target: "test", { a = 1, b = "two" }, "with fields");
        warn!({ a = 1 }, "fields only");
        error!(target: "test", { reason = format!("{}", 42), }, "trailing comma");
    }
}
