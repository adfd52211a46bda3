//! crates/logging/src/verbosity.rs
//! Mapping from `-v` counts to tracing filter directives.

use std::fmt;

/// Maximum level at which decode events are recorded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Only warnings and errors.
    #[default]
    Warn,
    /// Informational events.
    Info,
    /// Header and component summaries.
    Debug,
    /// Every decoded entry and field.
    Trace,
}

impl LogLevel {
    /// Returns the directive spelling of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verbosity selected on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    level: LogLevel,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level (the number of `-v` flags).
    ///
    /// 0 keeps warnings only, 1 enables info, 2 debug and anything higher trace.
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        let level = match level {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        Self { level }
    }

    /// Level applied to the decoder targets.
    #[must_use]
    pub const fn level(self) -> LogLevel {
        self.level
    }

    /// Returns `true` if events at `level` pass this configuration.
    #[must_use]
    pub fn enables(self, level: LogLevel) -> bool {
        level <= self.level
    }

    /// Filter directive: warnings globally, the configured level for `adsec::*`.
    #[must_use]
    pub fn directive(self) -> String {
        match self.level {
            LogLevel::Warn => LogLevel::Warn.to_string(),
            level => format!("warn,{}={level}", crate::TARGET_PREFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_levels_map_monotonically() {
        let levels: Vec<_> = (0..=5)
            .map(|v| VerbosityConfig::from_verbose_level(v).level())
            .collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Warn,
                LogLevel::Info,
                LogLevel::Debug,
                LogLevel::Trace,
                LogLevel::Trace,
                LogLevel::Trace,
            ]
        );
    }

    #[test]
    fn default_is_quiet() {
        let config = VerbosityConfig::default();
        assert_eq!(config, VerbosityConfig::from_verbose_level(0));
        assert_eq!(config.directive(), "warn");
        assert!(config.enables(LogLevel::Warn));
        assert!(!config.enables(LogLevel::Info));
    }

    #[test]
    fn directive_scopes_level_to_decoder_targets() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(1).directive(),
            "warn,adsec=info"
        );
        assert_eq!(
            VerbosityConfig::from_verbose_level(3).directive(),
            "warn,adsec=trace"
        );
    }

    #[test]
    fn trace_enables_everything() {
        let config = VerbosityConfig::from_verbose_level(9);
        for level in [LogLevel::Warn, LogLevel::Info, LogLevel::Debug, LogLevel::Trace] {
            assert!(config.enables(level), "{level}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_level_in_lowercase() {
        let json = serde_json::to_string(&VerbosityConfig::from_verbose_level(2)).unwrap();
        assert_eq!(json, r#"{"level":"debug"}"#);
    }
}
