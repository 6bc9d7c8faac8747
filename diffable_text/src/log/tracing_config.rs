// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "diffable_text_log.log";

/// Configure where the engine's [`tracing`] events go, and at which level.
///
/// Use [`crate::try_initialize_logging_global`] (apps) or
/// [`crate::try_initialize_logging_thread_local`] (tests) to install it.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `String` is the path to the log file. Eg: `/tmp/diffable_text.log`.
/// - [`DisplayPreference`] picks the display stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Logging is disabled by default.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

mod convert {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<LevelFilter> for TracingConfig {
        /// Log to stdout at the given level.
        fn from(level_filter: LevelFilter) -> Self {
            TracingConfig::new_display(DisplayPreference::Stdout).with_level(level_filter)
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                writer_config,
                level_filter: LevelFilter::DEBUG,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_off() {
        let it = TracingConfig::default();
        assert_eq2!(it.get_level_filter(), LevelFilter::OFF);
        assert_eq2!(it.get_writer_config(), WriterConfig::None);
    }

    #[test]
    fn test_conversions() {
        let it: TracingConfig = LevelFilter::WARN.into();
        assert_eq2!(
            it,
            TracingConfig {
                writer_config: WriterConfig::Display(DisplayPreference::Stdout),
                level_filter: LevelFilter::WARN,
            }
        );

        let it: TracingConfig = WriterConfig::File("a.log".into()).into();
        assert_eq2!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(it, TracingConfig::new_file(Some("a.log".into())));
    }

    #[test]
    fn test_default_file_name() {
        let it = TracingConfig::new_file_and_display(None, DisplayPreference::Stderr);
        assert_eq2!(
            it.get_writer_config(),
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }
}
