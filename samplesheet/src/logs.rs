//! Pipeline progress messages.
//!
//! Thin helpers over the [`log`] facade so the pipeline reports progress
//! the same way everywhere. Output goes wherever the installed logger
//! sends it (stderr with `env_logger`), keeping stdout free for results.

/// Log level of a progress message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠️ ",
            LogLevel::Error => "❌ ",
        }
    }

    fn level(self) -> log::Level {
        match self {
            LogLevel::Info | LogLevel::Success => log::Level::Info,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Emit a message at `level`, indented by `indent` steps.
pub fn log_at(level: LogLevel, msg: impl AsRef<str>, indent: u8) {
    let pad = "   ".repeat(indent as usize);
    log::log!(level.level(), "{}{}{}", pad, level.prefix(), msg.as_ref());
}

pub fn log_info(msg: impl AsRef<str>) {
    log_at(LogLevel::Info, msg, 0);
}

pub fn log_success(msg: impl AsRef<str>) {
    log_at(LogLevel::Success, msg, 0);
}

pub fn log_warning(msg: impl AsRef<str>) {
    log_at(LogLevel::Warning, msg, 0);
}

pub fn log_error(msg: impl AsRef<str>) {
    log_at(LogLevel::Error, msg, 0);
}

pub fn log_info_indent(msg: impl AsRef<str>, indent: u8) {
    log_at(LogLevel::Info, msg, indent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_log_facade() {
        assert_eq!(LogLevel::Success.level(), log::Level::Info);
        assert_eq!(LogLevel::Warning.level(), log::Level::Warn);
        assert_eq!(LogLevel::Error.level(), log::Level::Error);
        assert_eq!(LogLevel::Info.prefix(), "");
        assert!(LogLevel::Success.prefix().starts_with('✓'));
    }

    #[test]
    fn test_logging_without_logger_is_noop() {
        log_info("nothing installed");
        log_info_indent("still fine", 2);
    }
}
