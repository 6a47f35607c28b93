use crate::mode::{self, Completion};
use core::fmt::{self, Write};
use heapless::consts::U128;
use heapless::String;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

type Line = String<U128>;

/// `log` backend writing `[LEVEL] message` lines to the diagnostic channel.
pub struct Logger;

static GLOBAL_LOGGER: Logger = Logger::new();

impl Logger {
    pub const fn new() -> Self {
        Logger
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Formatted before the channel is locked, one semihosting write per line
        let line = format_line(record.level(), record.args());
        mode::Active::diagnostic(format_args!("{}", line.as_str()));
    }

    fn flush(&self) {}
}

/// Appends what fits, cut on a char boundary, leaving room for the newline.
struct Truncating<'a> {
    line: &'a mut Line,
}

impl<'a> Write for Truncating<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = (self.line.capacity() - 1).saturating_sub(self.line.len());
        let mut end = s.len().min(room);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.line.push_str(&s[..end]).ok();
        Ok(())
    }
}

fn format_line(level: Level, args: &fmt::Arguments) -> Line {
    let mut line = Line::new();
    write!(Truncating { line: &mut line }, "[{}] {}", level, args).ok();
    line.push('\n').ok();
    line
}

/// Install the logger and set the level. The diagnostic channel must
/// already be up.
///
/// Fails if a logger is already installed; the level is applied anyway.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    let installed = unsafe { log::set_logger_racy(&GLOBAL_LOGGER) };
    #[cfg(not(all(target_arch = "arm", target_os = "none")))]
    let installed = log::set_logger(&GLOBAL_LOGGER);

    log::set_max_level(level);
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_is_buffered() {
        let line = format_line(Level::Info, &format_args!("running {} checks", 3));
        assert_eq!(line.as_str(), "[INFO] running 3 checks\n");
    }

    #[test]
    fn long_line_is_truncated() {
        let long = "x".repeat(200);
        let line = format_line(Level::Debug, &format_args!("{}", long));
        assert_eq!(line.len(), line.capacity());
        assert!(line.as_str().starts_with("[DEBUG] xxx"));
        assert!(line.as_str().ends_with("x\n"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let wide = "é".repeat(100);
        let line = format_line(Level::Debug, &format_args!("{}", wide));
        assert!(line.len() < line.capacity());
        assert!(line.as_str().ends_with("é\n"));
    }

    #[test]
    fn second_install_is_reported() {
        let _ = init(LevelFilter::Warn);
        assert!(init(LevelFilter::Warn).is_err());
    }
}
