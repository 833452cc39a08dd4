use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::{Arc, Mutex};

/// Scrollback buffer for the bottom log strip, fed by the `log` crate
/// through [`UiLogger`].
#[derive(Debug)]
pub struct LogPanel {
    entries: Vec<String>,
    max_entries: usize,
}

impl LogPanel {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(500),
            max_entries: 500,
        }
    }

    pub fn add_entry(&mut self, entry: &str) {
        if self.entries.len() >= self.max_entries {
            self.entries.remove(0);
        }
        self.entries.push(entry.to_string());
    }

    /// Tail of the buffer, newest lines last.
    pub fn render(&self, visible_lines: usize) -> String {
        if self.entries.is_empty() {
            return "  Waiting for logs...".to_string();
        }
        let start = self.entries.len().saturating_sub(visible_lines);
        self.entries[start..].join("\n")
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}

pub struct UiLogger {
    panel: Arc<Mutex<LogPanel>>,
    filter: LevelFilter,
}

impl Log for UiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%H:%M:%S");
            let level = match record.level() {
                log::Level::Error => "ERR",
                log::Level::Warn => "WRN",
                log::Level::Info => "INF",
                log::Level::Debug => "DBG",
                log::Level::Trace => "TRC",
            };
            let entry = format!("[{}] {} {}", timestamp, level, record.args());
            if let Ok(mut panel) = self.panel.lock() {
                panel.add_entry(&entry);
            }
        }
    }

    fn flush(&self) {}
}

/// Route `log` output into the panel. Works because env_logger is never
/// initialized when the console UI is enabled.
pub fn init_logger(panel: Arc<Mutex<LogPanel>>) -> Result<(), SetLoggerError> {
    let logger = Box::new(UiLogger {
        panel,
        filter: LevelFilter::Info,
    });
    log::set_boxed_logger(logger)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_returns_tail() {
        let mut panel = LogPanel::new();
        for i in 0..10 {
            panel.add_entry(&format!("line {i}"));
        }
        let tail = panel.render(3);
        assert_eq!(tail, "line 7\nline 8\nline 9");
    }

    #[test]
    fn buffer_is_bounded() {
        let mut panel = LogPanel::new();
        for i in 0..600 {
            panel.add_entry(&format!("line {i}"));
        }
        assert!(panel.render(1000).starts_with("line 100"));
    }
}
