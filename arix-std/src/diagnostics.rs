//! Diagnostic output for handlers.
//!
//! Handlers describe the arguments they received on a [`Diagnostics`] sink.
//! The output is for observation only and its format is not stable.

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

/// Where handler diagnostic lines go.
#[derive(Clone, Debug, Default)]
pub enum Diagnostics {
    /// One line per call on standard output. Write errors are dropped.
    #[default]
    Stdout,
    /// Lines are kept in a shared buffer, for tests.
    Recording(Arc<Mutex<Vec<String>>>),
    /// Lines are dropped.
    Silent,
}

impl Diagnostics {
    /// Create a recording sink with an empty buffer.
    pub fn recording() -> Self {
        Diagnostics::Recording(Arc::new(Mutex::new(Vec::new())))
    }

    /// Emit one diagnostic line.
    pub fn emit(&self, line: impl Into<String>) {
        let line = line.into();
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(%line, "handler diagnostic");
        }
        match self {
            Diagnostics::Stdout => {
                // Write failures (closed stdout) are ignored.
                let _ = writeln!(std::io::stdout().lock(), "{line}");
            }
            Diagnostics::Recording(lines) => {
                lines.lock().unwrap_or_else(|e| e.into_inner()).push(line);
            }
            Diagnostics::Silent => {}
        }
    }

    /// Lines recorded so far. Always empty for non-recording sinks.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Diagnostics::Recording(lines) => lines.lock().unwrap_or_else(|e| e.into_inner()).clone(),
            Diagnostics::Stdout | Diagnostics::Silent => Vec::new(),
        }
    }

    /// Drop recorded lines.
    pub fn clear(&self) {
        if let Diagnostics::Recording(lines) = self {
            lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_is_shared_between_clones() {
        let sink = Diagnostics::recording();
        let clone = sink.clone();
        clone.emit("2 3");
        sink.emit(String::from("8"));
        assert_eq!(sink.lines(), vec!["2 3", "8"]);

        sink.clear();
        assert!(clone.lines().is_empty());
    }

    #[test]
    fn test_silent_sink_records_nothing() {
        let sink = Diagnostics::Silent;
        sink.emit("ignored");
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_stdout_sink_writes_and_keeps_nothing() {
        let sink = Diagnostics::default();
        assert!(matches!(sink, Diagnostics::Stdout));
        sink.emit("2 3 [4]");
        assert!(sink.lines().is_empty());
    }
}
