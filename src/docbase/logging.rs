//! Explicit logger handle.
//!
//! Components that want to log take a [`Logger`] rather than writing to a
//! process-wide sink. The handle wraps an `env_logger` instance built once at
//! startup from the verbosity flag; `DOCBASE_LOG` can override the filter.

use env_logger::{Builder, Target};
use log::{Level, LevelFilter, Log, Record};
use std::fmt;
use std::sync::Arc;

const TARGET: &str = "docbase";
const FILTER_ENV: &str = "DOCBASE_LOG";

/// Cheap to clone; clones share the same underlying sink.
#[derive(Clone)]
pub struct Logger {
    inner: Option<Arc<env_logger::Logger>>,
}

impl Logger {
    /// Debug output when verbose, warnings otherwise. Everything goes to stderr.
    pub fn new(verbose: bool) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        let inner = Builder::new()
            .filter_level(level)
            .parse_env(FILTER_ENV)
            .target(Target::Stderr)
            .format_timestamp(None)
            .build();
        Self {
            inner: Some(Arc::new(inner)),
        }
    }

    /// A logger that drops every record.
    pub fn discard() -> Self {
        Self { inner: None }
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if let Some(inner) = &self.inner {
            let record = Record::builder()
                .args(args)
                .level(level)
                .target(TARGET)
                .build();
            inner.log(&record);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::discard()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.inner.is_some())
            .finish()
    }
}
