//! # Logging Facade Module
//!
//! This module provides the process-wide console logger. It wraps the `tracing`
//! ecosystem behind a small, level-tagged API that joins its arguments into one line.
//!
//! ## Design Goals
//!
//! - **Single Instance**: the global facade is constructed at most once per process
//! - **Whole Lines**: joining and emission of one call never interleave with another
//! - **Best Effort**: logging calls never return errors and never panic on a bad level
//! - **Private Subscriber**: each facade owns its own `tracing::Dispatch`, so the
//!   process-global default subscriber is left untouched
//!
//! ## Log Levels
//!
//! | LogLevel   | tracing level | extra field       |
//! |------------|---------------|-------------------|
//! | `Info`     | INFO          |                   |
//! | `Debug`    | DEBUG         |                   |
//! | `Warning`  | WARN          |                   |
//! | `Error`    | ERROR         |                   |
//! | `Critical` | ERROR         | `critical = true` |
//!
//! Every facade admits every level; there is no threshold to change.
//!
//! ## Usage
//!
//! ```rust
//! use logfacade::{log_fault, log_warn, LogFacade, LogLevel};
//!
//! log_warn!("disk", "at", 90, "percent");
//! log_fault!("fatal:", 42);
//!
//! if let Some(logger) = LogFacade::instance() {
//!     logger.log(LogLevel::Debug, &[&"cache", &"warmed"]);
//! }
//! ```

use crate::config::{ConsoleStream, FacadeConfig};
use crate::constants::{EVENT_TARGET, INIT_MESSAGE};
use crate::error::FacadeError;
use crate::level::LogLevel;
use crate::record::join_args;
use once_cell::sync::OnceCell;
use std::fmt;
use std::io::{self, IsTerminal};
use std::sync::{Mutex, PoisonError};
use tracing::Dispatch;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

/// The process-wide instance behind [`LogFacade::instance`].
static GLOBAL: FacadeCell = FacadeCell::new();

/// Leveled console logger.
///
/// Not `Clone`: share it by reference. Components that want an injected logger take
/// `&LogFacade`; code that wants call-anywhere ergonomics uses [`LogFacade::instance`]
/// or the `log_*!` macros.
#[derive(Debug)]
pub struct LogFacade {
    name: String,
    dispatch: Dispatch,
    /// Serializes joining and emission for every call on this facade.
    lock: Mutex<()>,
}

impl LogFacade {
    /// Build a facade writing to the console stream selected in `config`.
    pub fn new(config: &FacadeConfig) -> Result<Self, FacadeError> {
        let (writer, is_terminal) = match config.stream {
            ConsoleStream::Stdout => (BoxMakeWriter::new(io::stdout), io::stdout().is_terminal()),
            ConsoleStream::Stderr => (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal()),
        };
        Self::build(config, writer, config.use_ansi(is_terminal))
    }

    /// Build a facade writing to an injected sink.
    ///
    /// The sink is treated as a non-terminal: colors are off unless `ansi` is set.
    pub fn with_writer<W>(config: &FacadeConfig, writer: W) -> Result<Self, FacadeError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(config, BoxMakeWriter::new(writer), config.use_ansi(false))
    }

    fn build(config: &FacadeConfig, writer: BoxMakeWriter, ansi: bool) -> Result<Self, FacadeError> {
        config.validate()?;

        let layer = tracing_subscriber::fmt::layer::<Registry>()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(false)
            .with_level(true)
            .with_thread_ids(config.thread_ids);
        let layer = if config.timestamps {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        };

        // Most permissive threshold: every label a caller can pass gets through.
        let subscriber = Registry::default().with(layer.with_filter(LevelFilter::TRACE));

        let facade = Self {
            name: config.name.clone(),
            dispatch: Dispatch::new(subscriber),
            lock: Mutex::new(()),
        };
        facade.log(LogLevel::Info, &[&INIT_MESSAGE]);
        Ok(facade)
    }

    /// Return the process-wide facade, constructing it with
    /// [`FacadeConfig::default`] on first use.
    ///
    /// Concurrent first calls construct exactly once and all observe the same
    /// reference. If construction failed, every call returns `None`; callers skip
    /// logging in that case.
    pub fn instance() -> Option<&'static LogFacade> {
        GLOBAL.get_or_init_with(|| LogFacade::new(&FacadeConfig::default()))
    }

    /// Explicitly initialize the process-wide facade from `config`.
    ///
    /// Fails with [`FacadeError::AlreadyInitialized`] if the instance exists already.
    /// A config that fails validation leaves the instance unset.
    pub fn init(config: FacadeConfig) -> Result<&'static LogFacade, FacadeError> {
        GLOBAL.init_with(|| LogFacade::new(&config))
    }

    /// Install a prebuilt facade as the process-wide instance.
    pub fn install(facade: LogFacade) -> Result<&'static LogFacade, FacadeError> {
        GLOBAL.init_with(move || Ok(facade))
    }

    /// Logger name attached to every line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Join `args` with single spaces and emit the line at `level`.
    ///
    /// Holds the facade lock for the whole call, so an argument's `Display` impl
    /// must not log through the same facade.
    pub fn log(&self, level: LogLevel, args: &[&dyn fmt::Display]) {
        // A panic in some caller's Display impl must not silence logging for good.
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let line = join_args(args);
        let name = self.name.as_str();

        tracing::dispatcher::with_default(&self.dispatch, || match level {
            LogLevel::Info => tracing::info!(target: EVENT_TARGET, logger = %name, "{}", line),
            LogLevel::Debug => tracing::debug!(target: EVENT_TARGET, logger = %name, "{}", line),
            LogLevel::Warning => tracing::warn!(target: EVENT_TARGET, logger = %name, "{}", line),
            LogLevel::Error => tracing::error!(target: EVENT_TARGET, logger = %name, "{}", line),
            LogLevel::Critical => {
                tracing::error!(target: EVENT_TARGET, logger = %name, critical = true, "{}", line)
            }
        });
    }

    /// Emit at the level for a raw code (see [`LogLevel::try_from`]).
    /// Unrecognized codes drop the line silently.
    pub fn log_raw(&self, code: u8, args: &[&dyn fmt::Display]) {
        if let Ok(level) = LogLevel::try_from(code) {
            self.log(level, args);
        }
    }

    pub fn info(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Info, args);
    }

    pub fn debug(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Debug, args);
    }

    pub fn warn(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Warning, args);
    }

    pub fn error(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Error, args);
    }

    /// Emit at [`LogLevel::Critical`].
    pub fn fault(&self, args: &[&dyn fmt::Display]) {
        self.log(LogLevel::Critical, args);
    }
}

/// One-time construction gate holding at most one facade.
///
/// The global instance lives in a `static FacadeCell`; independent cells are useful
/// wherever a component wants its own lazily built logger.
#[derive(Debug)]
pub struct FacadeCell {
    // `Some(None)` records a construction that failed; it is never retried.
    cell: OnceCell<Option<LogFacade>>,
}

impl FacadeCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the held facade, running `construct` if the cell is still empty.
    ///
    /// Only one caller ever runs `construct`; racing callers block until it finishes
    /// and then see its result. A construction error is stored as "no facade".
    pub fn get_or_init_with<F>(&self, construct: F) -> Option<&LogFacade>
    where
        F: FnOnce() -> Result<LogFacade, FacadeError>,
    {
        self.cell.get_or_init(|| construct().ok()).as_ref()
    }

    /// Fill the empty cell with the facade built by `construct`.
    ///
    /// Returns [`FacadeError::AlreadyInitialized`] without running `construct` if the
    /// cell is filled. A construction error is returned and leaves the cell empty.
    pub fn init_with<F>(&self, construct: F) -> Result<&LogFacade, FacadeError>
    where
        F: FnOnce() -> Result<LogFacade, FacadeError>,
    {
        let mut constructed = false;
        let slot = self.cell.get_or_try_init(|| {
            constructed = true;
            construct().map(Some)
        })?;
        match slot {
            Some(facade) if constructed => Ok(facade),
            _ => Err(FacadeError::AlreadyInitialized),
        }
    }

    /// The held facade, without constructing one.
    pub fn get(&self) -> Option<&LogFacade> {
        self.cell.get().and_then(Option::as_ref)
    }

    /// Whether construction has been attempted, successful or not.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for FacadeCell {
    fn default() -> Self {
        Self::new()
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($level:expr, $($arg:expr),*) => {{
        if let Some(facade) = $crate::LogFacade::instance() {
            facade.log($level, &[$(&$arg as &dyn ::core::fmt::Display),*]);
        }
    }};
}

/// Emit an [`Info`](crate::LogLevel::Info) line through the global facade.
#[macro_export]
macro_rules! log_info {
    ($($arg:expr),* $(,)?) => {
        $crate::__emit!($crate::LogLevel::Info, $($arg),*)
    };
}

/// Emit a [`Debug`](crate::LogLevel::Debug) line through the global facade.
#[macro_export]
macro_rules! log_debug {
    ($($arg:expr),* $(,)?) => {
        $crate::__emit!($crate::LogLevel::Debug, $($arg),*)
    };
}

/// Emit a [`Warning`](crate::LogLevel::Warning) line through the global facade.
#[macro_export]
macro_rules! log_warn {
    ($($arg:expr),* $(,)?) => {
        $crate::__emit!($crate::LogLevel::Warning, $($arg),*)
    };
}

/// Emit an [`Error`](crate::LogLevel::Error) line through the global facade.
#[macro_export]
macro_rules! log_error {
    ($($arg:expr),* $(,)?) => {
        $crate::__emit!($crate::LogLevel::Error, $($arg),*)
    };
}

/// Emit a [`Critical`](crate::LogLevel::Critical) line through the global facade.
#[macro_export]
macro_rules! log_fault {
    ($($arg:expr),* $(,)?) => {
        $crate::__emit!($crate::LogLevel::Critical, $($arg),*)
    };
}
