//! # logfacade - Leveled Console Logging Facade
//!
//! A small, thread-safe logging facade over the `tracing` ecosystem. One lazily
//! constructed process-wide logger takes a level and a list of displayable values,
//! joins them with single spaces and writes the line to a color-capable console.
//!
//! ```text
//!  log_info!/log_warn!/...        LogFacade::info/warn/...
//!            │                              │
//!            └──────────────┬───────────────┘
//!                           ▼
//!                 LogFacade::log(level, args)
//!                  lock ─► join_args ─► tracing event
//!                           │
//!                           ▼
//!            private Dispatch: Registry + fmt layer ─► stdout/stderr
//! ```
//!
//! ## Modules
//!
//! - [`logger`]: the facade, its one-time construction gate and the `log_*!` macros
//! - [`level`]: the closed set of level labels
//! - [`record`]: joining arguments into one line
//! - [`config`]: TOML-serializable rendering options
//! - [`error`]: errors from the explicit construction and configuration APIs

pub mod config;
pub mod constants;
pub mod error;
pub mod level;
pub mod logger;
pub mod record;

pub use config::{ConsoleStream, FacadeConfig};
pub use error::FacadeError;
pub use level::{LogLevel, UnknownLevel};
pub use logger::{FacadeCell, LogFacade};
pub use record::join_args;
