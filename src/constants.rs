//! # Facade Constants
//!
//! Defaults and fixed strings shared by the logger and its configuration.

/// Name of the logger when none is configured
pub const DEFAULT_LOGGER_NAME: &str = "Console";

/// Line emitted once when a facade is constructed
pub const INIT_MESSAGE: &str = "Logger has been initialized!";

/// Separator placed between joined arguments
pub const ARG_SEPARATOR: &str = " ";

/// `tracing` target attached to every event emitted by the facade
pub const EVENT_TARGET: &str = "logfacade";
