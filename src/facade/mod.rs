//! The logging facade: the `Logger` interface, its adapter and constructors

pub mod adapter;
pub mod constructors;
pub mod environment;
pub mod logger;
pub mod resolver;

pub use adapter::FacadeLogger;
pub use constructors::{new_custom_logger, new_default_logger, new_logger_from_env};
pub use environment::Environment;
pub use logger::{Logger, ReconfigureOptions};
pub use resolver::resolve_config;
