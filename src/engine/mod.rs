//! Built-in structured logging backend

pub mod config;
pub mod core;
pub mod encoder;
pub mod logger;
pub mod observer;
pub mod sampling;

pub use self::core::{Core, IoCore};
pub use config::BackendConfig;
pub use encoder::{EncoderConfig, Encoding, LevelEncoding, TimeEncoding};
pub use logger::{EngineLogger, FatalHook};
pub use observer::{ObservedLogs, ObserverCore};
pub use sampling::{SampledCore, SamplingConfig};
