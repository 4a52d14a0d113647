#![forbid(unsafe_code)]
//! medbus-core: the leaf types every bus, actor and mediator shares.
//!
//! - `ActionContext`: immutable per-query key/value carrier.
//! - `TestResult`: accept/reject outcome of an actor's probe.
//! - `Logger`: structured logger reachable through the context.
//! - `WeightConfig` and friends: serde-friendly mediator configuration.
//!
//! No async or runtime here; the bus crate owns dispatch.

pub mod config;
pub mod context;
pub mod error;
pub mod log;
pub mod prelude;
pub mod test_result;

pub use config::{NumberMediatorConfig, NumberType, WeightConfig};
pub use context::{keys, Action, ActionContext, ContextKey};
pub use error::{Error, Result};
#[cfg(feature = "tracing")]
pub use log::TracingLogger;
pub use log::{LogLevel, Logger, VoidLogger};
pub use test_result::TestResult;
