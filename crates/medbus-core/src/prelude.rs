//! Convenient re-exports for downstream crates.

pub use crate::config::{NumberMediatorConfig, NumberType, WeightConfig};
pub use crate::context::{keys, Action, ActionContext, ContextKey};
pub use crate::error::{Error, Result};
pub use crate::log::{LogLevel, Logger, VoidLogger};
pub use crate::test_result::TestResult;
