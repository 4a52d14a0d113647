#![forbid(unsafe_code)]
//! medbus-mediators: concrete selection strategies.
//!
//! - `NumberMediator`: min/max over one numeric attribute of the test results.
//! - `JoinCoefficientsMediator`: weighted, limit-aware cost model choosing a
//!   physical join operator.
//!
//! Both plug into `medbus_bus::Mediator`, which owns the bus round and the
//! shared failure handling.

pub mod cost;
pub mod join;
pub mod join_coefficients;
pub mod number;

pub use cost::{apply_limit, cheapest, join_cost};
pub use join::{JoinAction, JoinActor, JoinCoefficients, JoinEntry};
pub use join_coefficients::{JoinCoefficientsMediator, JoinDecisionRecord};
pub use number::{FieldAccessor, NumberMediator};
