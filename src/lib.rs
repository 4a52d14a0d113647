#![forbid(unsafe_code)]
//! medbus: the extensibility and decision core of a modular query engine.
//!
//! Actors register on a `Bus`; a `Mediator` publishes an action, awaits every
//! actor's `test`, and picks exactly one winner. This facade re-exports the
//! workspace crates:
//!
//! - `medbus_core`: `ActionContext`, `TestResult`, `Logger`, errors, configuration.
//! - `medbus_bus`: `Actor`, `Bus`, `Mediator`.
//! - `medbus_mediators`: `NumberMediator`, `JoinCoefficientsMediator`.

pub use medbus_bus;
pub use medbus_core;
pub use medbus_mediators;

pub mod prelude {
    pub use medbus_bus::{async_trait, Actor, Bus, Mediator, Reply};
    pub use medbus_core::prelude::*;
    pub use medbus_mediators::{
        JoinAction, JoinActor, JoinCoefficients, JoinCoefficientsMediator, JoinEntry, NumberMediator,
    };
}
