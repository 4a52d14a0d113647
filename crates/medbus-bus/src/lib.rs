#![forbid(unsafe_code)]
//! medbus-bus: the publish/test/select protocol.
//!
//! - `Actor`: a named participant with a cheap `test` and a real `run`.
//! - `Bus`: ordered registry that fans `test` out to every actor.
//! - `Mediator`: awaits a bus round and delegates selection to a strategy,
//!   owning the shared "no actors" / "all rejected" failure handling.
//!
//! Concrete selection strategies live in `medbus-mediators`.

pub mod actor;
pub mod bus;
pub mod mediator;
pub mod metrics;

pub use actor::Actor;
pub use bus::{ActorReply, Bus, DEFAULT_FAIL_MESSAGE};
pub use mediator::{failure_message, settle, Mediator, Reply};

// Re-exported so implementors need not depend on async-trait directly.
pub use async_trait::async_trait;
