//! Actor contract.
//!
//! An actor is one interchangeable strategy for an action family. The bus asks
//! every registered actor to `test` an action; the mediator picks one winner,
//! which the caller then `run`s.

use async_trait::async_trait;

use medbus_core::context::Action;
use medbus_core::error::Result;
use medbus_core::test_result::TestResult;

/// Trait that all actors must implement.
///
/// Invariants:
/// - `test` MUST be side-effect free and cheap. It estimates applicability or
///   cost without doing the real work.
/// - Expected inapplicability is a `TestResult::Failed`, never an `Err`. The
///   `Err` channel is reserved for contract violations and propagates out of
///   mediation unchanged.
/// - `run` is only called on the actor that won mediation. Nothing in the type
///   enforces this ordering.
#[async_trait]
pub trait Actor: Send + Sync {
    type Action: Action;
    /// What `test` reports on acceptance (a cost vector, a score, ...).
    type Test: Send;
    type Output: Send;

    /// Stable, human-readable name.
    fn name(&self) -> &str;

    /// Template for the header of the bus failure message. `${bus}` is
    /// replaced by the bus name.
    fn bus_fail_message(&self) -> Option<&str> {
        None
    }

    async fn test(&self, action: &Self::Action) -> Result<TestResult<Self::Test>>;

    async fn run(&self, action: &Self::Action) -> Result<Self::Output>;
}
