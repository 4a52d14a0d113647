//! Mediator base: runs one bus round and hands the settled replies to a
//! selection strategy.
//!
//! A round has exactly one suspension point: awaiting every `test` reply.
//! There is no cancellation and no timeout here; the aggregate failure
//! message and the cost tables need every candidate's outcome. Scoring in
//! `mediate_with` is synchronous.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use medbus_core::error::{Error, Result};
use medbus_core::test_result::TestResult;

use crate::actor::Actor;
use crate::bus::{ActorReply, Bus};
use crate::metrics::emit_event;

/// A settled `test` reply.
pub struct Reply<A: ?Sized + Actor> {
    pub actor: Arc<A>,
    pub result: TestResult<A::Test>,
}

/// Await all pending replies concurrently, keeping registration order.
///
/// A hard error from any `test` is returned only after every reply settled;
/// the first one in registration order wins.
pub async fn settle<A: ?Sized + Actor>(replies: Vec<ActorReply<'_, A>>) -> Result<Vec<Reply<A>>> {
    let (actors, pending): (Vec<Arc<A>>, Vec<_>) = replies
        .into_iter()
        .map(|r| (Arc::clone(r.actor), r.reply))
        .unzip();
    let results = join_all(pending).await;
    actors
        .into_iter()
        .zip(results)
        .map(|(actor, result)| Ok(Reply { actor, result: result? }))
        .collect()
}

/// Render the shared aggregate failure message:
///
/// ```text
/// <header>
///     Error messages of failing actors:
///         <reason 1>
///         <reason 2>
/// ```
pub fn failure_message<S: AsRef<str>>(header: &str, failures: &[S]) -> String {
    let mut out = String::from(header);
    out.push_str("\n    Error messages of failing actors:");
    for reason in failures {
        out.push_str("\n        ");
        out.push_str(reason.as_ref());
    }
    out
}

/// Selection policy over one bus.
///
/// Implementors provide the bus and the synchronous `mediate_with` strategy.
/// `mediate` owns the shared "no actors" handling and turns a rejected
/// outcome into `Error::Mediation`.
#[async_trait]
pub trait Mediator<A>: Send + Sync
where
    A: ?Sized + Actor + 'static,
{
    fn name(&self) -> &str;

    fn bus(&self) -> &Bus<A>;

    /// Pick one actor out of the settled replies (registration order).
    fn mediate_with(&self, action: &A::Action, replies: &[Reply<A>]) -> TestResult<Arc<A>>;

    /// Aggregate failure text with this mediator's bus header.
    fn construct_failure_message(&self, failures: &[&str]) -> String {
        failure_message(&self.bus().fail_message(), failures)
    }

    /// Publish `action` and return the single selected actor.
    async fn mediate(&self, action: &A::Action) -> Result<Arc<A>> {
        let bus = self.bus();
        let pending = bus.publish(action);
        emit_event(
            "publish",
            &[
                ("mediator", self.name().to_string()),
                ("bus", bus.name().to_string()),
                ("actors", pending.len().to_string()),
            ],
        );
        if pending.is_empty() {
            return Err(Error::NoActors {
                bus: bus.name().to_string(),
            });
        }

        let replies = settle(pending).await?;
        match self.mediate_with(action, &replies) {
            TestResult::Passed(actor) => {
                emit_event("selected", &[("actor", actor.name().to_string())]);
                Ok(actor)
            }
            TestResult::Failed(reason) => {
                emit_event("failed", &[("bus", bus.name().to_string())]);
                Err(Error::Mediation(reason))
            }
        }
    }

    /// Mediate, then run the winner on the same action.
    async fn mediate_and_run(&self, action: &A::Action) -> Result<A::Output> {
        let actor = self.mediate(action).await?;
        actor.run(action).await
    }
}
