//! Bus: the ordered actor registry for one decision point.
//!
//! Registration happens once at start-up, by whoever builds the bus (needs
//! `&mut Bus`). After that the bus is shared through an `Arc` and only read.
//! Registration order is durable: replies come back in that order, and every
//! mediator breaks ties by it.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use medbus_core::error::Result;
use medbus_core::test_result::TestResult;

use crate::actor::Actor;

/// Header used for aggregate failures unless an actor or the builder
/// provides one.
pub const DEFAULT_FAIL_MESSAGE: &str = "All actors rejected their test in ${bus}";

/// A pending `test` reply, tied to the actor that produced it.
pub struct ActorReply<'a, A: ?Sized + Actor> {
    pub actor: &'a Arc<A>,
    pub reply: BoxFuture<'a, Result<TestResult<A::Test>>>,
}

pub struct Bus<A: ?Sized> {
    name: String,
    fail_message: String,
    actors: Vec<Arc<A>>,
}

impl<A: ?Sized + Actor> Bus<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fail_message: DEFAULT_FAIL_MESSAGE.to_string(),
            actors: Vec::new(),
        }
    }

    pub fn with_fail_message(mut self, template: impl Into<String>) -> Self {
        self.fail_message = template.into();
        self
    }

    /// Append `actor` to the registry. An actor carrying its own fail-message
    /// template overrides the bus template (last registration wins).
    pub fn register(&mut self, actor: Arc<A>) {
        if let Some(template) = actor.bus_fail_message() {
            self.fail_message = template.to_string();
        }
        self.actors.push(actor);
    }

    /// Start `test` on every registered actor.
    ///
    /// The returned list is in registration order. The futures are driven
    /// concurrently by whoever awaits them (see `mediator::settle`). An empty
    /// bus yields an empty list; turning that into an error is the
    /// mediator's job.
    pub fn publish<'a>(&'a self, action: &'a A::Action) -> Vec<ActorReply<'a, A>> {
        self.actors
            .iter()
            .map(|actor| ActorReply {
                actor,
                reply: actor.test(action),
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Failure header with `${bus}` substituted.
    pub fn fail_message(&self) -> String {
        self.fail_message.replace("${bus}", &self.name)
    }

    pub fn actors(&self) -> &[Arc<A>] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl<A: ?Sized + Actor> fmt::Debug for Bus<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.actors.iter().map(|a| a.name()).collect();
        f.debug_struct("Bus")
            .field("name", &self.name)
            .field("actors", &names)
            .finish()
    }
}
