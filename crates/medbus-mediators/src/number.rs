//! Mediator selecting the actor whose test result carries the minimum or
//! maximum value of one numeric attribute.
//!
//! The attribute is read through an accessor supplied at construction; a
//! candidate whose accessor yields `None` (or NaN) is considered but can
//! never win.

use std::fmt;
use std::sync::Arc;

use medbus_bus::{Actor, Bus, Mediator, Reply};
use medbus_core::config::{NumberMediatorConfig, NumberType};
use medbus_core::test_result::TestResult;

/// Reads the compared attribute off an accepted test value.
pub type FieldAccessor<T> = Arc<dyn Fn(&T) -> Option<f64> + Send + Sync>;

pub struct NumberMediator<A: ?Sized + Actor> {
    name: String,
    bus: Arc<Bus<A>>,
    field: String,
    accessor: FieldAccessor<A::Test>,
    mode: NumberType,
    ignore_failures: bool,
}

impl<A: ?Sized + Actor + 'static> NumberMediator<A> {
    pub fn new<F>(name: impl Into<String>, bus: Arc<Bus<A>>, field: impl Into<String>, accessor: F, mode: NumberType) -> Self
    where
        F: Fn(&A::Test) -> Option<f64> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            bus,
            field: field.into(),
            accessor: Arc::new(accessor),
            mode,
            ignore_failures: false,
        }
    }

    /// Build from declarative config; the accessor still comes from code.
    pub fn from_config<F>(name: impl Into<String>, bus: Arc<Bus<A>>, config: &NumberMediatorConfig, accessor: F) -> Self
    where
        F: Fn(&A::Test) -> Option<f64> + Send + Sync + 'static,
    {
        Self::new(name, bus, config.field.clone(), accessor, config.mode).ignore_failures(config.ignore_failures)
    }

    /// Tolerate rejected candidates instead of failing on the first one.
    pub fn ignore_failures(mut self, ignore: bool) -> Self {
        self.ignore_failures = ignore;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn mode(&self) -> NumberType {
        self.mode
    }

    fn beats(&self, candidate: f64, best: f64) -> bool {
        match self.mode {
            NumberType::Min => candidate < best,
            NumberType::Max => candidate > best,
        }
    }
}

impl<A: ?Sized + Actor + 'static> Mediator<A> for NumberMediator<A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn bus(&self) -> &Bus<A> {
        &self.bus
    }

    fn mediate_with(&self, _action: &A::Action, replies: &[Reply<A>]) -> TestResult<Arc<A>> {
        let mut failures: Vec<&str> = Vec::new();
        let mut best: Option<(f64, usize)> = None;

        for (i, reply) in replies.iter().enumerate() {
            let value = match &reply.result {
                TestResult::Passed(test) => (self.accessor)(test),
                TestResult::Failed(reason) if self.ignore_failures => {
                    failures.push(reason);
                    continue;
                }
                TestResult::Failed(reason) => return TestResult::reject(reason.clone()),
            };
            let Some(value) = value.filter(|v| !v.is_nan()) else {
                continue;
            };
            match best {
                Some((b, _)) if !self.beats(value, b) => {}
                _ => best = Some((value, i)),
            }
        }

        match best {
            Some((_, i)) => TestResult::accept(Arc::clone(&replies[i].actor)),
            None => TestResult::reject(self.construct_failure_message(&failures)),
        }
    }
}

impl<A: ?Sized + Actor> fmt::Debug for NumberMediator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberMediator")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("mode", &self.mode)
            .field("ignore_failures", &self.ignore_failures)
            .finish()
    }
}
