//! Mediator choosing the physical join operator with the lowest weighted,
//! limit-adjusted cost.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use medbus_bus::{Bus, Mediator, Reply};
use medbus_core::config::WeightConfig;
use medbus_core::context::keys;
use medbus_core::error::Result;
use medbus_core::log::Logger;
use medbus_core::test_result::TestResult;

use crate::cost::{apply_limit, cheapest, join_cost};
use crate::join::{JoinAction, JoinActor, JoinCoefficients};

/// Debug record emitted when a join operator is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinDecisionRecord {
    /// Number of join entries in the action.
    pub entries: usize,
    /// Variables of each entry.
    pub variables: Vec<Vec<String>>,
    /// Raw cost vectors of the accepted candidates, keyed by label.
    pub coefficients: BTreeMap<String, JoinCoefficients>,
    /// Adjusted costs used for selection, keyed by label.
    pub costs: BTreeMap<String, f64>,
}

pub struct JoinCoefficientsMediator<A: ?Sized> {
    name: String,
    bus: Arc<Bus<A>>,
    weights: WeightConfig,
}

impl<A: ?Sized + JoinActor + 'static> JoinCoefficientsMediator<A> {
    /// Fails with `Error::Config` on negative or non-finite weights.
    pub fn new(name: impl Into<String>, bus: Arc<Bus<A>>, weights: WeightConfig) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            name: name.into(),
            bus,
            weights,
        })
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Raw (unadjusted) cost of one candidate under this mediator's weights.
    pub fn cost(&self, coefficients: &JoinCoefficients) -> f64 {
        join_cost(coefficients, &self.weights)
    }

    fn log_decision(&self, action: &JoinAction, winner: &A, candidates: &[(&Arc<A>, &JoinCoefficients)], costs: &[f64]) {
        if !winner.include_in_logs() {
            return;
        }
        let Some(logger) = action.context.get(&keys::LOG) else {
            return;
        };

        let mut record = JoinDecisionRecord {
            entries: action.entries.len(),
            variables: action.variables(),
            coefficients: BTreeMap::new(),
            costs: BTreeMap::new(),
        };
        for ((actor, coefficients), cost) in candidates.iter().zip(costs) {
            let label = actor.label();
            record.coefficients.insert(label.clone(), **coefficients);
            record.costs.insert(label, *cost);
        }

        let message = format!("Determined physical join operator '{}'", winner.label());
        match serde_json::to_value(&record) {
            Ok(data) => logger.debug(&message, &data),
            Err(e) => logger.warn(&message, &serde_json::json!({ "recordError": e.to_string() })),
        }
    }
}

impl<A: ?Sized + JoinActor + 'static> Mediator<A> for JoinCoefficientsMediator<A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn bus(&self) -> &Bus<A> {
        &self.bus
    }

    fn mediate_with(&self, action: &JoinAction, replies: &[Reply<A>]) -> TestResult<Arc<A>> {
        let mut failures: Vec<&str> = Vec::new();
        let mut candidates: Vec<(&Arc<A>, &JoinCoefficients)> = Vec::with_capacity(replies.len());
        for reply in replies {
            match &reply.result {
                TestResult::Passed(coefficients) => candidates.push((&reply.actor, coefficients)),
                TestResult::Failed(reason) => failures.push(reason),
            }
        }
        if candidates.is_empty() {
            return TestResult::reject(self.construct_failure_message(&failures));
        }

        let mut costs: Vec<f64> = candidates.iter().map(|(_, c)| self.cost(c)).collect();
        // A zero limit carries no information and is ignored.
        if let Some(&limit) = action.context.get(&keys::LIMIT_INDICATOR).filter(|&&l| l > 0) {
            let coefficients: Vec<&JoinCoefficients> = candidates.iter().map(|(_, c)| *c).collect();
            apply_limit(&coefficients, &mut costs, limit);
        }

        let Some(best) = cheapest(&costs) else {
            return TestResult::reject(self.construct_failure_message(&failures));
        };
        let winner = candidates[best].0;
        self.log_decision(action, winner, &candidates, &costs);
        TestResult::accept(Arc::clone(winner))
    }
}
