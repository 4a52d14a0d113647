//! Join actions, join cost vectors, and the physical join actor contract.

use serde::{Deserialize, Serialize};

use medbus_bus::Actor;
use medbus_core::context::{Action, ActionContext};

/// Estimated cost vector a physical join actor reports from `test`.
///
/// All fields are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCoefficients {
    /// Dominant work count (CPU proxy).
    pub iterations: f64,
    /// Items materialized in memory.
    pub persisted_items: f64,
    /// Items that must be fully consumed before the first output. Zero means
    /// the operator streams.
    pub blocking_items: f64,
    /// Estimated latency to the first result.
    pub request_time: f64,
}

impl JoinCoefficients {
    pub fn new(iterations: f64, persisted_items: f64, blocking_items: f64, request_time: f64) -> Self {
        Self {
            iterations,
            persisted_items,
            blocking_items,
            request_time,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking_items > 0.0
    }
}

/// One input of a join.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinEntry {
    /// Variable names bound by this entry.
    pub variables: Vec<String>,
}

impl JoinEntry {
    pub fn new<S: Into<String>>(variables: impl IntoIterator<Item = S>) -> Self {
        Self {
            variables: variables.into_iter().map(Into::into).collect(),
        }
    }
}

/// Action published on a join bus: the entries to join plus the query context.
#[derive(Debug, Clone, Default)]
pub struct JoinAction {
    pub entries: Vec<JoinEntry>,
    pub context: ActionContext,
}

impl JoinAction {
    pub fn new(entries: Vec<JoinEntry>, context: ActionContext) -> Self {
        Self { entries, context }
    }

    /// Per-entry variable names, in entry order.
    pub fn variables(&self) -> Vec<Vec<String>> {
        self.entries.iter().map(|e| e.variables.clone()).collect()
    }
}

impl Action for JoinAction {
    fn context(&self) -> &ActionContext {
        &self.context
    }
}

/// A physical join operator competing on a join bus.
pub trait JoinActor: Actor<Action = JoinAction, Test = JoinCoefficients> {
    /// Logical join kind this operator implements (e.g. `inner`).
    fn logical_type(&self) -> &str;

    /// Name of the physical algorithm (e.g. `hash`, `nested-loop`).
    fn physical_name(&self) -> &str;

    /// Whether choosing this operator is worth a debug record.
    fn include_in_logs(&self) -> bool {
        true
    }

    /// Stable label used in logs and cost tables.
    fn label(&self) -> String {
        format!("{}-{}", self.logical_type(), self.physical_name())
    }
}
