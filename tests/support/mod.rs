//! Shared actors and loggers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use medbus_bus::Actor;
use medbus_core::context::ActionContext;
use medbus_core::error::Result;
use medbus_core::log::{LogLevel, Logger};
use medbus_core::test_result::TestResult;
use medbus_mediators::{JoinAction, JoinActor, JoinCoefficients};

/// Join actor reporting fixed coefficients.
#[derive(Debug)]
pub struct DummyJoinActor {
    pub id: u32,
    pub coefficients: JoinCoefficients,
    pub reject: bool,
    pub include_in_logs: bool,
    physical_name: String,
}

impl DummyJoinActor {
    pub fn new(id: u32, coefficients: JoinCoefficients) -> Self {
        Self {
            id,
            coefficients,
            reject: false,
            include_in_logs: true,
            physical_name: format!("PHYSICAL{}", id),
        }
    }

    pub fn rejecting(id: u32) -> Self {
        Self {
            reject: true,
            ..Self::new(id, JoinCoefficients::default())
        }
    }

    pub fn rejects(mut self) -> Self {
        self.reject = true;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.include_in_logs = false;
        self
    }
}

#[async_trait]
impl Actor for DummyJoinActor {
    type Action = JoinAction;
    type Test = JoinCoefficients;
    type Output = u32;

    fn name(&self) -> &str {
        &self.physical_name
    }

    fn bus_fail_message(&self) -> Option<&str> {
        Some("BUS FAIL MESSAGE")
    }

    async fn test(&self, _action: &JoinAction) -> Result<TestResult<JoinCoefficients>> {
        if self.reject {
            return Ok(TestResult::reject(format!("Actor {} fails", self.id)));
        }
        Ok(TestResult::accept(self.coefficients))
    }

    async fn run(&self, _action: &JoinAction) -> Result<u32> {
        Ok(self.id)
    }
}

impl JoinActor for DummyJoinActor {
    fn logical_type(&self) -> &str {
        "LOGICAL"
    }

    fn physical_name(&self) -> &str {
        &self.physical_name
    }

    fn include_in_logs(&self) -> bool {
        self.include_in_logs
    }
}

pub fn coeffs(iterations: f64, persisted_items: f64, blocking_items: f64, request_time: f64) -> JoinCoefficients {
    JoinCoefficients::new(iterations, persisted_items, blocking_items, request_time)
}

/// Logger keeping every record for later inspection.
#[derive(Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<(LogLevel, String, Value)>>,
}

impl RecordingLogger {
    pub fn records(&self) -> Vec<(LogLevel, String, Value)> {
        self.records.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str, data: &Value) {
        self.records
            .lock()
            .unwrap()
            .push((level, message.to_string(), data.clone()));
    }
}

/// Test value exposing two optional numeric attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub time: Option<f64>,
    pub priority: Option<f64>,
}

/// Generic actor on a plain `ActionContext` bus with a configurable reply.
#[derive(Debug)]
pub struct ScoredActor {
    pub name: String,
    pub outcome: std::result::Result<Score, String>,
    pub delay_ms: u64,
}

impl ScoredActor {
    pub fn time(name: &str, time: f64) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            outcome: Ok(Score {
                time: Some(time),
                priority: None,
            }),
            delay_ms: 0,
        })
    }

    pub fn score(name: &str, score: Score) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            outcome: Ok(score),
            delay_ms: 0,
        })
    }

    pub fn failing(name: &str, reason: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            outcome: Err(reason.into()),
            delay_ms: 0,
        })
    }

    pub fn delayed(name: &str, time: f64, delay_ms: u64) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            outcome: Ok(Score {
                time: Some(time),
                priority: None,
            }),
            delay_ms,
        })
    }
}

#[async_trait]
impl Actor for ScoredActor {
    type Action = ActionContext;
    type Test = Score;
    type Output = String;

    fn name(&self) -> &str {
        &self.name
    }

    async fn test(&self, _action: &ActionContext) -> Result<TestResult<Score>> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        Ok(match &self.outcome {
            Ok(score) => TestResult::accept(*score),
            Err(reason) => TestResult::reject(reason.clone()),
        })
    }

    async fn run(&self, _action: &ActionContext) -> Result<String> {
        Ok(self.name.clone())
    }
}
