//! Outcome of an actor's applicability/cost probe.
//!
//! Expected rejections ("cannot handle this action") travel as a value, never
//! as an `Err`. Only `get_or_err` turns a rejection into an error, for callers
//! that must have a value.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum TestResult<V> {
    Passed(V),
    Failed(String),
}

impl<V> TestResult<V> {
    pub fn accept(value: V) -> Self {
        TestResult::Passed(value)
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        TestResult::Failed(reason.into())
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, TestResult::Passed(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TestResult::Failed(_))
    }

    /// Rejection reason, if rejected.
    pub fn reason(&self) -> Option<&str> {
        match self {
            TestResult::Passed(_) => None,
            TestResult::Failed(reason) => Some(reason),
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            TestResult::Passed(v) => Some(v),
            TestResult::Failed(_) => None,
        }
    }

    /// Unwrap the accepted value; a rejection becomes `Error::TestRejected`.
    pub fn get_or_err(self) -> Result<V> {
        match self {
            TestResult::Passed(v) => Ok(v),
            TestResult::Failed(reason) => Err(Error::TestRejected(reason)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> TestResult<U> {
        match self {
            TestResult::Passed(v) => TestResult::Passed(f(v)),
            TestResult::Failed(reason) => TestResult::Failed(reason),
        }
    }

    pub fn into_result(self) -> std::result::Result<V, String> {
        match self {
            TestResult::Passed(v) => Ok(v),
            TestResult::Failed(reason) => Err(reason),
        }
    }
}
