use thiserror::Error;

/// Canonical result for medbus.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The bus had no registered actors when the action was published.
    #[error("No actors are able to reply to a message in the bus {bus}")]
    NoActors { bus: String },

    /// A mediation round could not select an actor. The message is the
    /// full, already formatted failure text.
    #[error("{0}")]
    Mediation(String),

    /// A rejected `TestResult` was forcibly unwrapped.
    #[error("{0}")]
    TestRejected(String),

    /// Hard failure raised by an actor implementation (not a rejection).
    #[error("actor '{actor}' failed: {message}")]
    Actor { actor: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}

impl Error {
    pub fn actor(actor: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Actor {
            actor: actor.into(),
            message: message.into(),
        }
    }
}
