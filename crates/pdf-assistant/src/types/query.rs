//! Question request type

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Body of `POST /ask`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    /// The question to answer
    #[serde(default)]
    pub question: Option<String>,
}

impl AskRequest {
    /// The question, rejecting a missing or blank one
    pub fn question(&self) -> Result<&str> {
        match self.question.as_deref() {
            Some(q) if !q.trim().is_empty() => Ok(q),
            _ => Err(Error::invalid_argument("No question provided")),
        }
    }
}
