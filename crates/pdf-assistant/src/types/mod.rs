//! Request and response types for the HTTP boundary

pub mod query;
pub mod response;

pub use query::AskRequest;
pub use response::{AskResponse, IngestResponse, IngestStatus, InfoResponse, SessionSummary};
