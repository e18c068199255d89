//! Outbound services used by the lifecycle orchestrator.

pub mod announcement;
pub mod http_session;
