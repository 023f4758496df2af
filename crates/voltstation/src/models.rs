//! Messages exchanged with the completion API.
//!
//! The GigaChat chat endpoint accepts the familiar `{role, content}` turn format,
//! so the internal model serializes directly into the request payload.
pub mod message;
pub mod role;
