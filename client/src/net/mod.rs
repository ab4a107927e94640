//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds requests and unwraps envelopes, `transport` moves bytes over
//! HTTP, `types` defines the wire schema, and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
