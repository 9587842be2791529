//! JSON-RPC protocol handling
//!
//! Provides the envelope representations and the transport-independent
//! request dispatcher both bindings share.

pub mod dispatcher;
pub mod envelope;
