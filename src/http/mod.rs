//! HTTP transport layer for the RPC protocol
//!
//! Provides the external API routing, including the base `/` envelope
//! listener and the convenience endpoints.

pub mod handlers;
