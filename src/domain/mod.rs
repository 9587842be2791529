//! Operation catalog and the pure math library behind it
//!
//! Provides the core business logic of the calculator exposed over the RPC
//! protocol.

pub mod ops;
pub mod registry;
