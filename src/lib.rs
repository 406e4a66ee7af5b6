//! SWB submission gateway.
//!
//! A small HTTP API in front of the SWB rental sheets. Clients submit form
//! data together with a fingerprint of the schema they were built against;
//! the gateway rejects submissions from clients whose schema has drifted
//! from the server's, shape-checks the payload, and acknowledges accepted
//! submissions. Nothing is persisted.
//!
//! The binary in `main.rs` wires these modules together; they are exposed
//! as a library so integration tests can assemble the router in-process.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;
