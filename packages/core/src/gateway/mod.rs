//! DataScope Gateway Client
//!
//! Authenticated HTTP access to the Gateway that owns dataset storage and
//! access control. Every tool call flows through this module; the core
//! never bypasses the Gateway to reach a store directly.

mod client;
mod error;

pub use client::GatewayClient;
pub use error::GatewayError;
