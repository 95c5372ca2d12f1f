//! Nullable infrastructure for deterministic testing.
//!
//! The outside world (the node behind the transport, and key material behind the
//! signer) is abstracted behind traits. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be scripted and inspected programmatically
//! - Never touch the network
//!
//! Usage: swap [`xrpl_rpc::HttpTransport`] for [`NullTransport`] or [`SimulatedNode`]
//! and a real signer for [`NullSigner`] in tests.

pub mod node;
pub mod signer;
pub mod transport;

pub use node::SimulatedNode;
pub use signer::{NullKey, NullSigner};
pub use transport::{NullTransport, RecordedCall};
