//! JSON-RPC client for an XRP Ledger node.
//!
//! Provides:
//! - [`Transport`]: the one request/response primitive, with an HTTP implementation
//! - [`XrplClient`]: typed calls (`fee`, `submit`, `account_info`, `account_objects`,
//!   `ledger`, `tx`, `ripple_path_find`, `channel_verify`, `server_info`,
//!   `ledger_accept`)
//! - [`scanner`]: bounded fixed-interval polling, and the `wait_for_*` helpers built on it
//! - [`ClientConfig`]: TOML-backed endpoint, timeout and polling settings
//!
//! Nothing here logs above `debug` or prints; failures come back as values.

pub mod account;
pub mod channel;
pub mod client;
pub mod config;
pub mod confirm;
pub mod error;
pub mod fee;
pub mod ledger;
pub mod path;
pub mod scanner;
pub mod server;
pub mod submit;
pub mod transport;
pub mod tx;

pub use account::{
    AccountInfoRequestParams, AccountInfoResult, AccountObjectType, AccountObjectsRequestParams,
    AccountObjectsResult, QueueData, QueueTransaction,
};
pub use channel::{ChannelVerifyRequestParams, ChannelVerifyResult, UnsignedClaim};
pub use client::XrplClient;
pub use config::{ClientConfig, ScanConfig};
pub use confirm::ConfirmError;
pub use error::{ConfigError, RpcError, TransportError};
pub use fee::{FeeDrops, FeeLevels, FeeResult};
pub use ledger::{AcceptLedgerResult, LedgerHeader, LedgerRequestParams, LedgerResult};
pub use path::{PathAlternative, RipplePathFindRequestParams, RipplePathFindResult};
pub use scanner::{scan, scan_until, Observation, ScanError, ScanPolicy, ScanState, Scanner, Transient};
pub use server::{ServerInfo, ServerInfoResult, ValidatedLedgerInfo};
pub use submit::{SubmitRequestParams, SubmitResult};
pub use transport::{HttpTransport, Transport};
pub use tx::{TransactionMetadata, TransactionRequestParams, TransactionResult};
