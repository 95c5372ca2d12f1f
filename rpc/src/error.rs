//! RPC client error types.

use thiserror::Error;
use xrpl_transactions::{SigningError, TransactionError};

/// Error codes the node answers with while a resource is not visible *yet*.
///
/// A freshly funded account, a just-submitted transaction or a ledger that has
/// not closed all surface as one of these until the next validated ledger.
pub const NOT_YET_CODES: [&str; 7] = [
    "actNotFound",
    "txnNotFound",
    "lgrNotFound",
    "entryNotFound",
    "notReady",
    "noCurrent",
    "noNetwork",
];

/// The request never produced a usable `result` object.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("node unreachable: {0}")]
    Unreachable(String),

    #[error("node answered with HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl TransportError {
    /// Connection failures and server-side (5xx) statuses may succeed on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unreachable(_) => true,
            Self::Status(code) => *code >= 500,
            Self::Malformed(_) => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The node rejected the request; its error fields are carried verbatim.
    #[error("{method} rejected by node: {error}{}", .error_message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    Application {
        method: &'static str,
        error: String,
        error_code: Option<i64>,
        error_message: Option<String>,
    },

    /// Request params could not be encoded or the result did not have the expected shape.
    #[error("{method}: unexpected wire shape: {source}")]
    Codec {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl RpcError {
    /// True when asking again later may give a different answer.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_transient(),
            Self::Application { error, .. } => NOT_YET_CODES.contains(&error.as_str()),
            Self::Codec { .. } | Self::Signing(_) | Self::Transaction(_) => false,
        }
    }

    /// The node's error token (`actNotFound`, `invalidParams`, ...), if any.
    pub fn node_error(&self) -> Option<&str> {
        match self {
            Self::Application { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode config: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),

    #[error("cannot build HTTP client: {0}")]
    Http(String),
}
