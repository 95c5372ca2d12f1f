//! Typed calls over a [`Transport`].

use crate::account::{
    AccountInfoRequestParams, AccountInfoResult, AccountObjectsRequestParams, AccountObjectsResult,
};
use crate::channel::{ChannelVerifyRequestParams, ChannelVerifyResult};
use crate::error::RpcError;
use crate::fee::FeeResult;
use crate::ledger::{AcceptLedgerResult, LedgerRequestParams, LedgerResult};
use crate::path::{RipplePathFindRequestParams, RipplePathFindResult};
use crate::scanner::ScanPolicy;
use crate::server::ServerInfoResult;
use crate::submit::{SubmitRequestParams, SubmitResult};
use crate::transport::Transport;
use crate::tx::{TransactionRequestParams, TransactionResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use xrpl_transactions::{SignedTransaction, Signer, Transaction};

/// One method per node call. Each call is exactly one request/response pair; the
/// client never retries. Polling for confirmation lives in the `wait_for_*` helpers.
#[derive(Clone, Debug)]
pub struct XrplClient<T> {
    transport: T,
    scan_policy: ScanPolicy,
}

impl<T: Transport> XrplClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            scan_policy: ScanPolicy::default(),
        }
    }

    /// Policy used by the `wait_for_*` helpers.
    pub fn with_scan_policy(mut self, policy: ScanPolicy) -> Self {
        self.scan_policy = policy;
        self
    }

    pub fn scan_policy(&self) -> &ScanPolicy {
        &self.scan_policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fee(&self) -> Result<FeeResult, RpcError> {
        self.call("fee", &serde_json::Map::new()).await
    }

    pub async fn submit(&self, signed: &SignedTransaction) -> Result<SubmitResult, RpcError> {
        self.call("submit", &SubmitRequestParams::of(signed)).await
    }

    /// Attach the signer's public key, sign, and submit.
    pub async fn sign_and_submit<S: Signer>(
        &self,
        signer: &S,
        key: &S::KeyMaterial,
        transaction: &Transaction,
    ) -> Result<SubmitResult, RpcError> {
        let public_key = signer.derive_public_key(key)?;
        let signed = signer.sign(&transaction.with_signing_key(public_key), key)?;
        tracing::debug!(
            kind = %signed.transaction.transaction_type(),
            hash = %signed.hash,
            "signed transaction"
        );
        self.submit(&signed).await
    }

    pub async fn account_info(
        &self,
        params: &AccountInfoRequestParams,
    ) -> Result<AccountInfoResult, RpcError> {
        self.call("account_info", params).await
    }

    pub async fn account_objects(
        &self,
        params: &AccountObjectsRequestParams,
    ) -> Result<AccountObjectsResult, RpcError> {
        self.call("account_objects", params).await
    }

    pub async fn ledger(&self, params: &LedgerRequestParams) -> Result<LedgerResult, RpcError> {
        self.call("ledger", params).await
    }

    /// Look up a transaction, decoded as `Tx`: [`Transaction`] for any kind, or a
    /// specific kind such as `Payment`, in which case another kind is a codec error.
    pub async fn transaction<Tx: DeserializeOwned>(
        &self,
        params: &TransactionRequestParams,
    ) -> Result<TransactionResult<Tx>, RpcError> {
        self.call("tx", params).await
    }

    pub async fn ripple_path_find(
        &self,
        params: &RipplePathFindRequestParams,
    ) -> Result<RipplePathFindResult, RpcError> {
        self.call("ripple_path_find", params).await
    }

    pub async fn channel_verify(
        &self,
        params: &ChannelVerifyRequestParams,
    ) -> Result<ChannelVerifyResult, RpcError> {
        self.call("channel_verify", params).await
    }

    pub async fn server_info(&self) -> Result<ServerInfoResult, RpcError> {
        self.call("server_info", &serde_json::Map::new()).await
    }

    /// Close the open ledger. Admin only; stand-alone nodes need this to advance.
    pub async fn accept_ledger(&self) -> Result<AcceptLedgerResult, RpcError> {
        self.call("ledger_accept", &serde_json::Map::new()).await
    }

    async fn call<P, R>(&self, method: &'static str, params: &P) -> Result<R, RpcError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let params =
            serde_json::to_value(params).map_err(|source| RpcError::Codec { method, source })?;

        let started = Instant::now();
        let outcome = self.transport.invoke(method, params).await;
        tracing::debug!(
            method,
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            "rpc call"
        );

        let result = outcome?;
        if result.get("status").and_then(Value::as_str) == Some("error") {
            return Err(application_error(method, &result));
        }
        serde_json::from_value(result).map_err(|source| RpcError::Codec { method, source })
    }
}

fn application_error(method: &'static str, result: &Value) -> RpcError {
    let text = |key: &str| result.get(key).and_then(Value::as_str).map(str::to_string);
    RpcError::Application {
        method,
        error: text("error").unwrap_or_else(|| "unknown".to_string()),
        error_code: result.get("error_code").and_then(Value::as_i64),
        error_message: text("error_message"),
    }
}
