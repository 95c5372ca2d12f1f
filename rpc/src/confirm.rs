//! Waiting for effects to reach validated state.
//!
//! Each helper is a [`scan_until`] over one client call, using the client's
//! [`ScanPolicy`](crate::ScanPolicy).

use crate::account::{AccountInfoRequestParams, AccountInfoResult};
use crate::client::XrplClient;
use crate::error::RpcError;
use crate::ledger::{LedgerRequestParams, LedgerResult};
use crate::scanner::{scan_until, ScanError};
use crate::transport::Transport;
use crate::tx::{TransactionRequestParams, TransactionResult};
use serde::de::DeserializeOwned;
use std::fmt;
use xrpl_types::{AccountRootFlags, Address, Hash256, LedgerIndex};

/// A scan over client calls.
pub type ConfirmError<T> = ScanError<T, RpcError>;

impl<T: Transport> XrplClient<T> {
    /// Wait until `account` exists in the latest validated ledger.
    pub async fn wait_for_validated_account(
        &self,
        account: &Address,
    ) -> Result<AccountInfoResult, ConfirmError<AccountInfoResult>> {
        let params = AccountInfoRequestParams::at(account.clone(), LedgerIndex::Validated);
        scan_until(
            self.scan_policy(),
            || self.account_info(&params),
            |info| info.validated,
        )
        .await
    }

    /// Wait until the transaction `hash` is in a validated ledger.
    pub async fn wait_for_validated_transaction<Tx>(
        &self,
        hash: &Hash256,
    ) -> Result<TransactionResult<Tx>, ConfirmError<TransactionResult<Tx>>>
    where
        Tx: DeserializeOwned + fmt::Debug,
    {
        let params = TransactionRequestParams::of(*hash);
        scan_until(
            self.scan_policy(),
            || self.transaction::<Tx>(&params),
            |result| result.validated,
        )
        .await
    }

    /// Wait until validated state shows `flag` on `account` as `expected`.
    pub async fn wait_for_account_flag(
        &self,
        account: &Address,
        flag: AccountRootFlags,
        expected: bool,
    ) -> Result<AccountInfoResult, ConfirmError<AccountInfoResult>> {
        let params = AccountInfoRequestParams::at(account.clone(), LedgerIndex::Validated);
        scan_until(
            self.scan_policy(),
            || self.account_info(&params),
            |info| info.validated && info.account_data.flags.is_set(flag) == expected,
        )
        .await
    }

    /// Wait until the validated ledger sequence is past `after`.
    pub async fn wait_for_ledger_advance(
        &self,
        after: u32,
    ) -> Result<LedgerResult, ConfirmError<LedgerResult>> {
        let params = LedgerRequestParams::of(LedgerIndex::Validated);
        scan_until(
            self.scan_policy(),
            || self.ledger(&params),
            |result| result.sequence().is_some_and(|seq| seq > after),
        )
        .await
    }
}
