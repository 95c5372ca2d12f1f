//! Confirmation scanning end-to-end against the simulated node: submit, then wait for
//! the effect to show up in validated state.
//!
//! All tests run on a paused clock, so polling intervals cost no wall time.

use std::sync::Arc;
use std::time::Duration;
use xrpl_nullables::{NullKey, NullSigner, NullTransport, SimulatedNode};
use xrpl_rpc::{
    AccountInfoResult, ConfirmError, Observation, RpcError, ScanError, ScanPolicy, XrplClient,
};
use xrpl_transactions::{AccountSet, AccountSetFields, Transaction, TransactionCommon};
use xrpl_types::{AccountRootFlags, AccountSetFlag, Address, XrpCurrencyAmount};

const INTERVAL: Duration = Duration::from_millis(500);
const MAX_ATTEMPTS: u32 = 6;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn client_for(node: &Arc<SimulatedNode>) -> XrplClient<Arc<SimulatedNode>> {
    XrplClient::new(Arc::clone(node)).with_scan_policy(ScanPolicy::new(INTERVAL, MAX_ATTEMPTS))
}

fn funded(node: &SimulatedNode, seed: &str) -> (NullKey, Address) {
    let key = NullKey::new(seed);
    let address = key.address().expect("address");
    node.fund(&address, 100_000_000);
    (key, address)
}

fn freeze_toggle(account: &Address, sequence: u32, set: bool) -> Transaction {
    let common = TransactionCommon::new(account.clone(), XrpCurrencyAmount::of_drops(10), sequence);
    let fields = if set {
        AccountSetFields::set(common, AccountSetFlag::GlobalFreeze)
    } else {
        AccountSetFields::clear(common, AccountSetFlag::GlobalFreeze)
    };
    AccountSet::new(fields).expect("valid AccountSet").into()
}

// ---------------------------------------------------------------------------
// Flag round trip
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn global_freeze_set_then_cleared() {
    let node = Arc::new(SimulatedNode::new().with_auto_close(2));
    let client = client_for(&node);
    let (key, account) = funded(&node, "issuer");

    let info = client.wait_for_validated_account(&account).await.expect("validated account");
    assert!(!info.account_data.has_flag(AccountRootFlags::GLOBAL_FREEZE));
    let sequence = info.account_data.sequence;

    let submitted = client
        .sign_and_submit(&NullSigner, &key, &freeze_toggle(&account, sequence, true))
        .await
        .expect("submit");
    assert!(submitted.is_success(), "{}", submitted.engine_result);
    let hash = *submitted.transaction_hash().expect("hash in tx_json");

    let frozen = client
        .wait_for_account_flag(&account, AccountRootFlags::GLOBAL_FREEZE, true)
        .await
        .expect("flag set");
    assert!(frozen.validated);
    assert_eq!(frozen.account_data.sequence, sequence + 1);

    let found = client
        .wait_for_validated_transaction::<Transaction>(&hash)
        .await
        .expect("validated tx");
    assert_eq!(found.engine_result(), Some("tesSUCCESS"));
    let narrowed = found.try_map::<AccountSet>().expect("AccountSet");
    assert_eq!(narrowed.transaction.set_flag, Some(AccountSetFlag::GlobalFreeze));

    let submitted = client
        .sign_and_submit(&NullSigner, &key, &freeze_toggle(&account, sequence + 1, false))
        .await
        .expect("submit");
    assert!(submitted.is_success());

    let thawed = client
        .wait_for_account_flag(&account, AccountRootFlags::GLOBAL_FREEZE, false)
        .await
        .expect("flag cleared");
    assert_eq!(thawed.account_data.sequence, sequence + 2);
}

#[tokio::test(start_paused = true)]
async fn flag_absent_from_validated_state_until_close() {
    let node = Arc::new(SimulatedNode::new());
    let client = client_for(&node);
    let (key, account) = funded(&node, "issuer");
    node.close_ledger();

    let sequence = node.account(&account, true).expect("validated").sequence;
    client
        .sign_and_submit(&NullSigner, &key, &freeze_toggle(&account, sequence, true))
        .await
        .expect("submit");

    // Open ledger has it, validated state does not.
    assert!(node
        .account(&account, false)
        .expect("open")
        .has_flag(AccountRootFlags::GLOBAL_FREEZE));
    let error = client
        .wait_for_account_flag(&account, AccountRootFlags::GLOBAL_FREEZE, true)
        .await
        .unwrap_err();
    match error {
        ScanError::ConfirmationTimeout { attempts, last } => {
            assert_eq!(attempts, MAX_ATTEMPTS);
            match last {
                Some(Observation::Unsatisfied(info)) => {
                    assert!(!info.account_data.has_flag(AccountRootFlags::GLOBAL_FREEZE))
                }
                other => panic!("expected an unsatisfied observation, got {other:?}"),
            }
        }
        other => panic!("expected timeout, got {other:?}"),
    }

    node.close_ledger();
    client
        .wait_for_account_flag(&account, AccountRootFlags::GLOBAL_FREEZE, true)
        .await
        .expect("flag set after close");
}

// ---------------------------------------------------------------------------
// Transient "not yet" answers
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn unvalidated_account_is_polled_past() {
    let node = Arc::new(SimulatedNode::new());
    let client = client_for(&node);
    let (_, account) = funded(&node, "newcomer");

    let error: ConfirmError<AccountInfoResult> =
        client.wait_for_validated_account(&account).await.unwrap_err();
    let ScanError::ConfirmationTimeout { attempts, last } = error else {
        panic!("expected timeout");
    };
    assert_eq!(attempts, MAX_ATTEMPTS);
    let Some(Observation::NotYet(last)) = last else {
        panic!("expected a transient failure as last observation");
    };
    assert_eq!(last.node_error(), Some("actNotFound"));
    assert_eq!(node.requests(), u64::from(MAX_ATTEMPTS));

    node.close_ledger();
    let info = client.wait_for_validated_account(&account).await.expect("validated");
    assert_eq!(info.account_data.balance.drops(), 100_000_000);
}

#[tokio::test(start_paused = true)]
async fn rejected_submission_never_validates() {
    let node = Arc::new(SimulatedNode::new().with_auto_close(1));
    let client = client_for(&node);
    let (key, account) = funded(&node, "issuer");

    let submitted = client
        .sign_and_submit(&NullSigner, &key, &freeze_toggle(&account, 1, true))
        .await
        .expect("submit");
    assert!(!submitted.is_success());
    assert_eq!(submitted.engine_result, "tefPAST_SEQ");

    let hash = *submitted.transaction_hash().expect("hash in tx_json");
    let error = client
        .wait_for_validated_transaction::<Transaction>(&hash)
        .await
        .unwrap_err();
    assert!(error.is_timeout());
}

#[tokio::test(start_paused = true)]
async fn ledger_advances_with_auto_close() {
    let node = Arc::new(SimulatedNode::new().with_auto_close(1));
    let client = client_for(&node);
    let after = node.validated_ledger();

    let ledger = client.wait_for_ledger_advance(after).await.expect("advance");
    assert!(ledger.validated);
    assert!(ledger.sequence().expect("sequence") > after);
}

#[tokio::test(start_paused = true)]
async fn server_info_tracks_validated_ledger() {
    let node = Arc::new(SimulatedNode::new());
    let client = client_for(&node);
    let before = client.server_info().await.expect("server_info");
    assert_eq!(before.info.validated_sequence(), Some(node.validated_ledger()));

    client.accept_ledger().await.expect("ledger_accept");
    let after = client.server_info().await.expect("server_info");
    let validated = after.info.validated_ledger.as_ref().expect("validated ledger");
    assert_eq!(validated.seq, node.validated_ledger());
    assert!(validated.seq > before.info.validated_sequence().expect("sequence"));
    assert!(after.info.has_ledger(validated.seq));
    assert_eq!(validated.base_fee_xrp, 0.00001);
}

// ---------------------------------------------------------------------------
// Attempt accounting
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn unreachable_node_times_out_after_exact_attempts() {
    let client = XrplClient::new(Arc::new(NullTransport::new()))
        .with_scan_policy(ScanPolicy::new(INTERVAL, MAX_ATTEMPTS));
    let account = SimulatedNode::genesis();

    let started = tokio::time::Instant::now();
    let error = client.wait_for_validated_account(&account).await.unwrap_err();
    assert!(error.is_timeout());
    assert_eq!(client.transport().call_count(), MAX_ATTEMPTS as usize);
    // No sleep after the final attempt.
    assert_eq!(started.elapsed(), INTERVAL * (MAX_ATTEMPTS - 1));
}

#[tokio::test(start_paused = true)]
async fn permanent_error_stops_scan_at_once() {
    let transport = Arc::new(NullTransport::new());
    transport.respond_error("actMalformed", 35, "Account malformed.");
    let client =
        XrplClient::new(Arc::clone(&transport)).with_scan_policy(ScanPolicy::new(INTERVAL, MAX_ATTEMPTS));

    let error = client
        .wait_for_validated_account(&SimulatedNode::genesis())
        .await
        .unwrap_err();
    match error {
        ScanError::Query(RpcError::Application { error, .. }) => assert_eq!(error, "actMalformed"),
        other => panic!("expected query error, got {other:?}"),
    }
    assert_eq!(transport.call_count(), 1);
}
