//! Simulated node: an in-memory ledger behind the [`Transport`] trait.
//!
//! Models just enough of a stand-alone node for client and confirmation tests:
//! an open ledger that submissions apply to, and a validated snapshot that only
//! catches up when a ledger closes. Ledgers close on `ledger_accept`, on
//! [`SimulatedNode::close_ledger`], or automatically every N requests when built
//! with [`SimulatedNode::with_auto_close`].
//!
//! Accepts only blobs produced by [`NullSigner`](crate::NullSigner).

use crate::signer::blob_hash;
use async_trait::async_trait;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};
use xrpl_objects::AccountRootObject;
use xrpl_rpc::{Transport, TransportError};
use xrpl_transactions::Transaction;
use xrpl_types::{AccountRootFlags, AccountSetFlag, Address, Hash256, LedgerIndex, XrpCurrencyAmount};

/// Account id of the genesis account, `rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh`.
const GENESIS_ACCOUNT_ID: [u8; 20] = [
    0xB5, 0xF7, 0x62, 0x79, 0x8A, 0x53, 0xD5, 0x43, 0xA0, 0x14, 0xCA, 0xF8, 0xB2, 0x97, 0xCF, 0xF8,
    0xF2, 0xF9, 0x37, 0xE8,
];

/// All XRP that will ever exist, held by genesis at start.
const TOTAL_DROPS: u64 = 100_000_000_000_000_000;

const BASE_FEE: u64 = 10;

const DROPS_PER_XRP: f64 = 1_000_000.0;
const RESERVE_BASE_XRP: f64 = 10.0;
const RESERVE_INC_XRP: f64 = 2.0;

/// First open ledger of a fresh stand-alone node.
const FIRST_OPEN_LEDGER: u32 = 3;

type Accounts = BTreeMap<Address, AccountRootObject>;

struct TxRecord {
    /// Signed transaction JSON, `hash` included.
    json: Value,
    ledger: u32,
    index: u32,
    result: &'static str,
    delivered: Option<XrpCurrencyAmount>,
}

struct EngineResult {
    token: &'static str,
    code: i32,
    message: &'static str,
}

const TES_SUCCESS: EngineResult = EngineResult {
    token: "tesSUCCESS",
    code: 0,
    message: "The transaction was applied. Only final in a validated ledger.",
};
const TER_NO_ACCOUNT: EngineResult = EngineResult {
    token: "terNO_ACCOUNT",
    code: -96,
    message: "The source account does not exist.",
};
const TEF_PAST_SEQ: EngineResult = EngineResult {
    token: "tefPAST_SEQ",
    code: -190,
    message: "This sequence number has already passed.",
};
const TER_PRE_SEQ: EngineResult = EngineResult {
    token: "terPRE_SEQ",
    code: -92,
    message: "Missing/inapplicable prior transaction.",
};
const TER_INSUF_FEE_B: EngineResult = EngineResult {
    token: "terINSUF_FEE_B",
    code: -99,
    message: "Account balance can't pay fee.",
};
const TEC_UNFUNDED_PAYMENT: EngineResult = EngineResult {
    token: "tecUNFUNDED_PAYMENT",
    code: 104,
    message: "Insufficient XRP balance to send.",
};
const TEC_PATH_DRY: EngineResult = EngineResult {
    token: "tecPATH_DRY",
    code: 128,
    message: "Path could not send partial amount.",
};

struct NodeState {
    open: Accounts,
    validated: Accounts,
    current_ledger: u32,
    validated_ledger: u32,
    /// Transactions applied to the open ledger so far.
    open_tx_count: u32,
    transactions: HashMap<Hash256, TxRecord>,
    requests: u64,
    close_every: Option<u64>,
}

/// Which state a request reads.
enum View {
    Open,
    Validated,
}

pub struct SimulatedNode {
    state: Mutex<NodeState>,
}

impl SimulatedNode {
    pub fn new() -> Self {
        let genesis = Self::genesis();
        let mut accounts = Accounts::new();
        accounts.insert(
            genesis.clone(),
            new_account_root(genesis, XrpCurrencyAmount::of_drops(TOTAL_DROPS), 1, 1),
        );
        Self {
            state: Mutex::new(NodeState {
                validated: accounts.clone(),
                open: accounts,
                current_ledger: FIRST_OPEN_LEDGER,
                validated_ledger: FIRST_OPEN_LEDGER - 1,
                open_tx_count: 0,
                transactions: HashMap::new(),
                requests: 0,
                close_every: None,
            }),
        }
    }

    /// Close the open ledger before every `every`-th request (0 disables).
    pub fn with_auto_close(self, every: u64) -> Self {
        self.lock().close_every = (every > 0).then_some(every);
        self
    }

    /// The account holding every drop at start.
    pub fn genesis() -> Address {
        Address::from_account_id(GENESIS_ACCOUNT_ID)
    }

    /// Credit `drops` to `account` in the open ledger, creating it if needed.
    pub fn fund(&self, account: &Address, drops: u64) {
        let mut state = self.lock();
        let ledger = state.current_ledger;
        credit(&mut state.open, account, drops, ledger);
    }

    /// Close the open ledger and validate it. Returns the validated sequence.
    pub fn close_ledger(&self) -> u32 {
        self.lock().close_ledger()
    }

    pub fn current_ledger(&self) -> u32 {
        self.lock().current_ledger
    }

    pub fn validated_ledger(&self) -> u32 {
        self.lock().validated_ledger
    }

    /// Requests answered so far.
    pub fn requests(&self) -> u64 {
        self.lock().requests
    }

    /// An account as the open or the validated ledger sees it.
    pub fn account(&self, account: &Address, validated: bool) -> Option<AccountRootObject> {
        let state = self.lock();
        let accounts = if validated { &state.validated } else { &state.open };
        accounts.get(account).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NodeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn handle(&self, method: &str, params: &Value) -> Value {
        let mut state = self.lock();
        state.requests += 1;
        if let Some(every) = state.close_every {
            if state.requests % every == 0 {
                state.close_ledger();
            }
        }

        match method {
            "fee" => state.fee(),
            "submit" => state.submit(params),
            "account_info" => state.account_info(params),
            "account_objects" => state.account_objects(params),
            "tx" => state.tx(params),
            "ledger" => state.ledger(params),
            "server_info" => state.server_info(),
            "ledger_accept" => {
                state.close_ledger();
                json!({"ledger_current_index": state.current_ledger, "status": "success"})
            }
            _ => error_result("unknownCmd", Some(32), "Unknown method.", method, params),
        }
    }
}

impl Default for SimulatedNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for SimulatedNode {
    async fn invoke(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        Ok(self.handle(method, &params))
    }
}

// ── State transitions ───────────────────────────────────────────────────

impl NodeState {
    fn close_ledger(&mut self) -> u32 {
        self.validated = self.open.clone();
        self.validated_ledger = self.current_ledger;
        self.current_ledger += 1;
        self.open_tx_count = 0;
        self.validated_ledger
    }

    fn view(&self, method: &str, params: &Value) -> Result<View, Value> {
        let index = match params.get("ledger_index") {
            None => LedgerIndex::Current,
            Some(raw) => serde_json::from_value(raw.clone()).map_err(|_| {
                error_result("invalidParams", Some(31), "Invalid field 'ledger_index'.", method, params)
            })?,
        };
        match index {
            LedgerIndex::Current => Ok(View::Open),
            LedgerIndex::Closed | LedgerIndex::Validated => Ok(View::Validated),
            LedgerIndex::Sequence(seq) if seq == self.current_ledger => Ok(View::Open),
            // Older ledgers answer from the latest validated snapshot.
            LedgerIndex::Sequence(seq) if seq <= self.validated_ledger => Ok(View::Validated),
            LedgerIndex::Sequence(_) => Err(error_result(
                "lgrNotFound",
                Some(21),
                "ledgerNotFound",
                method,
                params,
            )),
        }
    }

    fn accounts(&self, view: &View) -> &Accounts {
        match view {
            View::Open => &self.open,
            View::Validated => &self.validated,
        }
    }

    /// `ledger_current_index` for the open view, `ledger_index` for the validated one.
    fn stamp(&self, view: &View, result: &mut Value) {
        match view {
            View::Open => {
                result["ledger_current_index"] = json!(self.current_ledger);
                result["validated"] = json!(false);
            }
            View::Validated => {
                result["ledger_index"] = json!(self.validated_ledger);
                result["ledger_hash"] = json!(ledger_hash(self.validated_ledger).to_string());
                result["validated"] = json!(true);
            }
        }
        result["status"] = json!("success");
    }

    fn requested_account(&self, method: &str, params: &Value) -> Result<Address, Value> {
        params
            .get("account")
            .and_then(Value::as_str)
            .and_then(|raw| Address::of(raw).ok())
            .ok_or_else(|| error_result("actMalformed", Some(35), "Account malformed.", method, params))
    }

    fn server_info(&self) -> Value {
        json!({
            "info": {
                "build_version": env!("CARGO_PKG_VERSION"),
                "complete_ledgers": format!("1-{}", self.validated_ledger),
                "server_state": "full",
                "peers": 0,
                "validated_ledger": {
                    "age": 0,
                    "base_fee_xrp": BASE_FEE as f64 / DROPS_PER_XRP,
                    "hash": ledger_hash(self.validated_ledger).to_string(),
                    "reserve_base_xrp": RESERVE_BASE_XRP,
                    "reserve_inc_xrp": RESERVE_INC_XRP,
                    "seq": self.validated_ledger
                }
            },
            "status": "success"
        })
    }

    fn fee(&self) -> Value {
        json!({
            "current_ledger_size": self.open_tx_count.to_string(),
            "current_queue_size": "0",
            "drops": {
                "base_fee": BASE_FEE.to_string(),
                "median_fee": "5000",
                "minimum_fee": BASE_FEE.to_string(),
                "open_ledger_fee": BASE_FEE.to_string()
            },
            "expected_ledger_size": "1000",
            "ledger_current_index": self.current_ledger,
            "levels": {
                "median_level": "128000",
                "minimum_level": "256",
                "open_ledger_level": "256",
                "reference_level": "256"
            },
            "max_queue_size": "2000",
            "status": "success"
        })
    }

    fn account_info(&self, params: &Value) -> Value {
        const METHOD: &str = "account_info";
        let (account, view) = match self
            .requested_account(METHOD, params)
            .and_then(|account| Ok((account, self.view(METHOD, params)?)))
        {
            Ok(found) => found,
            Err(error) => return error,
        };
        let Some(root) = self.accounts(&view).get(&account) else {
            return error_result("actNotFound", Some(19), "Account not found.", METHOD, params);
        };
        let mut result = json!({ "account_data": root });
        self.stamp(&view, &mut result);
        result
    }

    fn account_objects(&self, params: &Value) -> Value {
        const METHOD: &str = "account_objects";
        let (account, view) = match self
            .requested_account(METHOD, params)
            .and_then(|account| Ok((account, self.view(METHOD, params)?)))
        {
            Ok(found) => found,
            Err(error) => return error,
        };
        if !self.accounts(&view).contains_key(&account) {
            return error_result("actNotFound", Some(19), "Account not found.", METHOD, params);
        }
        // Only account roots are modelled, and those are not owned objects.
        let mut result = json!({ "account": account, "account_objects": [] });
        self.stamp(&view, &mut result);
        result
    }

    fn ledger(&self, params: &Value) -> Value {
        let view = match self.view("ledger", params) {
            Ok(view) => view,
            Err(error) => return error,
        };
        let mut result = match view {
            View::Open => json!({
                "ledger": {
                    "closed": false,
                    "ledger_index": self.current_ledger.to_string(),
                    "parent_hash": ledger_hash(self.validated_ledger).to_string()
                }
            }),
            View::Validated => {
                let seq = self.validated_ledger;
                json!({
                    "ledger": {
                        "accepted": true,
                        "closed": true,
                        "ledger_hash": ledger_hash(seq).to_string(),
                        "ledger_index": seq.to_string(),
                        "parent_hash": ledger_hash(seq - 1).to_string(),
                        "total_coins": TOTAL_DROPS.to_string()
                    }
                })
            }
        };
        self.stamp(&view, &mut result);
        result
    }

    fn tx(&self, params: &Value) -> Value {
        const METHOD: &str = "tx";
        let hash = params
            .get("transaction")
            .and_then(Value::as_str)
            .and_then(|raw| Hash256::of(raw).ok());
        let Some(record) = hash.and_then(|hash| self.transactions.get(&hash)) else {
            return error_result("txnNotFound", Some(29), "Transaction not found.", METHOD, params);
        };

        let mut result = record.json.clone();
        if record.ledger <= self.validated_ledger {
            result["ledger_index"] = json!(record.ledger);
            result["validated"] = json!(true);
            let mut meta = json!({
                "AffectedNodes": [],
                "TransactionIndex": record.index,
                "TransactionResult": record.result,
            });
            if let Some(delivered) = record.delivered {
                meta["delivered_amount"] = json!(delivered);
            }
            result["meta"] = meta;
        } else {
            result["validated"] = json!(false);
        }
        result["status"] = json!("success");
        result
    }

    fn submit(&mut self, params: &Value) -> Value {
        const METHOD: &str = "submit";
        let Some(blob_hex) = params.get("tx_blob").and_then(Value::as_str) else {
            return error_result("invalidParams", Some(31), "Missing field 'tx_blob'.", METHOD, params);
        };
        let decoded = hex::decode(blob_hex)
            .ok()
            .and_then(|blob| Some((serde_json::from_slice::<Transaction>(&blob).ok()?, blob_hash(&blob))));
        let Some((transaction, hash)) = decoded else {
            return error_result("invalidTransaction", None, "Unable to decode tx_blob.", METHOD, params);
        };
        if !transaction.common().is_signed() {
            return error_result("invalidTransaction", None, "Missing signature.", METHOD, params);
        }

        let transaction = transaction.with_hash(hash);
        let (engine, applied) = self.apply(&transaction, hash);

        let mut result = json!({
            "accepted": applied,
            "applied": applied,
            "broadcast": applied,
            "engine_result": engine.token,
            "engine_result_code": engine.code,
            "engine_result_message": engine.message,
            "kept": applied,
            "queued": false,
            "open_ledger_cost": BASE_FEE.to_string(),
            "tx_blob": blob_hex,
            "tx_json": transaction,
            "validated_ledger_index": self.validated_ledger,
            "status": "success"
        });
        if let Some(root) = self.open.get(transaction.account()) {
            result["account_sequence_next"] = json!(root.sequence);
            result["account_sequence_available"] = json!(root.sequence);
        }
        result
    }

    /// Apply to the open ledger. Returns the engine result and whether the fee was
    /// claimed (the transaction is in the ledger).
    fn apply(&mut self, transaction: &Transaction, hash: Hash256) -> (EngineResult, bool) {
        let ledger = self.current_ledger;
        let fee = transaction.fee();

        let Some(source) = self.open.get_mut(transaction.account()) else {
            return (TER_NO_ACCOUNT, false);
        };
        if transaction.sequence() < source.sequence {
            return (TEF_PAST_SEQ, false);
        }
        if transaction.sequence() > source.sequence {
            return (TER_PRE_SEQ, false);
        }
        let Ok(balance) = source.balance.minus(fee) else {
            return (TER_INSUF_FEE_B, false);
        };

        source.balance = balance;
        source.sequence += 1;
        source.previous_txn_id = hash;
        source.previous_txn_lgr_seq = ledger;
        if source.account_txn_id.is_some() {
            source.account_txn_id = Some(hash);
        }

        let (engine, delivered) = self.apply_effect(transaction, hash);
        self.transactions.insert(
            hash,
            TxRecord {
                json: serde_json::to_value(transaction).unwrap_or(Value::Null),
                ledger,
                index: self.open_tx_count,
                result: engine.token,
                delivered,
            },
        );
        self.open_tx_count += 1;
        (engine, true)
    }

    fn apply_effect(
        &mut self,
        transaction: &Transaction,
        hash: Hash256,
    ) -> (EngineResult, Option<XrpCurrencyAmount>) {
        let ledger = self.current_ledger;
        match transaction {
            Transaction::Payment(payment) => {
                let Some(amount) = payment.amount.as_xrp() else {
                    return (TEC_PATH_DRY, None);
                };
                let Some(source) = self.open.get_mut(transaction.account()) else {
                    return (TER_NO_ACCOUNT, None);
                };
                let Ok(remaining) = source.balance.minus(amount) else {
                    return (TEC_UNFUNDED_PAYMENT, None);
                };
                source.balance = remaining;
                credit(&mut self.open, &payment.destination, amount.drops(), ledger);
                (TES_SUCCESS, Some(amount))
            }
            Transaction::AccountSet(account_set) => {
                if let Some(source) = self.open.get_mut(transaction.account()) {
                    if let Some(flag) = account_set.set_flag {
                        match flag.ledger_flag() {
                            Some(bit) => source.flags = source.flags.with(bit),
                            None if flag == AccountSetFlag::AccountTxnId => {
                                source.account_txn_id = Some(hash)
                            }
                            None => {}
                        }
                    }
                    if let Some(flag) = account_set.clear_flag {
                        match flag.ledger_flag() {
                            Some(bit) => source.flags = source.flags.without(bit),
                            None if flag == AccountSetFlag::AccountTxnId => {
                                source.account_txn_id = None
                            }
                            None => {}
                        }
                    }
                    if account_set.domain.is_some() {
                        source.domain = account_set.domain.clone().filter(|d| !d.is_empty());
                    }
                    if account_set.email_hash.is_some() {
                        source.email_hash = account_set.email_hash.clone();
                    }
                    if account_set.transfer_rate.is_some() {
                        source.transfer_rate = account_set.transfer_rate.filter(|rate| *rate != 0);
                    }
                    if account_set.tick_size.is_some() {
                        source.tick_size = account_set.tick_size.filter(|size| *size != 0);
                    }
                }
                (TES_SUCCESS, None)
            }
            Transaction::SetRegularKey(set_regular_key) => {
                if let Some(source) = self.open.get_mut(transaction.account()) {
                    source.regular_key = set_regular_key.regular_key.clone();
                }
                (TES_SUCCESS, None)
            }
            // Other kinds only consume the fee and sequence here.
            _ => (TES_SUCCESS, None),
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn new_account_root(
    account: Address,
    balance: XrpCurrencyAmount,
    sequence: u32,
    ledger: u32,
) -> AccountRootObject {
    let index = {
        let mut hasher = Sha256::new();
        hasher.update(b"a");
        hasher.update(account.account_id());
        Hash256::new(hasher.finalize().into())
    };
    AccountRootObject {
        ledger_entry_type: Default::default(),
        account,
        balance,
        flags: AccountRootFlags::UNSET,
        owner_count: 0,
        previous_txn_id: Hash256::ZERO,
        previous_txn_lgr_seq: ledger,
        sequence,
        account_txn_id: None,
        domain: None,
        email_hash: None,
        message_key: None,
        regular_key: None,
        tick_size: None,
        transfer_rate: None,
        signer_lists: Vec::new(),
        index,
    }
}

/// Add `drops` to `account`, creating it the way a first payment does: its first
/// sequence number is the ledger it was created in.
fn credit(accounts: &mut Accounts, account: &Address, drops: u64, ledger: u32) {
    match accounts.get_mut(account) {
        Some(root) => {
            root.balance = root
                .balance
                .checked_add(drops)
                .unwrap_or(XrpCurrencyAmount::of_drops(u64::MAX));
        }
        None => {
            accounts.insert(
                account.clone(),
                new_account_root(account.clone(), XrpCurrencyAmount::of_drops(drops), ledger, ledger),
            );
        }
    }
}

fn ledger_hash(seq: u32) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(b"LGR\0");
    hasher.update(seq.to_be_bytes());
    Hash256::new(hasher.finalize().into())
}

fn error_result(
    error: &str,
    error_code: Option<i64>,
    error_message: &str,
    method: &str,
    params: &Value,
) -> Value {
    let mut request = params.clone();
    if let Value::Object(fields) = &mut request {
        fields.insert("command".into(), json!(method));
    }
    let mut result = json!({
        "status": "error",
        "error": error,
        "error_message": error_message,
        "request": request,
    });
    if let Some(code) = error_code {
        result["error_code"] = json!(code);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::{NullKey, NullSigner};
    use xrpl_transactions::{Payment, PaymentFields, Signer, TransactionCommon};

    fn payment(from: &NullKey, to: &Address, drops: u64, sequence: u32) -> String {
        let common = TransactionCommon::new(
            from.address().unwrap(),
            XrpCurrencyAmount::of_drops(BASE_FEE),
            sequence,
        );
        let tx: Transaction = Payment::new(PaymentFields::new(
            common,
            XrpCurrencyAmount::of_drops(drops).into(),
            to.clone(),
        ))
        .unwrap()
        .into();
        NullSigner.sign(&tx, from).unwrap().tx_blob
    }

    #[tokio::test]
    async fn account_visible_in_validated_ledger_only_after_close() {
        let node = SimulatedNode::new();
        let alice = NullKey::new("alice").address().unwrap();
        node.fund(&alice, 50_000_000);

        let params = json!({"account": alice.as_str(), "ledger_index": "validated"});
        let result = node.invoke("account_info", params.clone()).await.unwrap();
        assert_eq!(result["error"], "actNotFound");

        let open = node
            .invoke("account_info", json!({"account": alice.as_str()}))
            .await
            .unwrap();
        assert_eq!(open["account_data"]["Balance"], "50000000");
        assert_eq!(open["validated"], false);

        node.close_ledger();
        let result = node.invoke("account_info", params).await.unwrap();
        assert_eq!(result["validated"], true);
        assert_eq!(result["ledger_index"], FIRST_OPEN_LEDGER);
    }

    #[tokio::test]
    async fn payment_moves_xrp_and_checks_sequence() {
        let node = SimulatedNode::new();
        let alice = NullKey::new("alice");
        let bob = NullKey::new("bob").address().unwrap();
        node.fund(&alice.address().unwrap(), 1_000_000);
        let first_sequence = FIRST_OPEN_LEDGER;

        let blob = payment(&alice, &bob, 400_000, first_sequence);
        let result = node.invoke("submit", json!({"tx_blob": blob})).await.unwrap();
        assert_eq!(result["engine_result"], "tesSUCCESS");

        let replay = node.invoke("submit", json!({"tx_blob": blob})).await.unwrap();
        assert_eq!(replay["engine_result"], "tefPAST_SEQ");

        let ahead = payment(&alice, &bob, 1, first_sequence + 5);
        let result = node.invoke("submit", json!({"tx_blob": ahead})).await.unwrap();
        assert_eq!(result["engine_result"], "terPRE_SEQ");

        let alice_root = node.account(&alice.address().unwrap(), false).unwrap();
        assert_eq!(alice_root.balance.drops(), 1_000_000 - 400_000 - BASE_FEE);
        assert_eq!(alice_root.sequence, first_sequence + 1);
        assert_eq!(node.account(&bob, false).unwrap().balance.drops(), 400_000);
        assert!(node.account(&bob, true).is_none());
    }

    #[tokio::test]
    async fn tx_metadata_appears_once_validated() {
        let node = SimulatedNode::new();
        let alice = NullKey::new("alice");
        node.fund(&alice.address().unwrap(), 1_000_000);
        let blob = payment(&alice, &SimulatedNode::genesis(), 10, FIRST_OPEN_LEDGER);
        let submitted = node.invoke("submit", json!({"tx_blob": blob})).await.unwrap();
        let hash = submitted["tx_json"]["hash"].clone();

        let pending = node.invoke("tx", json!({"transaction": hash})).await.unwrap();
        assert_eq!(pending["validated"], false);
        assert!(pending.get("meta").is_none());

        node.close_ledger();
        let done = node.invoke("tx", json!({"transaction": hash})).await.unwrap();
        assert_eq!(done["validated"], true);
        assert_eq!(done["meta"]["TransactionResult"], "tesSUCCESS");
        assert_eq!(done["meta"]["delivered_amount"], "10");

        let missing = node
            .invoke("tx", json!({"transaction": Hash256::ZERO.to_string()}))
            .await
            .unwrap();
        assert_eq!(missing["error"], "txnNotFound");
    }

    #[tokio::test]
    async fn auto_close_and_ledger_accept() {
        let node = SimulatedNode::new().with_auto_close(2);
        node.invoke("fee", json!({})).await.unwrap();
        assert_eq!(node.validated_ledger(), FIRST_OPEN_LEDGER - 1);
        node.invoke("fee", json!({})).await.unwrap();
        assert_eq!(node.validated_ledger(), FIRST_OPEN_LEDGER);

        let accepted = node.invoke("ledger_accept", json!({})).await.unwrap();
        assert_eq!(accepted["ledger_current_index"], FIRST_OPEN_LEDGER + 2);

        let info = node.invoke("server_info", json!({})).await.unwrap();
        assert_eq!(info["info"]["validated_ledger"]["seq"], FIRST_OPEN_LEDGER + 2);
        assert_eq!(info["info"]["complete_ledgers"], format!("1-{}", FIRST_OPEN_LEDGER + 2));
        assert_eq!(info["info"]["validated_ledger"]["base_fee_xrp"], 0.00001);

        let unknown = node.invoke("server_definitions", json!({})).await.unwrap();
        assert_eq!(unknown["error"], "unknownCmd");
        assert_eq!(unknown["request"]["command"], "server_definitions");
    }
}
