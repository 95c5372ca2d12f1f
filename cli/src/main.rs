//! xrpl-cli: query an XRP Ledger node and wait for validated state from the shell.
//!
//! Every command prints its result as pretty JSON on stdout. Logs go to stderr.

mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use logging::{init_logging, LogFormat};
use serde::Serialize;
use std::path::PathBuf;
use xrpl_objects::LedgerObject;
use xrpl_rpc::{
    AccountInfoRequestParams, AccountObjectType, AccountObjectsRequestParams, ClientConfig,
    HttpTransport, LedgerRequestParams, TransactionRequestParams, Transport, XrplClient,
};
use xrpl_transactions::Transaction;
use xrpl_types::{AccountRootFlags, Address, Hash256, LedgerIndex};

#[derive(Parser)]
#[command(name = "xrpl-cli", about = "XRP Ledger JSON-RPC client")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base; CLI flags
    /// and env vars override them.
    #[arg(long, env = "XRPL_CONFIG")]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint of the node.
    #[arg(long, env = "XRPL_NODE_URL")]
    node_url: Option<String>,

    /// Delay between confirmation polls, in milliseconds.
    #[arg(long, env = "XRPL_SCAN_INTERVAL_MILLIS")]
    interval_millis: Option<u64>,

    /// Polls before a wait gives up.
    #[arg(long, env = "XRPL_SCAN_MAX_ATTEMPTS")]
    max_attempts: Option<u32>,

    /// Log filter: "trace", "debug", "info", "warn", "error", or a directive list.
    #[arg(long, default_value = "warn", env = "XRPL_LOG_LEVEL")]
    log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Human, env = "XRPL_LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Current transaction cost and queue state.
    Fee,
    /// Node state and the latest validated ledger.
    ServerInfo,
    /// Account settings and balance.
    AccountInfo {
        address: String,
        /// "current", "closed", "validated" or a sequence number.
        #[arg(long, default_value = "validated")]
        ledger: String,
    },
    /// Objects owned by an account, every page.
    AccountObjects {
        address: String,
        #[arg(long, default_value = "validated")]
        ledger: String,
        #[arg(long = "type", value_enum)]
        object_type: Option<ObjectTypeArg>,
    },
    /// A ledger header.
    Ledger {
        #[arg(long, default_value = "validated")]
        index: String,
    },
    /// Look up a transaction by hash.
    Tx {
        hash: String,
        /// Poll until the transaction is in a validated ledger.
        #[arg(long)]
        wait: bool,
    },
    /// Close the open ledger (stand-alone admin nodes only).
    AcceptLedger,
    /// Poll until the account exists in a validated ledger.
    WaitAccount { address: String },
    /// Poll until an account flag is set (or cleared) in validated state.
    WaitFlag {
        address: String,
        #[arg(value_enum)]
        flag: FlagArg,
        /// Wait for the flag to be cleared instead.
        #[arg(long)]
        cleared: bool,
    },
    /// Poll until the validated ledger moves past a sequence (default: the current one).
    WaitLedger {
        #[arg(long)]
        after: Option<u32>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ObjectTypeArg {
    Check,
    DepositPreauth,
    Escrow,
    Offer,
    PaymentChannel,
    SignerList,
    Ticket,
    State,
}

impl From<ObjectTypeArg> for AccountObjectType {
    fn from(arg: ObjectTypeArg) -> Self {
        match arg {
            ObjectTypeArg::Check => Self::Check,
            ObjectTypeArg::DepositPreauth => Self::DepositPreauth,
            ObjectTypeArg::Escrow => Self::Escrow,
            ObjectTypeArg::Offer => Self::Offer,
            ObjectTypeArg::PaymentChannel => Self::PaymentChannel,
            ObjectTypeArg::SignerList => Self::SignerList,
            ObjectTypeArg::Ticket => Self::Ticket,
            ObjectTypeArg::State => Self::State,
        }
    }
}

/// Account-root flags a wait can watch.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum FlagArg {
    RequireDestTag,
    RequireAuth,
    DisallowXrp,
    DisableMaster,
    NoFreeze,
    GlobalFreeze,
    DefaultRipple,
    DepositAuth,
}

impl From<FlagArg> for AccountRootFlags {
    fn from(arg: FlagArg) -> Self {
        match arg {
            FlagArg::RequireDestTag => Self::REQUIRE_DEST_TAG,
            FlagArg::RequireAuth => Self::REQUIRE_AUTH,
            FlagArg::DisallowXrp => Self::DISALLOW_XRP,
            FlagArg::DisableMaster => Self::DISABLE_MASTER,
            FlagArg::NoFreeze => Self::NO_FREEZE,
            FlagArg::GlobalFreeze => Self::GLOBAL_FREEZE,
            FlagArg::DefaultRipple => Self::DEFAULT_RIPPLE,
            FlagArg::DepositAuth => Self::DEPOSIT_AUTH,
        }
    }
}

/// File config (or defaults) with CLI flags layered on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.node_url {
        config.node_url = url.clone();
    }
    if let Some(interval) = cli.interval_millis {
        config.scan.interval_millis = interval;
    }
    if let Some(attempts) = cli.max_attempts {
        config.scan.max_attempts = attempts;
    }
    config.validate()?;
    Ok(config)
}

/// Every page of `account_objects`, following markers until the node stops returning one.
async fn all_account_objects<T: Transport>(
    client: &XrplClient<T>,
    params: AccountObjectsRequestParams,
) -> anyhow::Result<Vec<LedgerObject>> {
    let mut objects = Vec::new();
    let mut request = Some(params);
    while let Some(params) = request {
        let page = client.account_objects(&params).await?;
        if page.marker.is_some() && page.marker == params.marker {
            anyhow::bail!("node returned the same account_objects marker twice");
        }
        request = params.next_page(&page);
        tracing::debug!(count = page.account_objects.len(), more = request.is_some(), "page");
        objects.extend(page.account_objects);
    }
    Ok(objects)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, &cli.log_level);

    let config = resolve_config(&cli)?;
    tracing::info!(node_url = %config.node_url, "using node");
    let client = XrplClient::new(HttpTransport::from_config(&config)?)
        .with_scan_policy(config.scan_policy());

    match cli.command {
        Command::Fee => print_json(&client.fee().await?),
        Command::ServerInfo => print_json(&client.server_info().await?),
        Command::AccountInfo { address, ledger } => {
            let params = AccountInfoRequestParams::at(Address::of(&address)?, LedgerIndex::of(&ledger)?);
            print_json(&client.account_info(&params).await?)
        }
        Command::AccountObjects {
            address,
            ledger,
            object_type,
        } => {
            let mut params = AccountObjectsRequestParams::of(Address::of(&address)?);
            params.ledger_index = LedgerIndex::of(&ledger)?;
            params.object_type = object_type.map(AccountObjectType::from);
            print_json(&all_account_objects(&client, params).await?)
        }
        Command::Ledger { index } => {
            print_json(&client.ledger(&LedgerRequestParams::of(LedgerIndex::of(&index)?)).await?)
        }
        Command::Tx { hash, wait } => {
            let hash = Hash256::of(&hash)?;
            if wait {
                print_json(&client.wait_for_validated_transaction::<Transaction>(&hash).await?)
            } else {
                let params = TransactionRequestParams::of(hash);
                print_json(&client.transaction::<Transaction>(&params).await?)
            }
        }
        Command::AcceptLedger => print_json(&client.accept_ledger().await?),
        Command::WaitAccount { address } => {
            print_json(&client.wait_for_validated_account(&Address::of(&address)?).await?)
        }
        Command::WaitFlag {
            address,
            flag,
            cleared,
        } => {
            let info = client
                .wait_for_account_flag(&Address::of(&address)?, flag.into(), !cleared)
                .await?;
            print_json(&info)
        }
        Command::WaitLedger { after } => {
            let after = match after {
                Some(seq) => seq,
                None => client
                    .ledger(&LedgerRequestParams::of(LedgerIndex::Validated))
                    .await?
                    .sequence()
                    .context("validated ledger has no sequence")?,
            };
            print_json(&client.wait_for_ledger_advance(after).await?)
        }
    }
}
