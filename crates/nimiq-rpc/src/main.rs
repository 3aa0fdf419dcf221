mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde::Serialize;
use serde_json::Value;

use nimiq_rpc_core::types::{ConsensusState, SyncState};
use nimiq_rpc_core::{ClientError, NimiqClient};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = args.client_config();
    let endpoint = config.display_endpoint();
    let client = NimiqClient::new(&config).context("configure RPC client")?;
    tracing::debug!(%endpoint, "client ready");

    let output = run(&client, args.command.unwrap_or(Command::Status))
        .await
        .map_err(|err| {
            eyre!(format_rpc_error(&endpoint, &err)).wrap_err("while querying the Nimiq node")
        })?;

    let rendered = serde_json::to_string_pretty(&output).context("render result as JSON")?;
    println!("{rendered}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    consensus: ConsensusState,
    block_number: u32,
    peer_count: u32,
    syncing: SyncState,
}

async fn run(client: &NimiqClient, command: Command) -> Result<Value, ClientError> {
    match command {
        Command::Status => {
            let report = StatusReport {
                consensus: client.consensus().await?,
                block_number: client.block_number().await?,
                peer_count: client.peer_count().await?,
                syncing: client.syncing().await?,
            };
            if !report.consensus.is_established() {
                tracing::warn!(consensus = %report.consensus, "node has not established consensus");
            }
            to_json(&report)
        }
        Command::Consensus => to_json(&client.consensus().await?),
        Command::BlockNumber => to_json(&client.block_number().await?),
        Command::PeerCount => to_json(&client.peer_count().await?),
        Command::PeerList => to_json(&client.peer_list().await?),
        Command::Syncing => to_json(&client.syncing().await?),
        Command::Hashrate => to_json(&client.hashrate().await?),
        Command::Mempool => to_json(&client.mempool().await?),
        Command::MempoolContent { full } => to_json(&client.mempool_content(Some(full)).await?),
        Command::Accounts => to_json(&client.accounts().await?),
        Command::Account { address } => to_json(&client.get_account(&address).await?),
        Command::Balance { address } => to_json(&client.get_balance(&address).await?),
        Command::Block { id, full } => {
            let block = match id.parse::<u32>() {
                Ok(height) => client.get_block_by_number(height, Some(full)).await?,
                Err(_) => client.get_block_by_hash(&id, Some(full)).await?,
            };
            to_json(&block)
        }
        Command::Transaction { hash } => to_json(&client.get_transaction_by_hash(&hash).await?),
        Command::Receipt { hash } => to_json(&client.get_transaction_receipt(&hash).await?),
        Command::History { address, count } => {
            to_json(&client.get_transactions_by_address(&address, count).await?)
        }
        Command::SendRaw { transaction } => {
            to_json(&client.send_raw_transaction(&transaction).await?)
        }
        Command::Call { method, params } => {
            let params = params.iter().map(String::as_str).map(parse_param).collect();
            client.call::<Value>(&method, params).await
        }
    }
}

fn to_json(value: &impl Serialize) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(|e| ClientError::Protocol(format!("re-encode result: {e}")))
}

/// Accept JSON literals as-is; anything that does not parse is sent as a
/// plain string so addresses and hashes need no extra quoting.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn format_rpc_error(endpoint: &str, err: &ClientError) -> String {
    let mut lines = vec![
        format!("RPC request to `{endpoint}` failed"),
        format!("RPC error: {err}"),
    ];

    let message = err.to_string();
    match err {
        ClientError::Transport(_) => {
            if message.contains("dns error") {
                lines.push(
                    "hint: hostname resolution failed; verify --host and your DNS/network".into(),
                );
            } else if message.contains("tls") || message.contains("certificate") {
                lines.push(
                    "hint: TLS handshake failed; verify --scheme and certificate trust".into(),
                );
            } else {
                lines.push(
                    "hint: node unreachable; verify it is running with RPC enabled on --host/--port"
                        .into(),
                );
            }
        }
        ClientError::Protocol(_) => lines.push(
            "hint: the endpoint did not answer with JSON-RPC; check --user/--password and that --port is the RPC port"
                .into(),
        ),
        ClientError::Server { code: -32601, .. } => {
            lines.push("hint: the node does not expose this method".into());
        }
        ClientError::Config(_) => {
            lines.push("hint: --scheme must be http or https".into());
        }
        ClientError::Server { .. } | ClientError::Decode { .. } => {}
    }

    lines.join("\n")
}
