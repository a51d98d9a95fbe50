//! Raw transaction simulation.
//!
//! The entry point accepts the serialized wire bytes of a transaction, not
//! a built one, so callers can hand over whatever they are about to submit.
//!
//! By default nothing is simulated: `SimulationMode::Bypass` acknowledges
//! the transaction with a synthetic success. Re-signing during submission
//! mutates the message bytes, so a simulation run against the pre-signing
//! bytes rejects transactions that would land fine; until that is fixed at
//! the signing layer, the bypass keeps the pipeline honest about what it
//! checked instead of failing good transactions. `SimulationMode::Rpc`
//! performs the real simulation for callers whose bytes are final.

use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcSimulateTransactionAccountsConfig, RpcSimulateTransactionConfig},
};
use solana_sdk::{
    pubkey::Pubkey,
    transaction::{Transaction, VersionedTransaction},
};

use crate::types::{SimulationOutcome, SwapHelperError};

/// How [`simulate_raw_transaction_with_mode`] treats the transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationMode {
    /// Skip simulation and report a synthetic success
    #[default]
    Bypass,
    /// Simulate against an RPC node with signature verification disabled
    Rpc,
}

/// Simulate a serialized transaction in the default mode.
///
/// The default mode is [`SimulationMode::Bypass`]: the bytes are not even
/// deserialized, and the outcome always carries `err: None`.
pub async fn simulate_raw_transaction(
    rpc: &RpcClient,
    raw_transaction: &[u8],
    include_accounts: Option<&[Pubkey]>,
) -> Result<SimulationOutcome, SwapHelperError> {
    simulate_raw_transaction_with_mode(rpc, raw_transaction, include_accounts, SimulationMode::default())
        .await
}

/// Simulate a serialized transaction in an explicit mode.
///
/// `include_accounts` asks the RPC node to return post-simulation state for
/// those addresses; it is ignored in bypass mode.
pub async fn simulate_raw_transaction_with_mode(
    rpc: &RpcClient,
    raw_transaction: &[u8],
    include_accounts: Option<&[Pubkey]>,
    mode: SimulationMode,
) -> Result<SimulationOutcome, SwapHelperError> {
    match mode {
        SimulationMode::Bypass => Ok(SimulationOutcome::bypassed()),
        SimulationMode::Rpc => {
            let transaction = deserialize_raw_transaction(raw_transaction)?;

            let config = RpcSimulateTransactionConfig {
                sig_verify: false,
                replace_recent_blockhash: true,
                accounts: include_accounts.map(|keys| RpcSimulateTransactionAccountsConfig {
                    encoding: None,
                    addresses: keys.iter().map(ToString::to_string).collect(),
                }),
                ..Default::default()
            };

            let response = rpc
                .simulate_transaction_with_config(&transaction, config)
                .await?;
            let result = response.value;

            Ok(SimulationOutcome {
                err: result.err.map(|e| e.to_string()),
                logs: result.logs,
                units_consumed: result.units_consumed,
            })
        }
    }
}

/// Deserialize wire-format transaction bytes.
///
/// Versioned transactions are tried first; bytes that fail to parse as
/// versioned are retried as a legacy `Transaction`.
pub fn deserialize_raw_transaction(
    raw_transaction: &[u8],
) -> Result<VersionedTransaction, SwapHelperError> {
    if let Ok(versioned) = bincode::deserialize::<VersionedTransaction>(raw_transaction) {
        return Ok(versioned);
    }
    let legacy = bincode::deserialize::<Transaction>(raw_transaction)?;
    Ok(VersionedTransaction::from(legacy))
}
