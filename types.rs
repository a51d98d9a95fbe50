//! Data types for the Whirlpool swap helpers.

use serde::{Deserialize, Serialize};
use solana_sdk::{program_error::ProgramError, pubkey::Pubkey};
use thiserror::Error;

/// Error types for the swap helpers.
///
/// There is no taxonomy of its own here: every variant wraps a failure
/// raised by one of the underlying SDKs and propagates it unmodified.
#[derive(Error, Debug)]
pub enum SwapHelperError {
    #[error("account {0} does not exist")]
    AccountNotFound(Pubkey),

    #[error("failed to deserialize {kind} account {address}: {source}")]
    AccountDeserialize {
        kind: &'static str,
        address: Pubkey,
        #[source]
        source: std::io::Error,
    },

    #[error("rpc request failed: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("quote computation failed: {0}")]
    Quote(String),

    #[error("failed to deserialize raw transaction: {0}")]
    RawTransaction(#[from] bincode::Error),

    #[error("failed to build instruction: {0}")]
    Instruction(#[from] ProgramError),
}

/// Result of simulating (or bypassing simulation of) a raw transaction.
///
/// A synthetic success carries `err: None` with no logs; a real simulation
/// carries whatever the RPC node returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Execution error, if the transaction would fail on chain
    pub err: Option<String>,
    /// Program logs emitted during simulation
    pub logs: Option<Vec<String>>,
    /// Compute units consumed
    pub units_consumed: Option<u64>,
}

impl SimulationOutcome {
    /// The synthetic no-error result returned when simulation is bypassed
    pub fn bypassed() -> Self {
        Self {
            err: None,
            logs: None,
            units_consumed: None,
        }
    }

    /// Whether the simulated transaction would have executed successfully
    pub fn is_success(&self) -> bool {
        self.err.is_none()
    }
}
