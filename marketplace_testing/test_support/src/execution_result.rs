//! Outcome of executing a [`CallRequest`](crate::CallRequest).
use casper_marketplace::{Error as MarketplaceError, MarketplaceEvent};
use casper_types::{account::AccountHash, ApiError, CLValue, U512};
use thiserror::Error;

/// Reasons a call request fails.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ExecError {
    /// The marketplace rejected the call.
    #[error("reverted with {0}: {1:?}")]
    Revert(MarketplaceError, ApiError),
    /// The sender is not one of the builder's accounts.
    #[error("unknown account {0:?}")]
    UnknownAccount(AccountHash),
    /// The sender cannot cover the attached value.
    #[error("insufficient funds: account {account:?} holds {available}, call attaches {required}")]
    InsufficientFunds {
        /// The sending account.
        account: AccountHash,
        /// The value attached to the call.
        required: U512,
        /// The balance of the sending account.
        available: U512,
    },
}

impl From<MarketplaceError> for ExecError {
    fn from(error: MarketplaceError) -> Self {
        ExecError::Revert(error, ApiError::from(error))
    }
}

impl ExecError {
    /// Returns the marketplace error if the call was reverted by the marketplace.
    pub fn as_revert(&self) -> Option<MarketplaceError> {
        match self {
            ExecError::Revert(error, _) => Some(*error),
            _ => None,
        }
    }
}

/// The result of one executed call.
#[derive(Clone, PartialEq, Debug)]
pub enum ExecutionResult {
    /// The call was rejected; no effects were produced.
    Failure {
        /// Why the call failed.
        error: ExecError,
    },
    /// The call succeeded.
    Success {
        /// The value returned by the entry point, if any.
        ret: Option<CLValue>,
        /// Events appended to the marketplace event log by the call.
        events: Vec<MarketplaceEvent>,
    },
}

impl ExecutionResult {
    /// Returns `true` if the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    /// Returns `true` if the call failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the error of a failed call.
    pub fn as_error(&self) -> Option<&ExecError> {
        match self {
            ExecutionResult::Failure { error } => Some(error),
            ExecutionResult::Success { .. } => None,
        }
    }

    /// Returns the value returned by a successful call.
    pub fn ret(&self) -> Option<&CLValue> {
        match self {
            ExecutionResult::Success { ret, .. } => ret.as_ref(),
            ExecutionResult::Failure { .. } => None,
        }
    }

    /// Returns the events emitted by a successful call.
    pub fn events(&self) -> &[MarketplaceEvent] {
        match self {
            ExecutionResult::Success { events, .. } => events,
            ExecutionResult::Failure { .. } => &[],
        }
    }
}
