//! The context of a single call and access to its named arguments.
use casper_types::{account::AccountHash, bytesrepr::FromBytes, CLTyped, RuntimeArgs, U512};

use crate::{entry_points::EntryPoint, error::Error};

/// Who is calling, and how much value they attached.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CallContext {
    caller: AccountHash,
    attached_value: U512,
}

impl CallContext {
    /// A call from `caller` without attached value.
    pub fn new(caller: AccountHash) -> Self {
        CallContext {
            caller,
            attached_value: U512::zero(),
        }
    }

    /// Attaches `value` motes to the call.
    pub fn with_attached_value(mut self, value: U512) -> Self {
        self.attached_value = value;
        self
    }

    /// Returns the calling account.
    pub fn caller(&self) -> AccountHash {
        self.caller
    }

    /// Returns the attached value.
    pub fn attached_value(&self) -> U512 {
        self.attached_value
    }

    /// Rejects attached value unless `entry_point` is payable.
    pub(crate) fn ensure_payable(&self, entry_point: &EntryPoint) -> Result<(), Error> {
        if !entry_point.is_payable() && !self.attached_value.is_zero() {
            return Err(Error::NonPayable);
        }
        Ok(())
    }
}

/// Returns the named argument `name`, converted to `T`.
pub fn get_named_arg<T: CLTyped + FromBytes>(args: &RuntimeArgs, name: &str) -> Result<T, Error> {
    args.get(name)
        .ok_or(Error::MissingArgument)?
        .clone()
        .into_t()
        .map_err(|_| Error::InvalidArgument)
}

/// Rejects arguments not declared by `entry_point`.
pub(crate) fn check_declared_args(
    entry_point: &EntryPoint,
    args: &RuntimeArgs,
) -> Result<(), Error> {
    if !args
        .named_args()
        .all(|named_arg| entry_point.declares_arg(named_arg.name()))
    {
        return Err(Error::UnexpectedArgument);
    }
    Ok(())
}
