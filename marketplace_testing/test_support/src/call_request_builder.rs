use casper_marketplace::CallContext;
use casper_types::{account::AccountHash, RuntimeArgs, U512};

/// A single call of a marketplace entry point, as submitted by an account.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CallRequest {
    /// The calling account.
    pub sender: AccountHash,
    /// Name of the entry point to call.
    pub entry_point: String,
    /// Named arguments of the call.
    pub args: RuntimeArgs,
    /// Value transferred from the sender's account along with the call.
    pub attached_value: U512,
}

impl CallRequest {
    /// Returns the [`CallContext`] the marketplace sees for this request.
    pub fn context(&self) -> CallContext {
        CallContext::new(self.sender).with_attached_value(self.attached_value)
    }
}

/// Builds a [`CallRequest`].
#[derive(Debug)]
pub struct CallRequestBuilder {
    sender: AccountHash,
    entry_point: String,
    args: RuntimeArgs,
    attached_value: U512,
}

impl CallRequestBuilder {
    /// Returns a [`CallRequestBuilder`] for a call of `entry_point` by `sender`, without attached
    /// value.
    pub fn contract_call(sender: AccountHash, entry_point: &str, args: RuntimeArgs) -> Self {
        CallRequestBuilder {
            sender,
            entry_point: entry_point.to_string(),
            args,
            attached_value: U512::zero(),
        }
    }

    /// Sets the value transferred along with the call.
    pub fn with_attached_value<T: Into<U512>>(mut self, attached_value: T) -> Self {
        self.attached_value = attached_value.into();
        self
    }

    /// Sets the calling account.
    pub fn with_sender(mut self, sender: AccountHash) -> Self {
        self.sender = sender;
        self
    }

    /// Consumes self and returns a `CallRequest`.
    pub fn build(self) -> CallRequest {
        let CallRequestBuilder {
            sender,
            entry_point,
            args,
            attached_value,
        } = self;

        CallRequest {
            sender,
            entry_point,
            args,
            attached_value,
        }
    }
}
