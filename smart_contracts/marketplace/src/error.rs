//! Error handling of the marketplace registry.
use casper_types::ApiError;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use thiserror::Error;

/// Represents the reasons a marketplace call is rejected.
///
/// A rejected call never mutates the registry.  Each variant carries a stable code which is
/// reported to callers as [`ApiError::User`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u16)]
pub enum Error {
    /// Caller is not the owner of the marketplace.
    #[error("caller is not the owner")]
    NotOwner = 0,
    /// Caller is not an admin.
    #[error("caller is not an admin")]
    NotAdmin = 1,
    /// Caller is not a store owner.
    #[error("caller is not a store owner")]
    NotStoreOwner = 2,
    /// Caller does not own the store it is trying to manage.
    #[error("caller does not own the store")]
    NotOwnerOfStore = 3,
    /// Account is already an admin.
    #[error("account is already an admin")]
    DuplicateAdmin = 4,
    /// Account is already a store owner.
    #[error("account is already a store owner")]
    DuplicateStoreOwner = 5,
    /// A store with the given id already exists.
    #[error("store already exists")]
    DuplicateStore = 6,
    /// A product with the given id already exists.
    #[error("product already exists")]
    DuplicateProduct = 7,
    /// No store with the given id.
    #[error("unknown store")]
    UnknownStore = 8,
    /// No product with the given id.
    #[error("unknown product")]
    UnknownProduct = 9,
    /// Requested quantity is zero.
    #[error("invalid quantity")]
    InvalidQuantity = 10,
    /// Requested quantity exceeds the available quantity.
    #[error("insufficient quantity")]
    InsufficientQuantity = 11,
    /// Attached value does not satisfy the payment policy.
    #[error("incorrect payment")]
    IncorrectPayment = 12,
    /// Value attached to an entry point which does not accept payments.
    #[error("entry point is not payable")]
    NonPayable = 13,
    /// Caller has no balance to withdraw.
    #[error("nothing to withdraw")]
    NothingToWithdraw = 14,
    /// Name is empty or too long.
    #[error("invalid name")]
    InvalidName = 15,
    /// Operation would cause an integer overflow.
    #[error("arithmetic overflow")]
    Overflow = 16,
    /// Index past the end of an ordered collection.
    #[error("index out of bounds")]
    IndexOutOfBounds = 17,
    /// Entry point does not exist.
    #[error("unknown entry point")]
    UnknownEntryPoint = 18,
    /// Required named argument is missing.
    #[error("missing argument")]
    MissingArgument = 19,
    /// Named argument has the wrong type or could not be parsed.
    #[error("invalid argument")]
    InvalidArgument = 20,
    /// Named argument is not accepted by the entry point.
    #[error("unexpected argument")]
    UnexpectedArgument = 21,
    /// Return value could not be constructed.
    #[error("failed to construct return value")]
    CLValue = 22,

    #[cfg(test)]
    #[doc(hidden)]
    #[error("sentinel error")]
    Sentinel,
}

/// Used for testing; this should be guaranteed to be the maximum valid value of [`Error`] enum.
#[cfg(test)]
const MAX_ERROR_VALUE: u16 = Error::Sentinel as u16;

impl Error {
    /// Returns the user error code of this error.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Recovers a marketplace error from an [`ApiError`], if it carries a known user code.
    pub fn from_api_error(api_error: ApiError) -> Option<Error> {
        match api_error {
            ApiError::User(code) => Error::from_u16(code),
            _ => None,
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError::User(error as u16)
    }
}
