//! Fixed-size identifiers of stores and products.
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use casper_types::{
    bytesrepr::{self, FromBytes, ToBytes},
    CLType, CLTyped,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of bytes in a store or product identifier.
pub const IDENTIFIER_LENGTH: usize = 32;

const HEX_PREFIX: &str = "0x";

/// Errors while parsing an identifier from its hex form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FromStrError {
    /// The input is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The input decodes to the wrong number of bytes.
    #[error("expected 32 bytes, got {0}")]
    Length(usize),
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name([u8; IDENTIFIER_LENGTH]);

        impl $name {
            /// Constructs a new identifier from raw bytes.
            pub const fn new(value: [u8; IDENTIFIER_LENGTH]) -> Self {
                $name(value)
            }

            /// Returns the raw bytes of the identifier.
            pub fn value(&self) -> [u8; IDENTIFIER_LENGTH] {
                self.0
            }

            /// Returns the raw bytes of the identifier as a slice.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; IDENTIFIER_LENGTH]> for $name {
            fn from(value: [u8; IDENTIFIER_LENGTH]) -> Self {
                $name(value)
            }
        }

        impl FromStr for $name {
            type Err = FromStrError;

            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let digits = input.strip_prefix(HEX_PREFIX).unwrap_or(input);
                let bytes = hex::decode(digits)?;
                let value = <[u8; IDENTIFIER_LENGTH]>::try_from(bytes.as_slice())
                    .map_err(|_| FromStrError::Length(bytes.len()))?;
                Ok($name(value))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(self.0))
            }
        }

        impl CLTyped for $name {
            fn cl_type() -> CLType {
                CLType::ByteArray(IDENTIFIER_LENGTH as u32)
            }
        }

        impl ToBytes for $name {
            fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
                self.0.to_bytes()
            }

            fn serialized_length(&self) -> usize {
                self.0.serialized_length()
            }
        }

        impl FromBytes for $name {
            fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
                let (value, remainder) = <[u8; IDENTIFIER_LENGTH]>::from_bytes(bytes)?;
                Ok(($name(value), remainder))
            }
        }
    };
}

identifier!(
    /// Unique identifier of a store.
    StoreId
);

identifier!(
    /// Unique identifier of a product.
    ProductId
);
