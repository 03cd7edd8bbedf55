use core::fmt;
use std::str::FromStr;

use datasize::DataSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The number of bytes in an [`Address`].
pub const ADDRESS_LENGTH: usize = 21;

/// The network tag every well-formed address starts with.
pub const ADDRESS_TAG: u8 = 0x4d;

/// The address of an account on the ledger.
///
/// An address is a fixed-length byte identifier: one network tag byte
/// followed by a 20-byte account id. Construction does not validate the
/// tag byte, because addresses arrive from an external decoding boundary;
/// callers that need a well-formed address check [`Address::is_well_formed`].
#[derive(
    Clone, Copy, DataSize, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The distinguished sink address: burned value is credited here.
    ///
    /// The sink holds an ordinary account record for balance purposes, but it
    /// is excluded from every spend path.
    pub const SINK: Address = {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        Address(bytes)
    };

    /// Constructs a new `Address` from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Address(bytes)
    }

    /// Returns `true` if this address carries the network tag.
    pub fn is_well_formed(&self) -> bool {
        self.0[0] == ADDRESS_TAG
    }

    /// Returns `true` if this is the sink address.
    pub fn is_sink(&self) -> bool {
        *self == Self::SINK
    }

    /// Returns the underlying bytes.
    pub fn value(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Returns the underlying bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Error while parsing an [`Address`] from its textual or raw representation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressParseError {
    /// The input was not valid hex.
    #[error("failed to decode address hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The input had the wrong number of bytes.
    #[error("address must be {expected} bytes, got {actual}")]
    Length {
        /// The required length.
        expected: usize,
        /// The length of the given input.
        actual: usize,
    },
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; ADDRESS_LENGTH] =
            bytes.try_into().map_err(|_| AddressParseError::Length {
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Address(bytes))
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(input)?;
        Address::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Address({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(id: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        bytes[ADDRESS_LENGTH - 1] = id;
        Address::new(bytes)
    }

    #[test]
    fn should_accept_tagged_address() {
        assert!(test_address(1).is_well_formed());
    }

    #[test]
    fn should_reject_untagged_address() {
        let address = Address::new([0u8; ADDRESS_LENGTH]);
        assert!(!address.is_well_formed());
    }

    #[test]
    fn sink_is_well_formed_and_distinguished() {
        assert!(Address::SINK.is_well_formed());
        assert!(Address::SINK.is_sink());
        assert!(!test_address(1).is_sink());
    }

    #[test]
    fn should_roundtrip_through_hex() {
        let address = test_address(42);
        let parsed: Address = address.to_string().parse().unwrap();
        assert_eq!(address, parsed);
    }

    #[test]
    fn should_reject_wrong_length() {
        let err = Address::try_from([0u8; 20].as_slice()).unwrap_err();
        assert_eq!(
            err,
            AddressParseError::Length {
                expected: ADDRESS_LENGTH,
                actual: 20
            }
        );
    }
}
