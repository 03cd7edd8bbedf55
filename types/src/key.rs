use core::fmt;

use datasize::DataSize;
use serde::{Deserialize, Serialize};

use crate::Address;

/// The key under which a record is stored in global state.
///
/// Variants form disjoint, ordered namespaces: all account keys sort before
/// all witness keys, which sort before the parameters singleton.
#[derive(
    Clone, Copy, Debug, DataSize, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Key {
    /// A key under which an [`Account`](crate::Account) record is stored.
    Account(Address),
    /// A key under which a [`Witness`](crate::Witness) record is stored.
    Witness(Address),
    /// The singleton key under which the
    /// [`ChainParameters`](crate::ChainParameters) record is stored.
    ChainParameters,
}

impl Key {
    /// Returns the address this key is derived from, if any.
    pub fn into_address(self) -> Option<Address> {
        match self {
            Key::Account(address) | Key::Witness(address) => Some(address),
            Key::ChainParameters => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Account(address) => write!(formatter, "account-{}", address),
            Key::Witness(address) => write!(formatter, "witness-{}", address),
            Key::ChainParameters => write!(formatter, "chain-parameters"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ADDRESS_LENGTH, ADDRESS_TAG};

    fn address(id: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        bytes[ADDRESS_LENGTH - 1] = id;
        Address::new(bytes)
    }

    #[test]
    fn namespaces_should_not_interleave() {
        let account_high = Key::Account(address(u8::MAX));
        let witness_low = Key::Witness(address(0));
        assert!(account_high < witness_low);
        assert!(witness_low < Key::ChainParameters);
    }

    #[test]
    fn should_display_namespace_prefix() {
        let key = Key::Witness(address(1));
        assert!(key.to_string().starts_with("witness-"));
        assert_eq!(Key::ChainParameters.to_string(), "chain-parameters");
    }
}
