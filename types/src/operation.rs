use core::fmt;

use datasize::DataSize;
use serde::{Deserialize, Serialize};

use crate::Address;

/// Payload of [`Operation::RegisterWitness`]: register the owner as a
/// validator, burning the registration cost.
#[derive(Clone, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWitness {
    owner: Address,
    url: String,
}

impl RegisterWitness {
    /// Constructs a new `RegisterWitness` payload.
    pub fn new(owner: Address, url: String) -> Self {
        RegisterWitness { owner, url }
    }

    /// The requesting account.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The metadata URL to record on the witness.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Payload of [`Operation::FreezeBalance`]: lock part of the owner's balance
/// for a requested duration.
#[derive(Clone, Copy, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeBalance {
    owner: Address,
    amount: i64,
    duration_millis: u64,
}

impl FreezeBalance {
    /// Constructs a new `FreezeBalance` payload.
    pub const fn new(owner: Address, amount: i64, duration_millis: u64) -> Self {
        FreezeBalance {
            owner,
            amount,
            duration_millis,
        }
    }

    /// The requesting account.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The amount to freeze.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The requested freeze duration in milliseconds.
    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }
}

/// Payload of [`Operation::UnfreezeBalance`]: release the owner's expired
/// frozen balance.
#[derive(Clone, Copy, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfreezeBalance {
    owner: Address,
}

impl UnfreezeBalance {
    /// Constructs a new `UnfreezeBalance` payload.
    pub const fn new(owner: Address) -> Self {
        UnfreezeBalance { owner }
    }

    /// The requesting account.
    pub fn owner(&self) -> Address {
        self.owner
    }
}

/// Payload of [`Operation::Transfer`]: move value from the owner to another
/// account. A transfer to the sink is a burn.
#[derive(Clone, Copy, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    owner: Address,
    to: Address,
    amount: i64,
}

impl Transfer {
    /// Constructs a new `Transfer` payload.
    pub const fn new(owner: Address, to: Address, amount: i64) -> Self {
        Transfer { owner, to, amount }
    }

    /// The sending account.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The receiving account.
    pub fn to(&self) -> Address {
        self.to
    }

    /// The amount to move.
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

/// The declared type tag of an [`Operation`].
#[derive(
    Clone, Copy, Debug, DataSize, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum OperationTag {
    /// Tag of [`Operation::RegisterWitness`].
    RegisterWitness = 0,
    /// Tag of [`Operation::FreezeBalance`].
    FreezeBalance = 1,
    /// Tag of [`Operation::UnfreezeBalance`].
    UnfreezeBalance = 2,
    /// Tag of [`Operation::Transfer`].
    Transfer = 3,
}

impl fmt::Display for OperationTag {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OperationTag::RegisterWitness => "register-witness",
            OperationTag::FreezeBalance => "freeze-balance",
            OperationTag::UnfreezeBalance => "unfreeze-balance",
            OperationTag::Transfer => "transfer",
        };
        write!(formatter, "{}", name)
    }
}

/// A typed request to change ledger state, submitted by an owning account.
///
/// Operations are immutable: the construction boundary decodes one from its
/// wire representation, hands it to exactly one actuator invocation, and the
/// actuator never retains it beyond that call.
#[derive(Clone, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Register the owner as a witness.
    RegisterWitness(RegisterWitness),
    /// Lock part of the owner's balance.
    FreezeBalance(FreezeBalance),
    /// Release the owner's expired frozen balance.
    UnfreezeBalance(UnfreezeBalance),
    /// Move value between accounts.
    Transfer(Transfer),
}

impl Operation {
    /// The operation's declared type tag.
    pub fn tag(&self) -> OperationTag {
        match self {
            Operation::RegisterWitness(_) => OperationTag::RegisterWitness,
            Operation::FreezeBalance(_) => OperationTag::FreezeBalance,
            Operation::UnfreezeBalance(_) => OperationTag::UnfreezeBalance,
            Operation::Transfer(_) => OperationTag::Transfer,
        }
    }

    /// The address of the account requesting the operation.
    pub fn owner(&self) -> Address {
        match self {
            Operation::RegisterWitness(payload) => payload.owner(),
            Operation::FreezeBalance(payload) => payload.owner(),
            Operation::UnfreezeBalance(payload) => payload.owner(),
            Operation::Transfer(payload) => payload.owner(),
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
    fn tag_should_follow_variant() {
        let operation = Operation::Transfer(Transfer::new(address(1), address(2), 10));
        assert_eq!(operation.tag(), OperationTag::Transfer);
        assert_eq!(operation.owner(), address(1));
    }

    #[test]
    fn owner_is_uniform_across_variants() {
        let owner = address(9);
        let operations = [
            Operation::RegisterWitness(RegisterWitness::new(owner, "https://node".into())),
            Operation::FreezeBalance(FreezeBalance::new(owner, 1, 1)),
            Operation::UnfreezeBalance(UnfreezeBalance::new(owner)),
            Operation::Transfer(Transfer::new(owner, address(2), 1)),
        ];
        for operation in &operations {
            assert_eq!(operation.owner(), owner);
        }
    }
}
