use datasize::DataSize;
use serde::{Deserialize, Serialize};

use crate::{Address, BlockTime};

/// A portion of an account's value locked until a given block time.
#[derive(Clone, Copy, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenBalance {
    amount: i64,
    expires_at: BlockTime,
}

impl FrozenBalance {
    /// Constructs a new `FrozenBalance`.
    pub const fn new(amount: i64, expires_at: BlockTime) -> Self {
        FrozenBalance { amount, expires_at }
    }

    /// The frozen amount.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The block time at which the amount may be released.
    pub fn expires_at(&self) -> BlockTime {
        self.expires_at
    }

    /// Returns `true` if the entry may be released at `block_time`.
    pub fn is_expired(&self, block_time: BlockTime) -> bool {
        self.expires_at <= block_time
    }
}

/// An account record stored under [`Key::Account`](crate::Key::Account).
///
/// The spendable `balance` is never negative after a committed transition.
/// Total account value is `balance` plus the frozen amount, and moves between
/// the two only through [`Account::freeze`] and [`Account::unfreeze`].
#[derive(Clone, Debug, DataSize, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    address: Address,
    balance: i64,
    frozen: Option<FrozenBalance>,
}

impl Account {
    /// Constructs a new `Account` with no frozen balance.
    pub const fn new(address: Address, balance: i64) -> Self {
        Account {
            address,
            balance,
            frozen: None,
        }
    }

    /// The account's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The spendable balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Overwrites the spendable balance.
    pub fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    /// The frozen entry, if any.
    pub fn frozen(&self) -> Option<FrozenBalance> {
        self.frozen
    }

    /// Moves `amount` from the spendable balance into the frozen entry,
    /// merging with any existing entry and resetting its expiry.
    ///
    /// Returns the new spendable balance, or `None` if the balance is
    /// insufficient or the frozen total would overflow. On `None` the account
    /// is unmodified.
    pub fn freeze(&mut self, amount: i64, expires_at: BlockTime) -> Option<i64> {
        if amount < 0 {
            return None;
        }
        let new_balance = self.balance.checked_sub(amount).filter(|value| *value >= 0)?;
        let already_frozen = self.frozen.map(|entry| entry.amount()).unwrap_or(0);
        let frozen_total = already_frozen.checked_add(amount)?;
        self.balance = new_balance;
        self.frozen = Some(FrozenBalance::new(frozen_total, expires_at));
        Some(new_balance)
    }

    /// Releases the frozen entry back into the spendable balance if it has
    /// expired at `block_time`.
    ///
    /// Returns the released amount, or `None` if there is nothing to release
    /// or the entry has not expired. On `None` the account is unmodified.
    pub fn unfreeze(&mut self, block_time: BlockTime) -> Option<i64> {
        let entry = self.frozen.filter(|entry| entry.is_expired(block_time))?;
        let new_balance = self.balance.checked_add(entry.amount())?;
        self.balance = new_balance;
        self.frozen = None;
        Some(entry.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ADDRESS_LENGTH, ADDRESS_TAG};

    fn account(balance: i64) -> Account {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        bytes[1] = 7;
        Account::new(Address::new(bytes), balance)
    }

    #[test]
    fn freeze_should_conserve_total_value() {
        let mut account = account(1_000);
        let new_balance = account.freeze(400, BlockTime::new(10)).unwrap();
        assert_eq!(new_balance, 600);
        assert_eq!(account.balance(), 600);
        assert_eq!(account.frozen().unwrap().amount(), 400);
    }

    #[test]
    fn freeze_should_merge_existing_entry() {
        let mut account = account(1_000);
        account.freeze(400, BlockTime::new(10)).unwrap();
        account.freeze(100, BlockTime::new(20)).unwrap();
        let entry = account.frozen().unwrap();
        assert_eq!(entry.amount(), 500);
        assert_eq!(entry.expires_at(), BlockTime::new(20));
        assert_eq!(account.balance(), 500);
    }

    #[test]
    fn freeze_should_reject_insufficient_balance() {
        let mut account = account(100);
        assert!(account.freeze(400, BlockTime::new(10)).is_none());
        assert_eq!(account.balance(), 100);
        assert!(account.frozen().is_none());
    }

    #[test]
    fn unfreeze_should_release_only_after_expiry() {
        let mut account = account(1_000);
        account.freeze(400, BlockTime::new(10)).unwrap();

        assert!(account.unfreeze(BlockTime::new(9)).is_none());
        assert_eq!(account.balance(), 600);

        assert_eq!(account.unfreeze(BlockTime::new(10)), Some(400));
        assert_eq!(account.balance(), 1_000);
        assert!(account.frozen().is_none());
    }

    #[test]
    fn unfreeze_without_entry_is_rejected() {
        let mut account = account(1_000);
        assert!(account.unfreeze(BlockTime::new(100)).is_none());
    }
}
