use thiserror::Error;
use tracing::debug;

use meridian_types::{Account, Address, Key, StoredValue};

use crate::{
    global_state::{error::Error as GlobalStateError, state::StateReader},
    tracking_copy::{TrackingCopy, TrackingCopyError, TrackingCopyExt},
};

/// Errors raised by the balance ledger primitives.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransferError {
    /// The amount to move was negative.
    #[error("transfer amount {0} is negative")]
    InvalidAmount(i64),
    /// The sink account was asked to spend.
    #[error("the sink account cannot spend")]
    SourceIsSink,
    /// The spending account does not exist.
    #[error("source account {0} not found")]
    SourceNotFound(Address),
    /// The spending account cannot cover the amount.
    #[error("balance {balance} is insufficient to cover {required}")]
    InsufficientBalance {
        /// The balance held.
        balance: i64,
        /// The amount required.
        required: i64,
    },
    /// A posterior balance does not fit in the balance type.
    #[error("balance arithmetic overflowed")]
    Overflow,
    /// An internal state fault.
    #[error(transparent)]
    State(#[from] TrackingCopyError),
}

/// Atomic debit/credit primitives over account balances.
///
/// A transfer between two accounts is applied as a single unit: sufficiency
/// and both posterior balances are established before either record is
/// written, so a failure is never observable as a half-applied move.
pub trait BalanceLedger {
    /// Adds `delta` (which may be negative) to the balance of `address`,
    /// returning the new balance.
    ///
    /// Fails with [`TransferError::InsufficientBalance`] if the result would
    /// be negative, leaving the record untouched. A credit to an absent
    /// account creates it; a debit of an absent account fails.
    fn adjust_balance(&mut self, address: Address, delta: i64) -> Result<i64, TransferError>;

    /// Moves `amount` from `source` to `target`.
    ///
    /// The target account is created if absent; the target may be the sink
    /// (a burn), the source may not. On any failure neither balance changes.
    fn transfer(&mut self, source: Address, target: Address, amount: i64)
        -> Result<(), TransferError>;
}

impl<R> BalanceLedger for TrackingCopy<R>
where
    R: StateReader<Key, StoredValue, Error = GlobalStateError>,
{
    fn adjust_balance(&mut self, address: Address, delta: i64) -> Result<i64, TransferError> {
        if address.is_sink() && delta < 0 {
            return Err(TransferError::SourceIsSink);
        }
        let mut account = match self.get_account(address)? {
            Some(account) => account,
            None if delta >= 0 => Account::new(address, 0),
            None => return Err(TransferError::SourceNotFound(address)),
        };
        let new_balance = account
            .balance()
            .checked_add(delta)
            .ok_or(TransferError::Overflow)?;
        if new_balance < 0 {
            return Err(TransferError::InsufficientBalance {
                balance: account.balance(),
                required: -delta,
            });
        }
        account.set_balance(new_balance);
        self.write_account(account);
        Ok(new_balance)
    }

    fn transfer(
        &mut self,
        source: Address,
        target: Address,
        amount: i64,
    ) -> Result<(), TransferError> {
        if amount < 0 {
            return Err(TransferError::InvalidAmount(amount));
        }
        if source.is_sink() {
            return Err(TransferError::SourceIsSink);
        }
        let mut source_account = self
            .get_account(source)?
            .ok_or(TransferError::SourceNotFound(source))?;
        let new_source_balance = source_account
            .balance()
            .checked_sub(amount)
            .ok_or(TransferError::Overflow)?;
        if new_source_balance < 0 {
            return Err(TransferError::InsufficientBalance {
                balance: source_account.balance(),
                required: amount,
            });
        }
        if source == target {
            return Ok(());
        }
        let mut target_account = self
            .get_account(target)?
            .unwrap_or_else(|| Account::new(target, 0));
        let new_target_balance = target_account
            .balance()
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        // Single commit point: both sides are validated above.
        source_account.set_balance(new_source_balance);
        target_account.set_balance(new_target_balance);
        self.write_account(source_account);
        self.write_account(target_account);
        debug!(%source, %target, amount, "transferred");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use meridian_types::{ADDRESS_LENGTH, ADDRESS_TAG};

    use super::*;
    use crate::global_state::state::{in_memory::InMemoryGlobalState, StateProvider};

    fn address(id: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        bytes[ADDRESS_LENGTH - 1] = id;
        Address::new(bytes)
    }

    fn state_with_balances(balances: &[(Address, i64)]) -> InMemoryGlobalState {
        let mut state = InMemoryGlobalState::empty();
        for (account_address, balance) in balances {
            let account = Account::new(*account_address, *balance);
            state.put(
                Key::Account(account.address()),
                StoredValue::Account(account),
            );
        }
        state
    }

    fn balance_of<R>(tracking_copy: &mut TrackingCopy<R>, account_address: Address) -> Option<i64>
    where
        R: StateReader<Key, StoredValue, Error = GlobalStateError>,
    {
        tracking_copy
            .get_account(account_address)
            .unwrap()
            .map(|account| account.balance())
    }

    #[test]
    fn transfer_should_move_value() {
        let state = state_with_balances(&[(address(1), 1_000), (address(2), 50)]);
        let mut tracking_copy = state.tracking_copy();

        tracking_copy.transfer(address(1), address(2), 400).unwrap();

        assert_eq!(balance_of(&mut tracking_copy, address(1)), Some(600));
        assert_eq!(balance_of(&mut tracking_copy, address(2)), Some(450));
    }

    #[test]
    fn failed_transfer_should_leave_both_balances_unchanged() {
        let state = state_with_balances(&[(address(1), 300), (address(2), 50)]);
        let mut tracking_copy = state.tracking_copy();

        let failure = tracking_copy
            .transfer(address(1), address(2), 400)
            .unwrap_err();

        assert_eq!(
            failure,
            TransferError::InsufficientBalance {
                balance: 300,
                required: 400
            }
        );
        assert_eq!(balance_of(&mut tracking_copy, address(1)), Some(300));
        assert_eq!(balance_of(&mut tracking_copy, address(2)), Some(50));
        assert!(tracking_copy.effects().is_empty());
    }

    #[test]
    fn transfer_should_create_absent_target() {
        let state = state_with_balances(&[(address(1), 1_000)]);
        let mut tracking_copy = state.tracking_copy();

        tracking_copy.transfer(address(1), address(9), 250).unwrap();

        assert_eq!(balance_of(&mut tracking_copy, address(9)), Some(250));
    }

    #[test]
    fn transfer_from_absent_source_should_fail() {
        let state = state_with_balances(&[]);
        let mut tracking_copy = state.tracking_copy();

        let failure = tracking_copy
            .transfer(address(1), address(2), 1)
            .unwrap_err();
        assert_eq!(failure, TransferError::SourceNotFound(address(1)));
    }

    #[test]
    fn sink_should_receive_but_never_spend() {
        let state = state_with_balances(&[(address(1), 1_000), (Address::SINK, 500)]);
        let mut tracking_copy = state.tracking_copy();

        tracking_copy
            .transfer(address(1), Address::SINK, 100)
            .unwrap();
        assert_eq!(balance_of(&mut tracking_copy, Address::SINK), Some(600));

        let failure = tracking_copy
            .transfer(Address::SINK, address(1), 1)
            .unwrap_err();
        assert_eq!(failure, TransferError::SourceIsSink);

        let failure = tracking_copy.adjust_balance(Address::SINK, -1).unwrap_err();
        assert_eq!(failure, TransferError::SourceIsSink);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let state = state_with_balances(&[(address(1), 1_000)]);
        let mut tracking_copy = state.tracking_copy();
        let failure = tracking_copy
            .transfer(address(1), address(2), -5)
            .unwrap_err();
        assert_eq!(failure, TransferError::InvalidAmount(-5));
    }

    #[test]
    fn self_transfer_checks_sufficiency_but_moves_nothing() {
        let state = state_with_balances(&[(address(1), 100)]);
        let mut tracking_copy = state.tracking_copy();

        tracking_copy.transfer(address(1), address(1), 40).unwrap();
        assert_eq!(balance_of(&mut tracking_copy, address(1)), Some(100));

        let failure = tracking_copy
            .transfer(address(1), address(1), 200)
            .unwrap_err();
        assert!(matches!(
            failure,
            TransferError::InsufficientBalance { .. }
        ));
    }

    #[test]
    fn adjust_balance_should_debit_and_credit() {
        let state = state_with_balances(&[(address(1), 1_000)]);
        let mut tracking_copy = state.tracking_copy();

        assert_eq!(tracking_copy.adjust_balance(address(1), -400).unwrap(), 600);
        assert_eq!(tracking_copy.adjust_balance(address(1), 100).unwrap(), 700);
    }

    #[test]
    fn adjust_balance_should_reject_overdraft() {
        let state = state_with_balances(&[(address(1), 100)]);
        let mut tracking_copy = state.tracking_copy();

        let failure = tracking_copy.adjust_balance(address(1), -200).unwrap_err();
        assert_eq!(
            failure,
            TransferError::InsufficientBalance {
                balance: 100,
                required: 200
            }
        );
        assert_eq!(balance_of(&mut tracking_copy, address(1)), Some(100));
    }

    #[test]
    fn adjust_balance_credit_creates_account_but_debit_does_not() {
        let state = state_with_balances(&[]);
        let mut tracking_copy = state.tracking_copy();

        let failure = tracking_copy.adjust_balance(address(7), -1).unwrap_err();
        assert_eq!(failure, TransferError::SourceNotFound(address(7)));

        assert_eq!(tracking_copy.adjust_balance(address(7), 25).unwrap(), 25);
        assert_eq!(balance_of(&mut tracking_copy, address(7)), Some(25));
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use meridian_types::{ADDRESS_LENGTH, ADDRESS_TAG};

    use super::*;
    use crate::global_state::state::{in_memory::InMemoryGlobalState, StateProvider};

    const BALANCE_MAX: i64 = 1_000_000_000;

    fn address(id: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[0] = ADDRESS_TAG;
        bytes[ADDRESS_LENGTH - 1] = id;
        Address::new(bytes)
    }

    proptest! {
        #[test]
        fn transfer_conserves_total_supply(
            source_balance in 0..=BALANCE_MAX,
            target_balance in 0..=BALANCE_MAX,
            amount in 0..=BALANCE_MAX,
        ) {
            let mut state = InMemoryGlobalState::empty();
            let source = address(1);
            let target = address(2);
            state.put(Key::Account(source), StoredValue::Account(Account::new(source, source_balance)));
            state.put(Key::Account(target), StoredValue::Account(Account::new(target, target_balance)));

            let mut tracking_copy = state.tracking_copy();
            let outcome = tracking_copy.transfer(source, target, amount);

            let posterior_source = tracking_copy.get_account(source).unwrap().unwrap().balance();
            let posterior_target = tracking_copy.get_account(target).unwrap().unwrap().balance();

            match outcome {
                Ok(()) => {
                    prop_assert!(source_balance >= amount);
                    prop_assert_eq!(posterior_source, source_balance - amount);
                    prop_assert_eq!(posterior_target, target_balance + amount);
                }
                Err(TransferError::InsufficientBalance { .. }) => {
                    prop_assert!(source_balance < amount);
                    prop_assert_eq!(posterior_source, source_balance);
                    prop_assert_eq!(posterior_target, target_balance);
                }
                Err(other) => prop_assert!(false, "unexpected failure: {}", other),
            }
            prop_assert_eq!(posterior_source + posterior_target, source_balance + target_balance);
        }
    }
}
