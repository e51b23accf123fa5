use tracing::debug;

use bankledger_core::{AccountId, DomainResult, Entity};

use crate::holder_name::HolderName;

/// Placeholder rendered in place of a holder name that was never set.
pub const NO_NAME: &str = "(no name)";

/// Entity: a single bank account.
///
/// Accounts are only built by [`AccountRegistry`](crate::AccountRegistry), which
/// validates the opening balance and hands out the id.
///
/// Invariant: `balance` is never negative. Deposits and withdrawals that would
/// break it, or that carry a non-positive amount, are ignored and the current
/// balance is returned unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    holder_name: Option<HolderName>,
    balance: f64,
}

impl Account {
    pub(crate) fn new(id: AccountId, holder_name: Option<HolderName>, balance: f64) -> Self {
        Self {
            id,
            holder_name,
            balance,
        }
    }

    pub fn holder_name(&self) -> Option<&HolderName> {
        self.holder_name.as_ref()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add `amount` and return the balance afterwards.
    ///
    /// Non-positive (or non-finite) amounts leave the balance untouched. Plain
    /// `f64` addition is used, so finite deposits near `f64::MAX` can still
    /// push the balance to infinity.
    pub fn deposit(&mut self, amount: f64) -> f64 {
        if !is_positive_amount(amount) {
            debug!(account_id = %self.id, amount, "deposit ignored: amount must be positive");
            return self.balance;
        }

        self.balance += amount;
        debug!(account_id = %self.id, amount, balance = self.balance, "deposit applied");
        self.balance
    }

    /// Subtract `amount` and return the balance afterwards.
    ///
    /// Non-positive amounts and amounts above the current balance (insufficient
    /// funds) leave the balance untouched. Callers compare the balance before
    /// and after to tell the cases apart.
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        if !is_positive_amount(amount) {
            debug!(account_id = %self.id, amount, "withdrawal ignored: amount must be positive");
            return self.balance;
        }
        if amount > self.balance {
            debug!(
                account_id = %self.id,
                amount,
                balance = self.balance,
                "withdrawal ignored: insufficient funds"
            );
            return self.balance;
        }

        self.balance -= amount;
        debug!(account_id = %self.id, amount, balance = self.balance, "withdrawal applied");
        self.balance
    }

    /// Replace the holder name. On error nothing changes.
    pub fn set_holder_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = HolderName::new(name)?;
        debug!(account_id = %self.id, holder_name = %name, "holder name updated");
        self.holder_name = Some(name);
        Ok(())
    }

    /// Full current state, e.g. `Account{id=1, holder_name=Ana, balance=150.0}`.
    pub fn describe_state(&self) -> String {
        self.to_string()
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let holder_name = self.holder_name.as_ref().map_or(NO_NAME, HolderName::as_str);
        // `{:?}` keeps the decimal point on whole balances (150.0, not 150).
        write!(
            f,
            "Account{{id={}, holder_name={}, balance={:?}}}",
            self.id, holder_name, self.balance
        )
    }
}

fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}
