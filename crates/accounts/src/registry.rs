//! Issues account identities and counts constructions.

use tracing::info;

use bankledger_core::{AccountId, DomainError, DomainResult};

use crate::account::Account;
use crate::holder_name::HolderName;

/// Process-wide account factory.
///
/// Create one at process start and pass it by `&mut` to whatever opens
/// accounts; it is never reset. The registry does not keep the accounts it
/// opens, it only tracks the next id and how many accounts were created.
///
/// Validation runs before any counter moves, so a rejected construction
/// consumes no id.
#[derive(Debug)]
pub struct AccountRegistry {
    next_id: AccountId,
    total_created: u64,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self {
            next_id: AccountId::FIRST,
            total_created: 0,
        }
    }

    /// Open an account without a holder name.
    pub fn open(&mut self, initial_balance: f64) -> DomainResult<Account> {
        ensure_opening_balance(initial_balance)?;
        Ok(self.issue(None, initial_balance))
    }

    /// Open an account with a holder name.
    pub fn open_named(
        &mut self,
        holder_name: impl Into<String>,
        initial_balance: f64,
    ) -> DomainResult<Account> {
        let holder_name = HolderName::new(holder_name)?;
        ensure_opening_balance(initial_balance)?;
        Ok(self.issue(Some(holder_name), initial_balance))
    }

    /// Number of accounts successfully opened through this registry.
    pub fn total_accounts_created(&self) -> u64 {
        self.total_created
    }

    fn issue(&mut self, holder_name: Option<HolderName>, initial_balance: f64) -> Account {
        let id = self.next_id;
        self.next_id = id.next();
        self.total_created += 1;

        info!(
            account_id = %id,
            named = holder_name.is_some(),
            initial_balance,
            total_created = self.total_created,
            "account opened"
        );

        Account::new(id, holder_name, initial_balance)
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_opening_balance(initial_balance: f64) -> DomainResult<()> {
    if !initial_balance.is_finite() {
        return Err(DomainError::validation("initial balance must be a finite number"));
    }
    if initial_balance < 0.0 {
        return Err(DomainError::validation("initial balance cannot be negative"));
    }
    Ok(())
}
