//! Interactive session: owns the registry and the accounts opened during the run.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use bankledger_accounts::{Account, AccountRegistry};
use bankledger_core::{AccountId, DomainError, DomainResult, Entity};

use crate::console::Console;
use crate::menu::{CREATE_MENU, CreateKind, MAIN_MENU, MenuOption};

const CURRENT_MARKER: &str = " [CURRENT]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    registry: AccountRegistry,
    /// Accounts in creation order. Append-only.
    accounts: Vec<Account>,
    /// Index into `accounts` of the selected account.
    current: Option<usize>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with a fresh registry. One per process.
    pub fn new(input: R, output: W) -> Self {
        Self {
            console: Console::new(input, output),
            registry: AccountRegistry::new(),
            accounts: Vec::new(),
            current: None,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current.and_then(|index| self.accounts.get(index))
    }

    /// Run the menu loop until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");

        loop {
            let Some(key) = self.console.ask_trimmed(MAIN_MENU)? else {
                break;
            };

            let flow = match MenuOption::from_key(&key) {
                Some(option) => {
                    debug!(?option, "menu option selected");
                    self.dispatch(option)?
                }
                None => {
                    self.console.line("Invalid option.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!(
            total_created = self.registry.total_accounts_created(),
            "session ended"
        );
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> io::Result<Flow> {
        match (option, self.current) {
            (MenuOption::CreateAccount, _) => self.create_account(),
            (MenuOption::TotalCreated, _) => {
                self.console.line(format_args!(
                    "Total accounts created: {}",
                    self.registry.total_accounts_created()
                ))?;
                Ok(Flow::Continue)
            }
            (MenuOption::ListAccounts, _) => self.list_accounts(),
            (MenuOption::SelectAccount, _) => self.select_account(),
            (MenuOption::Exit, _) => {
                self.console.line("Exiting...")?;
                Ok(Flow::Exit)
            }
            (
                MenuOption::Deposit
                | MenuOption::Withdraw
                | MenuOption::ShowBalance
                | MenuOption::ShowState
                | MenuOption::RenameHolder,
                None,
            ) => {
                self.console.line("No current account selected.")?;
                Ok(Flow::Continue)
            }
            (MenuOption::Deposit, Some(index)) => self.deposit(index),
            (MenuOption::Withdraw, Some(index)) => self.withdraw(index),
            (MenuOption::ShowBalance, Some(index)) => {
                let balance = self.accounts[index].balance();
                self.console.line(format_args!("Current balance: {balance:?}"))?;
                Ok(Flow::Continue)
            }
            (MenuOption::ShowState, Some(index)) => {
                let state = self.accounts[index].describe_state();
                self.console.line(state)?;
                Ok(Flow::Continue)
            }
            (MenuOption::RenameHolder, Some(index)) => self.rename_holder(index),
        }
    }

    fn create_account(&mut self) -> io::Result<Flow> {
        let Some(key) = self.console.ask_trimmed(CREATE_MENU)? else {
            return Ok(Flow::Exit);
        };
        let Some(kind) = CreateKind::from_key(&key) else {
            self.console.line("Invalid option.")?;
            return Ok(Flow::Continue);
        };

        let opened = match kind {
            CreateKind::BalanceOnly => {
                let Some(balance) = self.console.ask_amount("Enter initial balance (>=0): ")? else {
                    return Ok(Flow::Exit);
                };
                self.registry.open(balance)
            }
            CreateKind::NamedWithBalance => {
                let Some(name) = self.console.ask("Enter holder name: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(balance) = self.console.ask_amount("Enter initial balance (>=0): ")? else {
                    return Ok(Flow::Exit);
                };
                self.registry.open_named(name, balance)
            }
        };

        match opened {
            Ok(account) => {
                self.console.line(format_args!("Account created: {account}"))?;
                if kind == CreateKind::BalanceOnly {
                    self.console
                        .line("Remember you can set the holder name with option 9 of the menu.")?;
                }
                self.accounts.push(account);
            }
            Err(err) => {
                debug!(error = %err, "account creation rejected");
                self.console
                    .line(format_args!("Could not create the account: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_accounts(&mut self) -> io::Result<Flow> {
        if self.accounts.is_empty() {
            self.console.line("No accounts registered.")?;
            return Ok(Flow::Continue);
        }

        self.console.line("\nAccounts:")?;
        for (index, account) in self.accounts.iter().enumerate() {
            let marker = if Some(index) == self.current {
                CURRENT_MARKER
            } else {
                ""
            };
            self.console.line(format_args!("- {account}{marker}"))?;
        }
        Ok(Flow::Continue)
    }

    fn select_account(&mut self) -> io::Result<Flow> {
        if self.accounts.is_empty() {
            self.console.line("No accounts to select.")?;
            return Ok(Flow::Continue);
        }

        // Any integer is a valid answer; ids that cannot exist are simply not found.
        let Some(answer) = self.console.ask_until(
            "Enter the id of the account to select: ",
            |s| s.parse::<i64>().is_ok().then(|| s.to_string()),
        )?
        else {
            return Ok(Flow::Exit);
        };

        let found = answer
            .parse::<AccountId>()
            .and_then(|id| self.position(id));

        match found {
            Ok(index) => {
                self.current = Some(index);
                let state = self.accounts[index].describe_state();
                self.console
                    .line(format_args!("Current account selected: {state}"))?;
            }
            Err(err) => {
                debug!(error = %err, "account selection failed");
                self.console
                    .line(format_args!("No account found with id {answer}."))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn deposit(&mut self, index: usize) -> io::Result<Flow> {
        let Some(amount) = self.console.ask_amount("Enter the amount to deposit (>0): ")? else {
            return Ok(Flow::Exit);
        };

        let after = self.accounts[index].deposit(amount);
        self.console.line(format_args!("Balance after: {after:?}"))?;
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self, index: usize) -> io::Result<Flow> {
        let Some(amount) = self.console.ask_amount("Enter the amount to withdraw (>0): ")? else {
            return Ok(Flow::Exit);
        };

        let account = &mut self.accounts[index];
        let before = account.balance();
        let after = account.withdraw(amount);

        if after == before && amount > 0.0 && amount > before {
            self.console
                .line(format_args!("Insufficient funds. Balance unchanged: {after:?}"))?;
        } else {
            self.console.line(format_args!("Balance after: {after:?}"))?;
        }
        Ok(Flow::Continue)
    }

    fn rename_holder(&mut self, index: usize) -> io::Result<Flow> {
        let Some(name) = self.console.ask("Enter the new holder name: ")? else {
            return Ok(Flow::Exit);
        };

        let account = &mut self.accounts[index];
        match account.set_holder_name(name) {
            Ok(()) => {
                let state = account.describe_state();
                self.console
                    .line(format_args!("Name updated. State: {state}"))?;
            }
            Err(err) => {
                self.console
                    .line(format_args!("Could not update the name: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn position(&self, id: AccountId) -> DomainResult<usize> {
        self.accounts
            .iter()
            .position(|account| account.id() == id)
            .ok_or_else(DomainError::not_found)
    }
}
