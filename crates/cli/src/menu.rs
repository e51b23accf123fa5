//! Menu text and option keys.

pub const MAIN_MENU: &str = "\nMain menu\n\
1) Create account\n\
2) Show total accounts created\n\
3) List accounts\n\
4) Select current account\n\
5) Deposit\n\
6) Withdraw\n\
7) Show balance\n\
8) Show state\n\
9) Update holder name\n\
0) Exit\n\
Select an option: ";

pub const CREATE_MENU: &str = "\nCreate account\n\
1) With initial balance\n\
2) With holder name and initial balance\n\
Select an option: ";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateAccount,
    TotalCreated,
    ListAccounts,
    SelectAccount,
    Deposit,
    Withdraw,
    ShowBalance,
    ShowState,
    RenameHolder,
    Exit,
}

impl MenuOption {
    /// Map a typed key (already trimmed) to an option.
    pub fn from_key(key: &str) -> Option<Self> {
        let option = match key {
            "1" => MenuOption::CreateAccount,
            "2" => MenuOption::TotalCreated,
            "3" => MenuOption::ListAccounts,
            "4" => MenuOption::SelectAccount,
            "5" => MenuOption::Deposit,
            "6" => MenuOption::Withdraw,
            "7" => MenuOption::ShowBalance,
            "8" => MenuOption::ShowState,
            "9" => MenuOption::RenameHolder,
            "0" => MenuOption::Exit,
            _ => return None,
        };
        Some(option)
    }
}

/// Which constructor the create sub-menu uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateKind {
    BalanceOnly,
    NamedWithBalance,
}

impl CreateKind {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" => Some(CreateKind::BalanceOnly),
            "2" => Some(CreateKind::NamedWithBalance),
            _ => None,
        }
    }
}
