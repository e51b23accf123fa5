//! Console shell: menu rendering, prompting, and dispatch to the accounts domain.

pub mod console;
pub mod menu;
pub mod session;

pub use console::Console;
pub use menu::{CreateKind, MenuOption};
pub use session::Session;
