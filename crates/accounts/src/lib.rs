//! Accounts module (in-memory bank accounts).
//!
//! Pure domain logic only: no IO, no console, no persistence concerns.

pub mod account;
pub mod holder_name;
pub mod registry;

pub use account::Account;
pub use holder_name::HolderName;
pub use registry::AccountRegistry;
