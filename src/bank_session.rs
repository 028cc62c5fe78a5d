use crate::account::Account;
use crate::clock::Clock;
use crate::constants::{
    PRIMARY_BALANCE, PRIMARY_OWNER, PRIMARY_PASSWORD, SECONDARY_BALANCE, SECONDARY_OWNER,
    SECONDARY_PASSWORD,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;
mod menu;
mod operations;
mod script;

pub use operations::{SessionError, SessionOp};

/// Owns both accounts for the lifetime of the process.
/// Every operation acts on `primary`, transfers always go primary -> secondary.
#[derive(Debug)]
pub struct BankSession {
    pub primary: Account,
    pub secondary: Account,

    /// Where option 8 / `receipt` ops write to
    receipt_path: PathBuf,

    clock: Rc<dyn Clock>,
}

impl BankSession {
    pub fn new(receipt_path: PathBuf, clock: Rc<dyn Clock>) -> Self {
        Self {
            primary: Account::new(
                PRIMARY_OWNER,
                PRIMARY_PASSWORD,
                PRIMARY_BALANCE,
                clock.clone(),
            ),
            secondary: Account::new(
                SECONDARY_OWNER,
                SECONDARY_PASSWORD,
                SECONDARY_BALANCE,
                clock.clone(),
            ),
            receipt_path,
            clock,
        }
    }

    pub fn receipt_path(&self) -> &Path {
        &self.receipt_path
    }

    pub fn accounts(&self) -> [&Account; 2] {
        [&self.primary, &self.secondary]
    }
}
