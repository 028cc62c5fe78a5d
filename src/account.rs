use crate::clock::Clock;
use crate::constants::PRECISION;
use crate::transaction::TransactionRecord;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("deposit amount must be greater than zero")]
    InvalidAmount,
    #[error("the current password is not valid")]
    InvalidCredential,
}

/// Opaque verifier for an account password.
/// Compared by exact match, never exposed once stored.
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(secret.into())
    }

    pub fn verify(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Struct to hold data and methods for an account
#[derive(Debug)]
pub struct Account {
    owner: String,
    secret: Credential,
    balance: f64,

    /// Blocks withdrawals & outgoing transfers, deposits still allowed
    locked: bool,

    /// Append only, insertion order is chronological order
    history: Vec<TransactionRecord>,

    clock: Rc<dyn Clock>,
}

impl Account {
    pub fn new(
        owner: impl Into<String>,
        password: impl Into<String>,
        initial_balance: f64,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            owner: owner.into(),
            secret: Credential::new(password),
            balance: initial_balance,
            locked: false,
            history: vec![],
            clock,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Deposits are accepted on locked accounts
    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(AccountError::InvalidAmount);
        }
        self.balance += amount;
        self.record("Deposit".to_string(), amount);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> bool {
        if !self.can_debit(amount) {
            return false;
        }
        self.balance -= amount;
        self.record("Withdrawal".to_string(), -amount);
        true
    }

    /// Moves funds to `target`. Only the source side is checked, a locked target still receives.
    pub fn transfer(&mut self, target: &mut Account, amount: f64) -> bool {
        if !self.can_debit(amount) {
            return false;
        }
        self.balance -= amount;
        target.balance += amount;
        self.record(format!("Transfer to {}", target.owner), -amount);
        target.record(format!("Transfer from {}", self.owner), amount);
        true
    }

    pub fn lock(&mut self, password: &str) -> bool {
        if self.locked || !self.secret.verify(password) {
            return false;
        }
        self.locked = true;
        true
    }

    /// No password needed
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn change_password(
        &mut self,
        new_password: &str,
        old_password: &str,
    ) -> Result<(), AccountError> {
        if !self.secret.verify(old_password) {
            return Err(AccountError::InvalidCredential);
        }
        self.secret = Credential::new(new_password);
        Ok(())
    }

    fn can_debit(&self, amount: f64) -> bool {
        !self.locked && amount > 0.0 && self.balance >= amount
    }

    fn record(&mut self, description: String, amount: f64) {
        let txn = TransactionRecord::new(self.clock.now(), description, amount);
        self.history.push(txn);
    }

    pub fn get_display_str(&self) -> String {
        format!(
            "{},{:.*},{},{}",
            self.owner,
            PRECISION,
            self.balance,
            self.locked,
            self.history.len()
        )
    }

    pub fn print_std_out(&self) {
        println!("{}", self.get_display_str())
    }
}
