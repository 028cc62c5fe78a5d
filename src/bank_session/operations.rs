use super::BankSession;
use crate::account::AccountError;
use crate::receipt::{render_receipt, write_receipt, ReceiptError};
use thiserror::Error;
use tracing::{debug, warn};

/// Balance & credential operations a session can run against its primary account
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOp {
    Deposit(f64),
    Withdraw(f64),
    /// Always primary -> secondary
    Transfer(f64),
    Lock(String),
    Unlock,
    ChangePassword { new: String, old: String },
    PrintReceipt,
}

impl SessionOp {
    /// Log friendly name, never includes passwords
    pub fn name(&self) -> &'static str {
        match self {
            SessionOp::Deposit(_) => "deposit",
            SessionOp::Withdraw(_) => "withdrawal",
            SessionOp::Transfer(_) => "transfer",
            SessionOp::Lock(_) => "lock",
            SessionOp::Unlock => "unlock",
            SessionOp::ChangePassword { .. } => "change_password",
            SessionOp::PrintReceipt => "receipt",
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
    #[error("withdrawal rejected")]
    WithdrawalRejected,
    #[error("transfer rejected")]
    TransferRejected,
    #[error("lock rejected")]
    LockRejected,
}

impl BankSession {
    /// Base level operation processing function. Either applies the whole operation or
    /// leaves both accounts untouched and returns why.
    pub fn process_op(&mut self, op: &SessionOp) -> Result<(), SessionError> {
        let res: Result<(), SessionError> = match op {
            SessionOp::Deposit(amount) => self.primary.deposit(*amount).map_err(Into::into),
            SessionOp::Withdraw(amount) => {
                if self.primary.withdraw(*amount) {
                    Ok(())
                } else {
                    Err(SessionError::WithdrawalRejected)
                }
            }
            SessionOp::Transfer(amount) => {
                if self.primary.transfer(&mut self.secondary, *amount) {
                    Ok(())
                } else {
                    Err(SessionError::TransferRejected)
                }
            }
            SessionOp::Lock(password) => {
                if self.primary.lock(password) {
                    Ok(())
                } else {
                    Err(SessionError::LockRejected)
                }
            }
            SessionOp::Unlock => {
                self.primary.unlock();
                Ok(())
            }
            SessionOp::ChangePassword { new, old } => self
                .primary
                .change_password(new, old)
                .map_err(Into::into),
            SessionOp::PrintReceipt => {
                let receipt = self.render_receipt();
                self.save_receipt(&receipt)
            }
        };

        match &res {
            Ok(_) => debug!(op = op.name(), balance = self.primary.balance(), "operation applied"),
            Err(e) => warn!(op = op.name(), error = %e, "operation rejected"),
        }
        res
    }

    /// Receipt text for the primary account, stamped with the current time
    pub fn render_receipt(&self) -> String {
        render_receipt(&self.primary, self.clock.now())
    }

    pub fn save_receipt(&self, content: &str) -> Result<(), SessionError> {
        write_receipt(&self.receipt_path, content)?;
        Ok(())
    }
}
