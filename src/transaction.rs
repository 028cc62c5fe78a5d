use crate::constants::TIMESTAMP_FORMAT;
use chrono::{DateTime, Local};

/// Immutable entry in an account's history, created only by the owning account
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    timestamp: DateTime<Local>,
    description: String,
    /// Positive for credits, negative for debits
    amount: f64,
}

impl TransactionRecord {
    pub(crate) fn new(timestamp: DateTime<Local>, description: String, amount: f64) -> Self {
        Self {
            timestamp,
            description,
            amount,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Line used both for history display and receipts
    pub fn ledger_line(&self) -> String {
        format!(
            "{}: {} - Monto: {}",
            self.timestamp().format(TIMESTAMP_FORMAT),
            self.description(),
            self.amount()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionRecord;
    use crate::clock::{Clock, FixedClock};

    #[test]
    fn tst_ledger_line() {
        let now = FixedClock::at(2024, 3, 9, 14, 30, 0).now();
        let txn = TransactionRecord::new(now, "Withdrawal".to_string(), -200.0);
        assert_eq!(txn.timestamp(), now);
        assert_eq!(txn.description(), "Withdrawal");
        assert_eq!(txn.amount(), -200.0);
        assert_eq!(txn.ledger_line(), "2024-03-09 14:30:00: Withdrawal - Monto: -200");

        let txn = TransactionRecord::new(now, "Deposit".to_string(), 12.5);
        assert_eq!(txn.ledger_line(), "2024-03-09 14:30:00: Deposit - Monto: 12.5");
    }
}
