use crate::account::Account;
use crate::constants::TIMESTAMP_FORMAT;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

pub const RECEIPT_HEADER: &str = "------ Bank Receipt ------";
pub const TRANSACTIONS_BANNER: &str = "------ Transactions ------";
pub const RECEIPT_FOOTER: &str = "------ End of Receipt ------";

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("could not write receipt to {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Snapshot of an account's balance & history, footer carries no trailing newline
pub fn render_receipt(account: &Account, now: DateTime<Local>) -> String {
    let mut receipt = String::new();
    receipt.push_str(RECEIPT_HEADER);
    receipt.push('\n');
    receipt.push_str(&format!("Date: {}\n", now.format(TIMESTAMP_FORMAT)));
    receipt.push_str(&format!("Owner: {}\n", account.owner()));
    receipt.push_str(&format!("Current Balance: {}\n", account.balance()));
    receipt.push_str(TRANSACTIONS_BANNER);
    receipt.push('\n');
    for txn in account.history() {
        receipt.push_str(&txn.ledger_line());
        receipt.push('\n');
    }
    receipt.push_str(RECEIPT_FOOTER);
    receipt
}

/// Creates or truncates `path` and writes `content`.
/// Failures are logged & returned, callers decide how to report them.
pub fn write_receipt(path: &Path, content: &str) -> Result<(), ReceiptError> {
    let res = File::create(path).and_then(|mut file| {
        file.write_all(content.as_bytes())?;
        file.flush()
    });
    match res {
        Ok(_) => {
            debug!(path = %path.display(), "receipt written");
            Ok(())
        }
        Err(source) => {
            error!(path = %path.display(), %source, "failed to write receipt");
            Err(ReceiptError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{render_receipt, write_receipt, ReceiptError};
    use crate::account::tests::init_test_accounts;
    use crate::clock::{Clock, FixedClock};
    use crate::test::utils::_get_test_output_file;
    use std::path::PathBuf;

    #[test]
    fn tst_render_receipt() {
        let (mut acct1, mut acct2) = init_test_accounts();
        acct1.deposit(200.0).unwrap();
        acct1.withdraw(50.5);
        acct1.transfer(&mut acct2, 100.0);

        let now = FixedClock::at(2024, 5, 6, 7, 8, 9).now();
        let expected = "------ Bank Receipt ------\n\
            Date: 2024-05-06 07:08:09\n\
            Owner: Juan Perez\n\
            Current Balance: 1049.5\n\
            ------ Transactions ------\n\
            2024-01-02 03:04:05: Deposit - Monto: 200\n\
            2024-01-02 03:04:05: Withdrawal - Monto: -50.5\n\
            2024-01-02 03:04:05: Transfer to Maria Gonzalez - Monto: -100\n\
            ------ End of Receipt ------";
        assert_eq!(render_receipt(&acct1, now), expected);
    }

    #[test]
    fn tst_render_empty_receipt() {
        let (acct1, _) = init_test_accounts();
        let now = FixedClock::at(2024, 5, 6, 7, 8, 9).now();
        let receipt = render_receipt(&acct1, now);
        let lines: Vec<&str> = receipt.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "------ Transactions ------");
        assert_eq!(lines[5], "------ End of Receipt ------");
    }

    #[test]
    fn tst_write_receipt() {
        let f = PathBuf::from(_get_test_output_file("tst_write_receipt.txt", "receipt"));
        write_receipt(&f, "first receipt, much longer than the second").unwrap();
        write_receipt(&f, "second").unwrap();
        assert_eq!(
            std::fs::read_to_string(&f).unwrap(),
            "second",
            "Should truncate existing receipts"
        );
    }

    #[test]
    fn tst_write_receipt_unwritable() {
        let mut f = PathBuf::from(_get_test_output_file("unused.txt", "receipt"));
        f.set_file_name("missing_dir/receipt.txt");
        match write_receipt(&f, "content") {
            Ok(_) => panic!("Should err since parent dir dne"),
            Err(ReceiptError::Write { path, .. }) => assert_eq!(path, f),
        }
    }
}
