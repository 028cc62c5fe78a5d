use super::{BankSession, SessionError, SessionOp};
use crate::cli_io::parse_amount;
use std::io::{self, BufRead, Write};
use tracing::info;

const MENU: &str = "\n--- Menu ---\n\
1. Deposit\n\
2. Withdraw\n\
3. Transfer Funds\n\
4. Check Balance\n\
5. View Transaction History\n\
6. Change Password\n\
7. Lock/Unlock Account\n\
8. Print Receipt\n\
0. Exit";

/// Prints `msg` and reads one trimmed line, `None` once input is exhausted
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    msg: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", msg)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

impl BankSession {
    /// Runs the interactive menu on the process' stdin/stdout/stderr
    pub fn execute_cli(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run_menu(&mut stdin.lock(), &mut io::stdout(), &mut io::stderr())
    }

    /// Menu loop, split out from execute_cli so tests can drive it with in memory streams.
    /// Returns once option 0 is chosen or input runs out.
    pub fn run_menu<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        info!("menu session started");
        loop {
            writeln!(out, "{}", MENU)?;
            let choice = match prompt(input, out, "Enter your option: ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.parse::<u8>() {
                Ok(0) => {
                    writeln!(out, "Exiting the program. Goodbye!")?;
                    break;
                }
                Ok(1) => {
                    let msg = "Enter the deposit amount: ";
                    let Some(amount) = read_amount(input, out, err, msg)? else {
                        continue;
                    };
                    match self.process_op(&SessionOp::Deposit(amount)) {
                        Ok(_) => writeln!(
                            out,
                            "Deposit completed. New balance: {}",
                            self.primary.balance()
                        )?,
                        Err(e) => report_error(out, err, &e)?,
                    }
                }
                Ok(2) => {
                    let msg = "Enter the withdrawal amount: ";
                    let Some(amount) = read_amount(input, out, err, msg)? else {
                        continue;
                    };
                    match self.process_op(&SessionOp::Withdraw(amount)) {
                        Ok(_) => writeln!(
                            out,
                            "Withdrawal completed. New balance: {}",
                            self.primary.balance()
                        )?,
                        Err(e) => report_error(out, err, &e)?,
                    }
                }
                Ok(3) => {
                    let msg = "Enter the transfer amount: ";
                    let Some(amount) = read_amount(input, out, err, msg)? else {
                        continue;
                    };
                    match self.process_op(&SessionOp::Transfer(amount)) {
                        Ok(_) => writeln!(
                            out,
                            "Transfer completed. New balance for {}: {}, new balance for {}: {}",
                            self.primary.owner(),
                            self.primary.balance(),
                            self.secondary.owner(),
                            self.secondary.balance()
                        )?,
                        Err(e) => report_error(out, err, &e)?,
                    }
                }
                Ok(4) => writeln!(
                    out,
                    "Current balance for {}: {}",
                    self.primary.owner(),
                    self.primary.balance()
                )?,
                Ok(5) => {
                    writeln!(out, "\n--- Transaction History ---")?;
                    for txn in self.primary.history() {
                        writeln!(out, "{}", txn.ledger_line())?;
                    }
                }
                Ok(6) => {
                    let Some(old) = prompt(input, out, "Enter the current password: ")? else {
                        break;
                    };
                    let Some(new) = prompt(input, out, "Enter the new password: ")? else {
                        break;
                    };
                    match self.process_op(&SessionOp::ChangePassword { new, old }) {
                        Ok(_) => writeln!(out, "Password changed.")?,
                        Err(e) => report_error(out, err, &e)?,
                    }
                }
                Ok(7) if self.primary.is_locked() => {
                    // unlocking takes no password
                    match self.process_op(&SessionOp::Unlock) {
                        Ok(_) => writeln!(out, "Account unlocked.")?,
                        Err(e) => report_error(out, err, &e)?,
                    }
                }
                Ok(7) => {
                    let Some(password) = prompt(input, out, "Enter the current password: ")? else {
                        break;
                    };
                    match self.process_op(&SessionOp::Lock(password)) {
                        Ok(_) => writeln!(out, "Account locked.")?,
                        Err(e) => report_error(out, err, &e)?,
                    }
                }
                Ok(8) => {
                    let receipt = self.render_receipt();
                    writeln!(out, "{}", receipt)?;
                    match self.save_receipt(&receipt) {
                        Ok(_) => writeln!(
                            out,
                            "Receipt saved to {}.",
                            self.receipt_path().display()
                        )?,
                        Err(e) => report_error(out, err, &e)?,
                    }
                }
                _ => writeln!(out, "Invalid option. Try again.")?,
            }
        }
        info!("menu session ended");
        Ok(())
    }
}

/// `Ok(None)` means nothing usable was read and the caller should go back to the menu
fn read_amount<R: BufRead, W: Write, E: Write>(
    input: &mut R,
    out: &mut W,
    err: &mut E,
    msg: &str,
) -> io::Result<Option<f64>> {
    let Some(raw) = prompt(input, out, msg)? else {
        return Ok(None);
    };
    let amount = parse_amount(&raw);
    if amount.is_none() {
        writeln!(err, "Error: '{}' is not a valid amount.", raw)?;
    }
    Ok(amount)
}

/// Thrown-style errors go to the error stream, rejected operations get a generic notice
fn report_error<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    e: &SessionError,
) -> io::Result<()> {
    match e {
        SessionError::Account(e) => writeln!(err, "Error: {}.", e),
        SessionError::Receipt(e) => writeln!(err, "Error saving the receipt: {}", e),
        SessionError::WithdrawalRejected => writeln!(
            out,
            "The withdrawal could not be completed. \
             Check the balance and that the account is not locked."
        ),
        SessionError::TransferRejected => writeln!(
            out,
            "The transfer could not be completed. \
             Check the balance and that the source account is not locked."
        ),
        SessionError::LockRejected => {
            writeln!(out, "The account could not be locked. Check the password.")
        }
    }
}
