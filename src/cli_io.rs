use crate::account::Account;
use crate::bank_session::SessionOp;
use crate::constants::{DEFAULT_RECEIPT_FILE, PRECISION};
use clap::Parser;
use csv::Writer;
use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Console bank simulator with two seeded accounts
#[derive(Parser, Debug)]
#[command(name = "banksim", version)]
pub struct Args {
    /// File the receipt (menu option 8) is written to
    #[arg(long, default_value = DEFAULT_RECEIPT_FILE)]
    pub receipt: PathBuf,

    /// Replay operations from a csv file instead of showing the menu
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Tracing filter directive, e.g. `warn` or `banksim=debug`
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Options and data to export results
pub enum OutputMethod {
    /// Output to csv file.  Used for integration testing.
    _Csv(PathBuf),
    /// Output to console
    StdOutput,
}

/// Output a collection of accounts
pub fn output_accounts(accounts: &[&Account], output: &OutputMethod) {
    match output {
        OutputMethod::_Csv(file_path) => {
            if let Err(e) = output_accounts_csv(accounts, file_path) {
                warn!(path = %file_path.display(), error = %e, "failed to export accounts");
            }
        }
        OutputMethod::StdOutput => {
            println!("owner,balance,locked,transactions");
            for acnt in accounts.iter() {
                acnt.print_std_out();
            }
        }
    }
}

fn output_accounts_csv(accounts: &[&Account], file_path: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(file_path)?;
    wtr.write_record(["owner", "balance", "locked", "transactions"])?;
    for acnt in accounts {
        wtr.write_record(&[
            acnt.owner().to_string(),
            format!("{:.*}", PRECISION, acnt.balance()),
            format!("{}", acnt.is_locked()),
            format!("{}", acnt.history().len()),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row of a script file
#[derive(Debug, Deserialize)]
pub struct RawInputOp {
    #[serde(rename = "type")]
    op_type: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    amount: Option<f64>,
    password: Option<String>,
    new_password: Option<String>,
}

impl RawInputOp {
    pub fn convert_to_op(self) -> Result<SessionOp, InputOpErr> {
        match self.op_type.as_str() {
            "deposit" | "withdrawal" | "transfer" => {
                let amount = self
                    .amount
                    .filter(|v| v.is_finite())
                    .ok_or(InputOpErr::MissingAmount)?;
                Ok(match self.op_type.as_str() {
                    "deposit" => SessionOp::Deposit(amount),
                    "withdrawal" => SessionOp::Withdraw(amount),
                    _ => SessionOp::Transfer(amount),
                })
            }
            "lock" => {
                let password = self.password.ok_or(InputOpErr::MissingPassword)?;
                Ok(SessionOp::Lock(password))
            }
            "unlock" => Ok(SessionOp::Unlock),
            "change_password" => {
                let old = self.password.ok_or(InputOpErr::MissingPassword)?;
                let new = self.new_password.ok_or(InputOpErr::MissingPassword)?;
                Ok(SessionOp::ChangePassword { new, old })
            }
            "receipt" => Ok(SessionOp::PrintReceipt),
            _ => Err(InputOpErr::UnsupportedType),
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum InputOpErr {
    MissingAmount,
    MissingPassword,
    UnsupportedType,
}

/// Parses a user typed amount, anything that isn't a finite number is rejected
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
