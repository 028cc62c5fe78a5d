mod account;
mod bank_session;
mod cli_io;
mod clock;
mod constants;
mod receipt;
#[cfg(test)]
mod test;
mod transaction;

use bank_session::BankSession;
use clap::Parser;
use cli_io::{Args, OutputMethod};
use clock::SystemClock;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut session = BankSession::new(args.receipt, Rc::new(SystemClock));
    match args.script {
        Some(script) => {
            session.streaming_execute(&script, &OutputMethod::StdOutput);
            Ok(())
        }
        None => session.execute_cli(),
    }
}
