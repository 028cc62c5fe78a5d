use super::BankSession;
use crate::cli_io::{output_accounts, OutputMethod, RawInputOp};
use csv::{ReaderBuilder, Trim};
use std::io;
use std::path::Path;
use tracing::{error, info, warn};

impl BankSession {
    /// Returns error in the event that file cannot be read
    /// Else mutates the session state
    /// Records with correct data format but fail logically given business logic are ignored
    /// Improper csv format or corrupted records are skipped
    fn stream_process_csv(
        &mut self,
        in_file_path: &Path,
        has_header: bool,
    ) -> Result<(), io::Error> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .has_headers(has_header)
            .from_path(in_file_path)?;

        for (row, result) in rdr.deserialize::<RawInputOp>().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(row, error = %e, "skipping malformed script row");
                    continue;
                }
            };
            let op = match record.convert_to_op() {
                Ok(op) => op,
                Err(e) => {
                    warn!(row, error = ?e, "skipping invalid script row");
                    continue;
                }
            };
            // business rule failures are logged by process_op, keep going
            let _ = self.process_op(&op);
        }

        Ok(())
    }

    /// Replays a script file then outputs the account summary.
    /// If a failure occurs mid stream will output the state reached up until that point
    pub fn streaming_execute(&mut self, script: &Path, output: &OutputMethod) {
        info!(script = %script.display(), "replaying script");
        if let Err(e) = self.stream_process_csv(script, true) {
            error!(script = %script.display(), error = %e, "could not read script");
        }

        output_accounts(&self.accounts(), output);
    }
}
