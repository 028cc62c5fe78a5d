/// Testing functionality which spans mods
#[cfg(test)]
mod tests {
    use crate::bank_session::tests::init_test_session;
    use crate::cli_io::OutputMethod;
    use crate::receipt::{RECEIPT_FOOTER, RECEIPT_HEADER, TRANSACTIONS_BANNER};
    use crate::test::utils::{_get_test_input_file, _get_test_output_file};
    use csv::ReaderBuilder;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    fn validate_tst_files(file: &Path, accounts_str: Vec<Vec<&str>>) {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .from_path(file)
            .unwrap();

        let mut records = rdr.records();
        for accnt in accounts_str.iter() {
            match records.next() {
                Some(record) => assert_eq!(record.unwrap(), *accnt),
                None => panic!("File is missing Records"),
            }
        }

        if records.next().is_some() {
            panic!("File has excess records")
        }
    }

    /// Testing functionality in bank_session & file io
    #[test]
    fn tst_streaming_execute() {
        let mut session = init_test_session("integration");
        let script = PathBuf::from(_get_test_input_file("simple.csv"));
        let output = PathBuf::from(_get_test_output_file("simple_accounts.csv", "integration"));
        session.streaming_execute(&script, &OutputMethod::_Csv(output.clone()));

        let expected = vec![
            vec!["Juan Perez", "500.00", "false", "3"],
            vec!["Maria Gonzalez", "1000.00", "false", "1"],
        ];
        validate_tst_files(&output, expected);
    }

    #[test]
    fn tst_streaming_execute_missing_script() {
        let mut session = init_test_session("integration");
        let script = PathBuf::from(_get_test_input_file("does_not_exist.csv"));
        let output = PathBuf::from(_get_test_output_file("missing_accounts.csv", "integration"));
        session.streaming_execute(&script, &OutputMethod::_Csv(output.clone()));

        let expected = vec![
            vec!["Juan Perez", "1000.00", "false", "0"],
            vec!["Maria Gonzalez", "500.00", "false", "0"],
        ];
        validate_tst_files(&output, expected);
    }

    /// Menu driven session ending in a receipt on disk
    #[test]
    fn tst_menu_receipt_file() {
        let mut session = init_test_session("integration_receipt");
        let mut input = Cursor::new(b"1\n200\n2\n1300\n2\n200\n3\n500\n8\n0\n".to_vec());
        let (mut out, mut err): (Vec<u8>, Vec<u8>) = (vec![], vec![]);
        session.run_menu(&mut input, &mut out, &mut err).unwrap();
        assert!(err.is_empty());

        let receipt = std::fs::read_to_string(session.receipt_path()).unwrap();
        let lines: Vec<&str> = receipt.lines().collect();
        assert_eq!(
            lines,
            vec![
                RECEIPT_HEADER,
                "Date: 2024-01-02 03:04:05",
                "Owner: Juan Perez",
                "Current Balance: 500",
                TRANSACTIONS_BANNER,
                "2024-01-02 03:04:05: Deposit - Monto: 200",
                "2024-01-02 03:04:05: Withdrawal - Monto: -200",
                "2024-01-02 03:04:05: Transfer to Maria Gonzalez - Monto: -500",
                RECEIPT_FOOTER,
            ]
        );
    }
}
