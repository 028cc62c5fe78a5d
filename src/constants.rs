/// Decimal places used when exporting balances to csv
pub const PRECISION: usize = 2;

/// Format used for transaction and receipt timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_RECEIPT_FILE: &str = "ticket_cuenta1.txt";

pub const PRIMARY_OWNER: &str = "Juan Perez";
pub const PRIMARY_PASSWORD: &str = "contrasena_segura";
pub const PRIMARY_BALANCE: f64 = 1000.0;

pub const SECONDARY_OWNER: &str = "Maria Gonzalez";
pub const SECONDARY_PASSWORD: &str = "otra_contrasena";
pub const SECONDARY_BALANCE: f64 = 500.0;
