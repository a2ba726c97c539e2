use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(
    UnsupportedSnapshotFormat,
    "Unsupported ledger snapshot format: '{extension}'. Expected .json or .csv.",
    { extension: &str }
);

// Parsing-related.
define_client_error!(InvalidJson, "Invalid JSON content: {details}.", { details: &str });
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidIsoTimestamp,
    "Invalid ISO-8601 timestamp: {timestamp}.",
    { timestamp: &str }
);
define_client_error!(
    InvalidClpAmount,
    "Invalid CLP amount: '{value}'.",
    { value: &str }
);

// Commission-related.
define_client_error!(
    UnbalancedCommissionRates,
    "Commission rates must add up to 100%: pos {pos_rate} + certifier {certifier_rate} + admin {admin_rate} = {sum}.",
    { pos_rate: f64, certifier_rate: f64, admin_rate: f64, sum: f64 }
);
