//! Tokens of the matrix text format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Opens an entry line
pub const ENTRY_OPEN: char = '(';

/// Closes an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separates the fields of an entry line
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry: row, col, value
pub const ENTRY_FIELDS: usize = 3;
