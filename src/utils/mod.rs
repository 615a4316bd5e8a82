// URL handling utilities
pub mod url_parser;
pub mod query_string;

// Parsing utilities
pub mod csv_list;

// Display formatting
pub mod number_format;

// Re-export all utilities for convenient access
pub use url_parser::hostname_from_url;
pub use query_string::build_query_string;
pub use csv_list::split_csv;
pub use number_format::{format_amount, format_plain_number};
