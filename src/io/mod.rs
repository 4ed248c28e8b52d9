pub mod input;
pub mod output;

pub use input::{
    normalize_amount, parse_amount, read_interest_rates, read_interest_rates_from,
    read_transactions, read_transactions_from,
};
pub use output::{write_csv, write_json, write_schedule, CSV_HEADER};
