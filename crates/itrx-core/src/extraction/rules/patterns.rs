//! Common regex patterns for tax document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Digit run with optional internal whitespace, at least two digits ("1 234 567", "25000")
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"(\d+[\d\s]*\d+)"
    ).unwrap();

    // "income chargeable under the head 'salaries'" with straight, typographic or missing quotes
    pub static ref CHARGEABLE_SALARIES_LABEL: Regex = Regex::new(
        r"income\s+chargeable\s+under\s+the\s+head\s+['\u{2018}\u{2019}]?salaries"
    ).unwrap();
}
