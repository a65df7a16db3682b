//! Label rules and the numeric token pattern for tax documents.

pub mod numeric;
pub mod patterns;

pub use numeric::find_numeric_value;
pub use patterns::*;

use regex::Regex;

use crate::models::config::LabelMatching;
use crate::models::record::Field;

/// How a line is recognised as reporting a field.
#[derive(Debug, Clone, Copy)]
pub enum Label {
    /// The line contains any of these substrings.
    Contains(&'static [&'static str]),
    /// The line matches this pattern.
    Pattern(&'static Regex),
}

impl Label {
    /// Test a (normalized) line against the label.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Label::Contains(keywords) => keywords.iter().any(|k| line.contains(k)),
            Label::Pattern(re) => re.is_match(line),
        }
    }
}

/// A label and the field it reports.
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    pub field: Field,
    pub label: Label,
}

const GROSS_SALARY: &[&str] = &["gross salary"];
const NET_SALARY: &[&str] = &["net salary"];
const OTHER_SOURCES: &[&str] = &["income from other sources"];
const TOTAL_TAX: &[&str] = &["total tax deducted", "total tax"];
const CHARGEABLE_SALARIES_VERBATIM: &[&str] =
    &["Income chargeable under the head \u{2018}Salaries\u{2019}"];

/// Label rules in priority order. The first rule matching a line claims it.
pub fn label_rules(matching: LabelMatching) -> [LabelRule; 5] {
    let chargeable = match matching {
        LabelMatching::Normalized => Label::Pattern(&*CHARGEABLE_SALARIES_LABEL),
        LabelMatching::Verbatim => Label::Contains(CHARGEABLE_SALARIES_VERBATIM),
    };

    [
        LabelRule {
            field: Field::GrossSalary,
            label: Label::Contains(GROSS_SALARY),
        },
        LabelRule {
            field: Field::NetSalary,
            label: Label::Contains(NET_SALARY),
        },
        LabelRule {
            field: Field::OtherSources,
            label: Label::Contains(OTHER_SOURCES),
        },
        LabelRule {
            field: Field::ChargeableSalaries,
            label: chargeable,
        },
        LabelRule {
            field: Field::TotalTaxDeducted,
            label: Label::Contains(TOTAL_TAX),
        },
    ]
}
