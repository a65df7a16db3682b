//! Salary and tax figures extracted from an income-tax document.

use serde::{Deserialize, Serialize};

/// One of the figures reported by a tax document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Gross salary.
    GrossSalary,
    /// Net salary.
    NetSalary,
    /// Income from other sources.
    OtherSources,
    /// Income chargeable under the head "Salaries".
    ChargeableSalaries,
    /// Total tax deducted at source.
    TotalTaxDeducted,
}

impl Field {
    /// All fields, in output order.
    pub const ALL: [Field; 5] = [
        Field::GrossSalary,
        Field::NetSalary,
        Field::OtherSources,
        Field::ChargeableSalaries,
        Field::TotalTaxDeducted,
    ];

    /// Key used for this field in the serialized record.
    pub fn key(&self) -> &'static str {
        match self {
            Field::GrossSalary => "Gross Salary",
            Field::NetSalary => "Net Salary",
            Field::OtherSources => "Income from Other Sources",
            Field::ChargeableSalaries => "Income chargeable under Salaries",
            Field::TotalTaxDeducted => "Total Tax Deducted",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The fixed five-key record written to the output file.
///
/// Values are numeric tokens exactly as found in the text (digits, possibly
/// with internal spaces). Every key is always serialized; a figure that was
/// not found is written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionResult {
    #[serde(rename = "Gross Salary")]
    pub gross_salary: Option<String>,

    #[serde(rename = "Net Salary")]
    pub net_salary: Option<String>,

    #[serde(rename = "Income from Other Sources")]
    pub other_sources: Option<String>,

    #[serde(rename = "Income chargeable under Salaries")]
    pub chargeable_salaries: Option<String>,

    #[serde(rename = "Total Tax Deducted")]
    pub total_tax_deducted: Option<String>,
}

impl ExtractionResult {
    /// Create a record with every figure unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set (or clear) the value of a field.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// Iterate over all fields in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Fields that have no value.
    pub fn missing_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field)
            .collect()
    }

    /// Check whether every figure is unset.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_none())
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::GrossSalary => &self.gross_salary,
            Field::NetSalary => &self.net_salary,
            Field::OtherSources => &self.other_sources,
            Field::ChargeableSalaries => &self.chargeable_salaries,
            Field::TotalTaxDeducted => &self.total_tax_deducted,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::GrossSalary => &mut self.gross_salary,
            Field::NetSalary => &mut self.net_salary,
            Field::OtherSources => &mut self.other_sources,
            Field::ChargeableSalaries => &mut self.chargeable_salaries,
            Field::TotalTaxDeducted => &mut self.total_tax_deducted,
        }
    }
}
