//! Line-oriented salary and tax figure parser.

use tracing::{debug, info, trace};

use crate::models::config::{ExtractionConfig, LabelMatching, MatchPolicy};
use crate::models::record::{ExtractionResult, Field};

use super::rules::{find_numeric_value, label_rules, LabelRule};
use super::FigureParser;

/// A line that matched a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Line number in the document text (1-indexed).
    pub line: usize,
    /// Field the line reports.
    pub field: Field,
    /// Numeric token found on the line.
    pub value: Option<String>,
}

/// Result of figure extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Extracted figures.
    pub result: ExtractionResult,
    /// Every line that matched a label, in line order.
    pub matches: Vec<FieldMatch>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
}

/// Parser for salary certificates and income-tax returns.
pub struct SalaryFieldParser {
    match_policy: MatchPolicy,
    rules: [LabelRule; 5],
}

impl SalaryFieldParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            rules: label_rules(LabelMatching::default()),
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_match_policy(config.match_policy)
            .with_label_matching(config.label_matching)
    }

    /// Set the policy for repeated labels.
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Set the matching mode for the chargeable-salaries label.
    pub fn with_label_matching(mut self, matching: LabelMatching) -> Self {
        self.rules = label_rules(matching);
        self
    }

    /// Strip thousands separators and lowercase the text.
    pub fn normalize(text: &str) -> String {
        text.replace(',', "").to_lowercase()
    }

    /// Field reported by a normalized line, if any.
    pub fn classify_line(&self, line: &str) -> Option<Field> {
        self.rules
            .iter()
            .find(|rule| rule.label.matches(line))
            .map(|rule| rule.field)
    }

    /// Extract the figures, without the match trace.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.parse(text).result
    }
}

impl Default for SalaryFieldParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureParser for SalaryFieldParser {
    fn parse(&self, text: &str) -> ExtractionReport {
        info!("Parsing figures from {} characters of text", text.len());

        let normalized = Self::normalize(text);
        let mut result = ExtractionResult::new();
        let mut matches = Vec::new();

        for (index, line) in normalized.split('\n').enumerate() {
            let Some(field) = self.classify_line(line) else {
                continue;
            };

            let value = find_numeric_value(line);
            debug!("Line {}: {} = {:?}", index + 1, field, value);

            let keep_existing =
                self.match_policy == MatchPolicy::FirstWins && result.get(field).is_some();
            if keep_existing {
                trace!("Keeping earlier value for {}", field);
            } else {
                result.set(field, value.clone());
            }

            matches.push(FieldMatch {
                line: index + 1,
                field,
                value,
            });
        }

        let warnings: Vec<String> = result
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        debug!(
            "Matched {} lines, {} of {} fields missing",
            matches.len(),
            warnings.len(),
            Field::ALL.len()
        );

        ExtractionReport {
            result,
            matches,
            warnings,
        }
    }
}
