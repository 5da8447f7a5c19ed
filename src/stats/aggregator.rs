//! Aggregator Module
//! Sums a total column overall and for rows whose sub column contains a
//! filter substring.

use crate::data::Record;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("No total column selected")]
    MissingTotalField,
    #[error("No sub column selected")]
    MissingSubField,
    #[error("Filter text is empty")]
    EmptyFilter,
}

/// Columns and filter chosen by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationRequest {
    pub total_field: String,
    pub sub_field: String,
    pub filter_text: String,
}

impl AggregationRequest {
    pub fn new(
        total_field: impl Into<String>,
        sub_field: impl Into<String>,
        filter_text: impl Into<String>,
    ) -> Self {
        Self {
            total_field: total_field.into(),
            sub_field: sub_field.into(),
            filter_text: filter_text.into(),
        }
    }

    /// Check that both columns are chosen and the filter is non-empty.
    pub fn validate(&self) -> Result<(), AggregateError> {
        if self.total_field.is_empty() {
            return Err(AggregateError::MissingTotalField);
        }
        if self.sub_field.is_empty() {
            return Err(AggregateError::MissingSubField);
        }
        if self.filter_text.is_empty() {
            return Err(AggregateError::EmptyFilter);
        }
        Ok(())
    }
}

/// Sums rounded to one decimal. `remainder_sum` is the difference of the
/// two rounded sums and is not rounded again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationResult {
    pub total_sum: f64,
    pub matched_sum: f64,
    pub remainder_sum: f64,
}

impl AggregationResult {
    /// Three-line summary suitable for pasting elsewhere.
    pub fn format_summary(&self, request: &AggregationRequest) -> String {
        format!(
            "- {} total: {}\n-- {}: {}\n-- other: {}",
            request.total_field,
            self.total_sum,
            request.filter_text,
            self.matched_sum,
            self.remainder_sum
        )
    }
}

/// Parse a cell as a number, substituting zero for absent, empty,
/// unparsable or non-finite values.
pub fn parse_or_zero(value: Option<&str>) -> f64 {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Round to one decimal place, halves going toward positive infinity.
pub fn round_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Nearest integer, halves toward positive infinity. Compares the fraction
/// instead of adding 0.5 so values just below a half stay down.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Handles the total/matched/remainder computation.
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(
        records: &[Record],
        request: &AggregationRequest,
    ) -> Result<AggregationResult, AggregateError> {
        request.validate()?;

        let value_of = |record: &Record| parse_or_zero(record.get(&request.total_field));

        let total_raw: f64 = records.iter().map(value_of).sum();
        let matched_raw: f64 = records
            .iter()
            .filter(|r| {
                r.get(&request.sub_field)
                    .unwrap_or_default()
                    .contains(request.filter_text.as_str())
            })
            .map(value_of)
            .sum();

        let total_sum = round_tenth(total_raw);
        let matched_sum = round_tenth(matched_raw);

        Ok(AggregationResult {
            total_sum,
            matched_sum,
            remainder_sum: total_sum - matched_sum,
        })
    }
}
