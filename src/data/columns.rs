//! Column Width Estimator
//! Derives a pixel width per column from the first record's values.

use super::table::{distinct_field_names, HeaderField, Record, TableError};

/// Character count used when the sampled value is empty or absent.
const DEFAULT_CHARS: usize = 4;
/// Values longer than this are shortened by `LONG_VALUE_TRIM` characters.
const LONG_VALUE_CHARS: usize = 25;
const LONG_VALUE_TRIM: usize = 10;
/// Values shorter than this are padded by `SHORT_VALUE_PAD` characters.
const SHORT_VALUE_CHARS: usize = 5;
const SHORT_VALUE_PAD: usize = 5;
const PIXELS_PER_CHAR: usize = 12;

pub struct ColumnWidthEstimator;

impl ColumnWidthEstimator {
    /// Build header metadata for each distinct field name, sampling only
    /// `first_record`. Fails with [`TableError::NoRecords`] when there is
    /// nothing to sample.
    pub fn estimate(
        field_names: &[String],
        first_record: Option<&Record>,
    ) -> Result<Vec<HeaderField>, TableError> {
        let record = first_record.ok_or(TableError::NoRecords)?;

        let header = distinct_field_names(field_names)
            .into_iter()
            .map(|name| HeaderField {
                width: Self::width_for(record.get(&name)),
                display_name: name.clone(),
                field: name,
            })
            .collect();

        Ok(header)
    }

    /// Pixel width for a single sampled value. Length is counted in UTF-16
    /// code units, so a character outside the BMP counts twice.
    pub fn width_for(value: Option<&str>) -> u32 {
        let len = match value.map(|v| v.encode_utf16().count()) {
            Some(0) | None => DEFAULT_CHARS,
            Some(n) => n,
        };
        let calc = if len > LONG_VALUE_CHARS {
            len - LONG_VALUE_TRIM
        } else {
            len
        };
        let calc2 = if calc < SHORT_VALUE_CHARS {
            calc + SHORT_VALUE_PAD
        } else {
            calc
        };

        u32::try_from(calc2 * PIXELS_PER_CHAR).unwrap_or(u32::MAX)
    }
}
