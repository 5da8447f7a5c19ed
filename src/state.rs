//! Application State
//! Single owner of the loaded table, the user's column choices and the last
//! good summary. Failed steps are logged and leave the previous state in place.

use crate::data::{DataLoader, LoadedTable, LoaderError};
use crate::stats::{AggregateError, AggregationRequest, AggregationResult, Aggregator};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// User settings for the summary.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserSettings {
    pub total_field: String,
    pub sub_field: String,
    pub filter_text: String,
}

impl UserSettings {
    pub fn request(&self) -> AggregationRequest {
        AggregationRequest::new(&self.total_field, &self.sub_field, &self.filter_text)
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub loaded: Option<LoadedTable>,
    pub settings: UserSettings,
    pub result: Option<AggregationResult>,
    pub summary: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse freshly read CSV text and replace the current table with it.
    /// On failure the previous table stays.
    pub fn apply_csv_text(&mut self, source: Option<PathBuf>, text: &str) -> Result<(), LoaderError> {
        match DataLoader::parse_text(source, text) {
            Ok(loaded) => {
                self.replace_table(loaded);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "keeping previous table");
                Err(e)
            }
        }
    }

    /// Install a new table, replacing any previous one outright.
    pub fn replace_table(&mut self, loaded: LoadedTable) {
        info!(
            file = %loaded.file_name().unwrap_or_default(),
            records = loaded.table.row_count(),
            "table loaded"
        );
        self.loaded = Some(loaded);
        self.recompute_summary();
    }

    pub fn set_total_field(&mut self, field: impl Into<String>) {
        self.settings.total_field = field.into();
        self.recompute_summary();
    }

    pub fn set_sub_field(&mut self, field: impl Into<String>) {
        self.settings.sub_field = field.into();
        self.recompute_summary();
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.settings.filter_text = text.into();
        self.recompute_summary();
    }

    /// Recompute the summary from scratch. Incomplete settings or a missing
    /// table leave the previous summary untouched.
    pub fn recompute_summary(&mut self) {
        let records = self
            .loaded
            .as_ref()
            .map(|l| l.table.records.as_slice())
            .unwrap_or_default();
        let request = self.settings.request();

        match Aggregator::aggregate(records, &request) {
            Ok(result) => {
                debug!(?result, "summary updated");
                self.summary = result.format_summary(&request);
                self.result = Some(result);
            }
            Err(AggregateError::EmptyFilter) => {}
            Err(e) => debug!(reason = %e, "summary not updated"),
        }
    }

    /// Header field names for the column selectors.
    pub fn field_choices(&self) -> Vec<String> {
        self.loaded
            .as_ref()
            .map(|l| l.table.header.iter().map(|h| h.field.clone()).collect())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.loaded.as_ref().map(|l| l.table.row_count()).unwrap_or(0)
    }
}
