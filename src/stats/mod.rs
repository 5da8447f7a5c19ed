//! Stats module - Column aggregation

mod aggregator;

pub use aggregator::{AggregateError, AggregationRequest, AggregationResult, Aggregator};
