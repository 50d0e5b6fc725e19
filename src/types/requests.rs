/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One date/currency pair for the bulk currency conversion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCurrencyConversionModel {
    /// The date for which the rate is requested
    pub date: NaiveDate,
    /// ISO 4217 currency code of the origin currency
    pub source_currency: String,
}
