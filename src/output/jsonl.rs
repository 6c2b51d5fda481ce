#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable listings
//!
//! Outputs one `{"tag": .., "directory": ..}` object per line, in store order.

use crate::store::TagEntryStore;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format every entry of the store as a JSON line
    pub fn format(&self, store: &TagEntryStore) -> String {
        let mut output = String::new();

        for entry in store {
            if let Ok(json) = serde_json::to_string(entry) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
