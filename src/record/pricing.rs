//! Pricing decorator for record drafts

use serde::Serialize;

use super::draft::RecordDraft;

/// A record draft carrying a unit price and quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedRecord {
    record: RecordDraft,
    unit_price: f64,
    quantity: f64,
    currency: String,
}

impl PricedRecord {
    pub fn new(
        record: RecordDraft,
        unit_price: f64,
        quantity: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            record,
            unit_price,
            quantity,
            currency: currency.into(),
        }
    }

    pub fn record(&self) -> &RecordDraft {
        &self.record
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn total(&self) -> f64 {
        self.unit_price * self.quantity
    }

    pub fn into_record(self) -> RecordDraft {
        self.record
    }
}
