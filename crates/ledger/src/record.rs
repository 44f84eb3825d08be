//! The module contains the `Record` type, one entry of the ledger.
//!
//! Records are persisted with short field tags (`n`, `t`, `a`, `cu`, `co`)
//! so the on-disk layout stays compact and does not depend on Rust field
//! names.
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::RecordKind;

/// Currency codes the form offers. The store accepts any string.
pub const CURRENCIES: [&str; 2] = ["PEN", "USD"];

/// Confidence of every non-pending record.
pub const CERTAIN: f64 = 1.0;

/// Represent an income, an expense or one of their pending variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "n")]
    pub name: String,
    #[serde(rename = "t")]
    pub kind: RecordKind,
    #[serde(rename = "a")]
    pub amount: f64,
    #[serde(rename = "cu")]
    pub currency: String,
    /// 0.0 to 1.0, only meaningful for pending kinds.
    #[serde(rename = "co")]
    pub confidence: f64,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: RecordKind::default(),
            amount: 0.0,
            currency: String::new(),
            confidence: CERTAIN,
        }
    }
}

impl Record {
    /// Builds a record, forcing `confidence` to [`CERTAIN`] for
    /// non-pending kinds.
    pub fn new(
        name: impl Into<String>,
        kind: RecordKind,
        amount: f64,
        currency: impl Into<String>,
        confidence: f64,
    ) -> Self {
        let mut record = Self {
            name: name.into(),
            kind,
            amount,
            currency: currency.into(),
            confidence,
        };
        record.normalize();
        record
    }

    /// Re-applies the confidence rule after fields were changed directly.
    pub fn normalize(&mut self) {
        if !self.kind.is_pending() {
            self.confidence = CERTAIN;
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.kind.is_pending()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {}",
            self.name, self.kind, self.amount, self.currency
        )
    }
}

/// Stable sort by name, byte-lexicographic. Equal names keep their order.
pub fn sort_by_name(records: &mut [Record]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}
