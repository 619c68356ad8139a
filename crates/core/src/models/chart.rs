use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single point of the GVV portfolio-value series.
///
/// Points are seeded once per month bucket. The admin edits only `value`;
/// labels and ordering never change through this library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Unique identifier
    pub id: Uuid,

    /// Display label for the bucket (e.g., "Ene", "Feb")
    pub month: String,

    /// Chronological position. Unique and totally ordered; the series is
    /// always rendered ascending by this field, never by insertion order.
    pub month_order: i32,

    /// Fund NAV index value for the bucket
    #[serde(rename = "valor")]
    pub value: f64,
}

impl ChartPoint {
    pub fn new(month: impl Into<String>, month_order: i32, value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            month: month.into(),
            month_order,
            value,
        }
    }
}

/// One pending value change in a batch save.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEdit {
    pub id: Uuid,
    pub value: f64,
}

/// Outcome of a batch save, per point.
///
/// A batch is at-least-once per point and never rolled back: points that
/// saved stay saved even when others fail. `failed` carries the error text
/// so the frontend can show a warning listing what did not persist.
#[derive(Debug, Clone, Default)]
pub struct BatchSaveReport {
    /// IDs whose new value persisted
    pub applied: Vec<Uuid>,

    /// IDs that failed, with the error message for each
    pub failed: Vec<(Uuid, String)>,
}

impl BatchSaveReport {
    /// `true` when every edit in the batch persisted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of edits the batch attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.applied.len() + self.failed.len()
    }
}
