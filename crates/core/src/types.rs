/// Vehicle and milestone identifiers are opaque strings issued by the
/// persistence layer (or generated client-side for unsaved vehicles).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
