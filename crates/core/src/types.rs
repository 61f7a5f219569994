/// Note identifiers are UUIDs generated by the data access layer.
pub type NoteId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
