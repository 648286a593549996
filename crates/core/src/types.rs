/// Identifier type for routes as issued by the console backend.
pub type RouteId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
