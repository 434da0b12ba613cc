/// Internal primary keys (admin users, audit rows) are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Public record handles (submissions, mentor applications) are UUIDs.
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
