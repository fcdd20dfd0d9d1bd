/// Identifier of a content item (`items.id`, a PostgreSQL BIGSERIAL).
/// Metadata rows are keyed by it too.
pub type DbId = i64;

/// `created_at` / `updated_at` of items and metadata rows, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
