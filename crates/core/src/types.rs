/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates without a time component (enrollment dates).
pub type DateOnly = chrono::NaiveDate;
