/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates stored in `DATE` columns (note creation / update).
pub type Date = chrono::NaiveDate;

/// Today's date in UTC, used when a note arrives without explicit dates.
pub fn today() -> Date {
    chrono::Utc::now().date_naive()
}
