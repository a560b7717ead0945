//! SQLite error classification helpers.

/// Returns true when the error is a unique-constraint failure on the
/// target token column.
///
/// SQLite reports the violated column in the error message
/// (`UNIQUE constraint failed: targets.token`) rather than a named
/// constraint, so the message is inspected after the kind check.
pub fn is_unique_violation_on_token(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("targets.token")
}
