/// Returns `true` if the error is a unique violation on the alias constraint.
///
/// Only the `urls_alias_key` constraint counts: a unique violation elsewhere
/// in the schema is still a storage failure, not an alias collision.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("urls_alias_key"))
}
