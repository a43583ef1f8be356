//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// User records. `id` is allocated by a `SERIAL` sequence.
    users (id) {
        /// Primary key assigned on insert.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Contact address.
        email -> Varchar,
    }
}

/// Column names of the `users` table as Diesel knows them.
#[must_use]
pub fn user_table_columns() -> [&'static str; 3] {
    use diesel::Column;

    [
        <users::id as Column>::NAME,
        <users::name as Column>::NAME,
        <users::email as Column>::NAME,
    ]
}
