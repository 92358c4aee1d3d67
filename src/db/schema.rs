//! Database schema and migrations for Noticeboard.
//!
//! Migrations are applied in order when the database is first opened or
//! upgraded; the `schema_version` table records which ones have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: boards table
    r#"
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    writer      TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
"#,
    // v2: indexes for sortable listing columns
    r#"
CREATE INDEX idx_boards_created_at ON boards(created_at);
CREATE INDEX idx_boards_updated_at ON boards(updated_at);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_boards_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE boards"));
        assert!(first.contains("AUTOINCREMENT"));
        for column in ["title", "content", "writer", "created_at", "updated_at"] {
            assert!(first.contains(column), "missing column {column}");
        }
    }

    #[test]
    fn test_migrations_are_valid_sql() {
        for migration in MIGRATIONS {
            assert!(!migration.trim().is_empty());
            assert!(
                migration.contains("CREATE TABLE")
                    || migration.contains("ALTER TABLE")
                    || migration.contains("CREATE INDEX")
            );
        }
    }
}
