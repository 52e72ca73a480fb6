//! Error types for the data layer.
//!
//! [`DbError`] keeps the datastore's own message intact. Integrity
//! violations reported by `PostgreSQL` are lifted into
//! [`DbError::Constraint`] so callers can tell a rejected write from an
//! infrastructure failure without parsing text.

/// Which integrity rule a rejected write broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A unique or primary-key constraint (duplicate species name).
    Unique,
    /// A foreign-key constraint (creature referencing an unknown species).
    ForeignKey,
    /// A `NOT NULL` or `CHECK` constraint, or an exhausted sequence.
    Other,
}

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed for a reason other than an
    /// integrity violation.
    #[error("PostgreSQL error: {0}")]
    Postgres(sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The datastore rejected a write because it broke an integrity rule.
    ///
    /// The message is the datastore's verbatim text.
    #[error("{message}")]
    Constraint {
        /// Which rule was broken.
        kind: ConstraintKind,
        /// The datastore's message.
        message: String,
    },

    /// An update matched no row.
    #[error("{0}")]
    RecordNotFound(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Build the error raised when a species update matches nothing.
    pub fn species_not_found(name: &str) -> Self {
        Self::RecordNotFound(format!("Record to update not found: no species named '{name}'"))
    }

    /// Return the constraint kind if this is an integrity violation.
    pub const fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                sqlx::error::ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation => Some(ConstraintKind::Other),
                _ => None,
            },
            _ => None,
        };

        match (kind, &err) {
            (Some(kind), sqlx::Error::Database(db_err)) => Self::Constraint {
                kind,
                message: db_err.message().to_owned(),
            },
            _ => Self::Postgres(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_postgres() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Postgres(_)));
        assert_eq!(err.constraint_kind(), None);
    }

    #[test]
    fn constraint_display_is_raw_message() {
        let err = DbError::Constraint {
            kind: ConstraintKind::Unique,
            message: String::from("duplicate key value violates unique constraint \"species_pkey\""),
        };
        assert_eq!(
            err.to_string(),
            "duplicate key value violates unique constraint \"species_pkey\""
        );
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
    }

    #[test]
    fn species_not_found_names_the_species() {
        let err = DbError::species_not_found("Gleeble");
        assert!(err.to_string().contains("Gleeble"));
    }
}
