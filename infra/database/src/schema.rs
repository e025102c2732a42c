use crate::error::DatabaseError;
use sqlx::AnyPool;
use std::fmt;
use tracing::debug;

/// The relational engine behind a connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Resolves the backend from the URL scheme.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Validation`] for any scheme other than `postgres`,
    /// `postgresql` or `sqlite`.
    pub fn from_url(url: &str) -> Result<Self, DatabaseError> {
        let scheme = url.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
        match scheme.as_deref() {
            Some("postgres" | "postgresql") => Ok(Self::Postgres),
            Some("sqlite") => Ok(Self::Sqlite),
            _ => Err(DatabaseError::Validation {
                message: "Unsupported database URL scheme".into(),
                context: Some("Expected postgres://, postgresql:// or sqlite:".into()),
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }

    const fn schema(self) -> &'static str {
        match self {
            Self::Postgres => include_str!("../schema/postgres.sql"),
            Self::Sqlite => include_str!("../schema/sqlite.sql"),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates the `donos` and `pets` tables when they do not exist yet.
pub(crate) async fn bootstrap(pool: &AnyPool, backend: Backend) -> Result<usize, DatabaseError> {
    let statements = statements(backend.schema());

    for statement in &statements {
        debug!(%backend, statement, "Applying schema statement");
        sqlx::query(statement).execute(pool).await.map_err(|e| DatabaseError::Schema {
            message: e.to_string().into(),
            context: statement.lines().next().map(|line| line.trim().to_owned().into()),
        })?;
    }

    Ok(statements.len())
}

fn statements(script: &str) -> Vec<&str> {
    script.split(';').map(str::trim).filter(|s| !s.is_empty()).collect()
}
