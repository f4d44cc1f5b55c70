// Incremental SQL fragment builder for dynamic queries

use sqlx::postgres::{PgPool, PgRow};
use sqlx::{FromRow, Postgres};

/// A positional query argument
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Text(String),
    Int(i64),
    Float(f64),
}

/// An SQL statement under construction, paired with its ordered argument list
///
/// The builder hands out placeholder numbers only from [`SqlFragment::bind`],
/// so `$N` in the text always refers to argument index `N - 1` no matter which
/// subset of optional clauses gets appended. A fragment is built per call and
/// discarded after execution.
#[derive(Debug, Clone)]
pub struct SqlFragment {
    sql: String,
    args: Vec<SqlArg>,
    predicates: usize,
}

impl SqlFragment {
    /// Start a fragment from a base clause (SELECT ... FROM ... JOIN ...)
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            sql: base.into(),
            args: Vec::new(),
            predicates: 0,
        }
    }

    /// Append raw SQL text without touching the argument list
    pub fn push(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append an argument and return its placeholder number
    ///
    /// The returned number is always `args.len()` after the push, which is the
    /// `$N` the caller must reference next.
    pub fn bind(&mut self, arg: SqlArg) -> usize {
        self.args.push(arg);
        self.args.len()
    }

    /// Append a `WHERE`/`AND` predicate comparing `expr` against a new argument
    ///
    /// `expr` is the left-hand side plus operator, e.g. `"city LIKE"`; the
    /// placeholder is appended by the builder so text and argument cannot
    /// drift apart.
    pub fn predicate(&mut self, expr: &str, arg: SqlArg) {
        let n = self.bind(arg);
        let keyword = if self.predicates == 0 { "WHERE" } else { "AND" };
        self.sql.push_str(&format!("\n{} {} ${}", keyword, expr, n));
        self.predicates += 1;
    }

    /// The assembled SQL text
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The ordered argument list
    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    /// Number of `WHERE`/`AND` predicates appended so far
    pub fn predicate_count(&self) -> usize {
        self.predicates
    }

    /// Execute the fragment, mapping rows to `T`
    ///
    /// Arguments are bound in list order, preserving the placeholder
    /// correspondence established during building.
    pub async fn fetch_all<T>(&self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut query = sqlx::query_as::<Postgres, T>(&self.sql);
        for arg in &self.args {
            query = match arg {
                SqlArg::Text(s) => query.bind(s.clone()),
                SqlArg::Int(v) => query.bind(*v),
                SqlArg::Float(v) => query.bind(*v),
            };
        }
        query.fetch_all(pool).await
    }
}
