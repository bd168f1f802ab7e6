//! Partial-update structs and their builders.
//!
//! Only `Some` fields are written. For nullable columns the inner `Option`
//! distinguishes "set to NULL" (`Some(None)`) from "leave alone" (`None`).

pub mod course;
pub mod journal;
pub mod kpi;
pub mod milestone;
pub mod strategy;
pub mod tag;
pub mod task;
pub mod todo;

/// Accumulates `SET` clauses and their positional parameters.
pub(crate) struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    pub(crate) const fn new() -> Self {
        Self {
            sets: Vec::new(),
            params: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finish as `UPDATE {table} SET .. WHERE id = ?n`, stamping `updated_at`.
    pub(crate) fn into_update(
        mut self,
        table: &str,
        id: &str,
        now: chrono::DateTime<chrono::Utc>,
    ) -> (String, Vec<libsql::Value>) {
        self.push("updated_at", now.to_rfc3339());
        self.params.push(id.into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_numbered_update() {
        let mut clauses = SetClauses::new();
        assert!(clauses.is_empty());
        clauses.push("title", "New");
        clauses.push("price", 100_i64);
        let (sql, params) = clauses.into_update("courses", "crs-1", chrono::Utc::now());
        assert_eq!(
            sql,
            "UPDATE courses SET title = ?1, price = ?2, updated_at = ?3 WHERE id = ?4"
        );
        assert_eq!(params.len(), 4);
    }
}
