//! Todo repository.

use chrono::Utc;
use lifeops_core::entities::Todo;
use lifeops_core::filters::TodoFilter;
use lifeops_core::ids::PREFIX_TODO;
use lifeops_core::inputs::NewTodo;

use crate::error::DatabaseError;
use crate::helpers::{
    get_bool, get_opt_date, get_opt_string, opt_date_value, parse_datetime,
    parse_optional_datetime,
};
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::todo::TodoUpdate;

const SELECT_COLS: &str =
    "id, title, description, is_completed, completed_at, due_date, created_at, updated_at";

fn row_to_todo(row: &libsql::Row) -> Result<Todo, DatabaseError> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        is_completed: get_bool(row, 3)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 4)?.as_deref())?,
        due_date: get_opt_date(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl LifeService {
    pub async fn create_todo(&self, input: NewTodo) -> Result<Todo, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TODO).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO todos (id, title, description, is_completed, completed_at, due_date, created_at, updated_at)
                 VALUES (?1, ?2, ?3, 0, NULL, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    input.title.as_str(),
                    input.description.as_str(),
                    opt_date_value(input.due_date),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(todo_id = %id, "todo created");

        Ok(Todo {
            id,
            title: input.title,
            description: input.description,
            is_completed: false,
            completed_at: None,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_todo(&self, id: &str) -> Result<Todo, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM todos WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_todo(&row)
    }

    pub async fn update_todo(&self, id: &str, update: TodoUpdate) -> Result<Todo, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref title) = update.title {
            clauses.push("title", title.clone());
        }
        if let Some(ref description) = update.description {
            clauses.push("description", description.clone());
        }
        if let Some(due_date) = update.due_date {
            clauses.push("due_date", opt_date_value(due_date));
        }

        if clauses.is_empty() {
            return self.get_todo(id).await;
        }

        let (sql, params) = clauses.into_update("todos", id, Utc::now());
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_todo(id).await
    }

    pub async fn delete_todo(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM todos WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Flip completion; `completed_at` is set when becoming done, cleared otherwise.
    pub async fn toggle_todo(&self, id: &str) -> Result<Todo, DatabaseError> {
        let current = self.get_todo(id).await?;
        let now = Utc::now();
        let done = !current.is_completed;
        let completed_at: libsql::Value = if done {
            now.to_rfc3339().into()
        } else {
            libsql::Value::Null
        };
        self.db()
            .conn()
            .execute(
                "UPDATE todos SET is_completed = ?1, completed_at = ?2, updated_at = ?3 WHERE id = ?4",
                libsql::params![i64::from(done), completed_at, now.to_rfc3339(), id],
            )
            .await?;
        tracing::debug!(todo_id = id, done, "todo toggled");

        Ok(Todo {
            is_completed: done,
            completed_at: done.then_some(now),
            updated_at: now,
            ..current
        })
    }

    /// Todos newest first, narrowed by completion.
    pub async fn list_todos(&self, filter: &TodoFilter) -> Result<Vec<Todo>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM todos ORDER BY created_at DESC, rowid DESC"),
                (),
            )
            .await?;
        let mut todos = Vec::new();
        while let Some(row) = rows.next().await? {
            let todo = row_to_todo(&row)?;
            if filter.completion.matches(todo.is_completed) {
                todos.push(todo);
            }
        }
        Ok(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{date, test_service};
    use crate::updates::todo::TodoUpdateBuilder;
    use lifeops_core::filters::Completion;
    use pretty_assertions::assert_eq;

    fn titled(title: &str) -> NewTodo {
        NewTodo {
            title: title.into(),
            ..NewTodo::default()
        }
    }

    #[tokio::test]
    async fn create_and_get() {
        let svc = test_service().await;
        let todo = svc
            .create_todo(NewTodo {
                title: "Buy mic".into(),
                description: String::new(),
                due_date: Some(date(2024, 6, 20)),
            })
            .await
            .unwrap();
        assert!(todo.id.starts_with("tdo-"));
        assert_eq!(svc.get_todo(&todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn toggle_sets_and_clears_completed_at() {
        let svc = test_service().await;
        let todo = svc.create_todo(titled("Call bank")).await.unwrap();

        let done = svc.toggle_todo(&todo.id).await.unwrap();
        assert!(done.is_completed);
        assert!(done.completed_at.is_some());
        assert_eq!(svc.get_todo(&todo.id).await.unwrap(), done);

        let open = svc.toggle_todo(&todo.id).await.unwrap();
        assert!(!open.is_completed);
        assert!(open.completed_at.is_none());
    }

    #[tokio::test]
    async fn update_and_delete() {
        let svc = test_service().await;
        let todo = svc.create_todo(titled("Draft")).await.unwrap();
        let updated = svc
            .update_todo(&todo.id, TodoUpdateBuilder::new().title("Final").build())
            .await
            .unwrap();
        assert_eq!(updated.title, "Final");

        svc.delete_todo(&todo.id).await.unwrap();
        assert!(matches!(
            svc.update_todo(&todo.id, TodoUpdateBuilder::new().title("x").build())
                .await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn list_newest_first_with_completion_filter() {
        let svc = test_service().await;
        let first = svc.create_todo(titled("first")).await.unwrap();
        let second = svc.create_todo(titled("second")).await.unwrap();
        svc.toggle_todo(&first.id).await.unwrap();

        let all = svc.list_todos(&TodoFilter::default()).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

        let open = svc
            .list_todos(&TodoFilter {
                completion: Completion::Incomplete,
            })
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, second.id);
    }
}
