//! Task repository: CRUD, completion, bulk actions, tags, and the filtered
//! task list.

use chrono::{NaiveDate, Utc};
use lifeops_core::entities::Task;
use lifeops_core::filters::TaskQuery;
use lifeops_core::ids::PREFIX_TASK;
use lifeops_core::inputs::NewTask;
use lifeops_core::validate;

use crate::error::DatabaseError;
use crate::helpers::{
    get_bool, get_opt_date, get_opt_string, opt_date_value, parse_datetime,
    parse_optional_datetime, parse_enum, placeholders,
};
use crate::repos::tag::TagLink;
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str = "id, title, description, category, priority, frequency, \
     estimated_hours, due_date, is_completed, completed_at, created_at, updated_at";

/// Row without tags; callers fill `tags` from `task_tags`.
fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: parse_enum(&row.get::<String>(3)?)?,
        priority: parse_enum(&row.get::<String>(4)?)?,
        frequency: parse_enum(&row.get::<String>(5)?)?,
        estimated_hours: row.get(6)?,
        due_date: get_opt_date(row, 7)?,
        is_completed: get_bool(row, 8)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 9)?.as_deref())?,
        tags: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

impl LifeService {
    /// Create an open task with its tags.
    pub async fn create_task(&self, input: NewTask) -> Result<Task, DatabaseError> {
        validate::hours("estimated_hours", input.estimated_hours)?;
        self.ensure_tags_exist(&input.tags).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO tasks (id, title, description, category, priority, frequency, estimated_hours, due_date, is_completed, completed_at, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, NULL, ?9, ?10)",
            libsql::params![
                id.as_str(),
                input.title.as_str(),
                input.description.as_str(),
                input.category.as_str(),
                input.priority.as_str(),
                input.frequency.as_str(),
                input.estimated_hours,
                opt_date_value(input.due_date),
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )
        .await?;
        let tags = Self::replace_tag_links(&tx, TagLink::Task, &id, &input.tags).await?;
        tx.commit().await?;

        tracing::debug!(task_id = %id, "task created");

        Ok(Task {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            priority: input.priority,
            frequency: input.frequency,
            estimated_hours: input.estimated_hours,
            due_date: input.due_date,
            is_completed: false,
            completed_at: None,
            tags,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let mut task = row_to_task(&row)?;
        task.tags = self.tag_ids_for(TagLink::Task, id).await?;
        Ok(task)
    }

    pub async fn update_task(&self, id: &str, update: TaskUpdate) -> Result<Task, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref title) = update.title {
            clauses.push("title", title.clone());
        }
        if let Some(ref description) = update.description {
            clauses.push("description", description.clone());
        }
        if let Some(category) = update.category {
            clauses.push("category", category.as_str());
        }
        if let Some(priority) = update.priority {
            clauses.push("priority", priority.as_str());
        }
        if let Some(frequency) = update.frequency {
            clauses.push("frequency", frequency.as_str());
        }
        if let Some(hours) = update.estimated_hours {
            validate::hours("estimated_hours", hours)?;
            clauses.push("estimated_hours", hours);
        }
        if let Some(due_date) = update.due_date {
            clauses.push("due_date", opt_date_value(due_date));
        }

        if clauses.is_empty() && update.tags.is_none() {
            return self.get_task(id).await;
        }
        if let Some(ref tags) = update.tags {
            self.ensure_tags_exist(tags).await?;
        }

        let (sql, params) = clauses.into_update("tasks", id, Utc::now());
        let tx = self.db().conn().transaction().await?;
        let changed = tx.execute(&sql, libsql::params_from_iter(params)).await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        if let Some(ref tags) = update.tags {
            Self::replace_tag_links(&tx, TagLink::Task, id, tags).await?;
        }
        tx.commit().await?;

        tracing::debug!(task_id = id, "task updated");
        self.get_task(id).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(task_id = id, "task deleted");
        Ok(())
    }

    /// Mark done and stamp `completed_at`.
    pub async fn complete_task(&self, id: &str) -> Result<Task, DatabaseError> {
        self.set_task_completion(id, true).await
    }

    /// Mark not done and clear `completed_at`.
    pub async fn reopen_task(&self, id: &str) -> Result<Task, DatabaseError> {
        self.set_task_completion(id, false).await
    }

    async fn set_task_completion(&self, id: &str, done: bool) -> Result<Task, DatabaseError> {
        let now = Utc::now();
        let completed_at: libsql::Value = if done {
            now.to_rfc3339().into()
        } else {
            libsql::Value::Null
        };
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET is_completed = ?1, completed_at = ?2, updated_at = ?3 WHERE id = ?4",
                libsql::params![i64::from(done), completed_at, now.to_rfc3339(), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_task(id).await
    }

    /// Complete several tasks. Returns how many rows changed.
    pub async fn complete_tasks(&self, ids: &[String]) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let now = Utc::now().to_rfc3339();
        let mut params: Vec<libsql::Value> = vec![now.clone().into(), now.into()];
        params.extend(ids.iter().map(|id| libsql::Value::from(id.clone())));
        let sql = format!(
            "UPDATE tasks SET is_completed = 1, completed_at = ?1, updated_at = ?2 WHERE id IN ({})",
            placeholders(3, ids.len())
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        tracing::debug!(changed, "tasks completed");
        Ok(changed)
    }

    /// Delete several tasks. Returns how many rows were removed.
    pub async fn delete_tasks(&self, ids: &[String]) -> Result<u64, DatabaseError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let sql = format!(
            "DELETE FROM tasks WHERE id IN ({})",
            placeholders(1, ids.len())
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(ids.to_vec()))
            .await?;
        tracing::debug!(changed, "tasks deleted");
        Ok(changed)
    }

    /// Replace a task's tags.
    pub async fn set_task_tags(&self, id: &str, tag_ids: &[String]) -> Result<Task, DatabaseError> {
        self.update_task(
            id,
            TaskUpdate {
                tags: Some(tag_ids.to_vec()),
                ..TaskUpdate::default()
            },
        )
        .await
    }

    /// Every task with its tags, in due-date order (undated last).
    pub async fn all_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks ORDER BY due_date IS NULL, due_date, created_at"
                ),
                (),
            )
            .await?;
        let mut tags = self.tag_id_map(TagLink::Task).await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            let mut task = row_to_task(&row)?;
            task.tags = tags.remove(&task.id).unwrap_or_default();
            tasks.push(task);
        }
        Ok(tasks)
    }

    /// Task list after applying `query` relative to `today`.
    pub async fn list_tasks(
        &self,
        query: &TaskQuery,
        today: NaiveDate,
    ) -> Result<Vec<Task>, DatabaseError> {
        Ok(query.apply(self.all_tasks().await?, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{date, test_service};
    use crate::updates::task::TaskUpdateBuilder;
    use chrono::Duration;
    use lifeops_core::enums::{Priority, TaskCategory, TaskFrequency};
    use lifeops_core::filters::{Completion, DueWindow, SortOrder, TaskSortField};
    use pretty_assertions::assert_eq;

    fn titled(title: &str) -> NewTask {
        NewTask {
            title: title.into(),
            ..NewTask::default()
        }
    }

    #[tokio::test]
    async fn create_task_applies_defaults() {
        let svc = test_service().await;
        let task = svc.create_task(titled("Answer questions")).await.unwrap();

        assert!(task.id.starts_with("tsk-"));
        assert_eq!(task.category, TaskCategory::Other);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.frequency, TaskFrequency::Once);
        assert!((task.estimated_hours - 1.0).abs() < f64::EPSILON);
        assert!(!task.is_completed);
        assert!(task.completed_at.is_none());

        assert_eq!(svc.get_task(&task.id).await.unwrap(), task);
    }

    #[tokio::test]
    async fn create_task_with_unknown_tag_fails() {
        let svc = test_service().await;
        let result = svc
            .create_task(NewTask {
                title: "x".into(),
                tags: vec!["tag-nope".into()],
                ..NewTask::default()
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
        assert!(svc.all_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_task_rejects_negative_hours() {
        let svc = test_service().await;
        let result = svc
            .create_task(NewTask {
                title: "x".into(),
                estimated_hours: -1.0,
                ..NewTask::default()
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[tokio::test]
    async fn partial_update() {
        let svc = test_service().await;
        let task = svc
            .create_task(NewTask {
                title: "Draft".into(),
                description: "keep me".into(),
                due_date: Some(date(2024, 6, 20)),
                ..NewTask::default()
            })
            .await
            .unwrap();

        let updated = svc
            .update_task(
                &task.id,
                TaskUpdateBuilder::new()
                    .priority(Priority::High)
                    .due_date(None)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.due_date, None);
        assert_eq!(updated.title, "Draft");
        assert_eq!(updated.description, "keep me");
        assert!(updated.updated_at >= task.updated_at);
    }

    #[tokio::test]
    async fn complete_then_reopen() {
        let svc = test_service().await;
        let task = svc.create_task(titled("Ship")).await.unwrap();

        let done = svc.complete_task(&task.id).await.unwrap();
        assert!(done.is_completed);
        assert!(done.completed_at.is_some());

        let open = svc.reopen_task(&task.id).await.unwrap();
        assert!(!open.is_completed);
        assert!(open.completed_at.is_none());

        assert!(matches!(
            svc.complete_task("tsk-missing").await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn bulk_complete_and_delete() {
        let svc = test_service().await;
        let a = svc.create_task(titled("a")).await.unwrap();
        let b = svc.create_task(titled("b")).await.unwrap();
        let c = svc.create_task(titled("c")).await.unwrap();

        assert_eq!(svc.complete_tasks(&[]).await.unwrap(), 0);
        let changed = svc
            .complete_tasks(&[a.id.clone(), b.id.clone(), "tsk-missing".into()])
            .await
            .unwrap();
        assert_eq!(changed, 2);
        assert!(svc.get_task(&a.id).await.unwrap().is_completed);
        assert!(!svc.get_task(&c.id).await.unwrap().is_completed);

        assert_eq!(svc.delete_tasks(&[]).await.unwrap(), 0);
        assert_eq!(
            svc.delete_tasks(&[a.id.clone(), c.id.clone()]).await.unwrap(),
            2
        );
        let remaining: Vec<String> = svc
            .all_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(remaining, vec![b.id]);
    }

    #[tokio::test]
    async fn set_task_tags_replaces() {
        let svc = test_service().await;
        let x = svc.create_tag("x", None).await.unwrap();
        let y = svc.create_tag("y", None).await.unwrap();
        let task = svc
            .create_task(NewTask {
                title: "t".into(),
                tags: vec![x.id.clone()],
                ..NewTask::default()
            })
            .await
            .unwrap();
        assert_eq!(task.tags, vec![x.id.clone()]);

        let retagged = svc
            .set_task_tags(&task.id, &[y.id.clone(), y.id.clone()])
            .await
            .unwrap();
        assert_eq!(retagged.tags, vec![y.id.clone()]);

        let cleared = svc.set_task_tags(&task.id, &[]).await.unwrap();
        assert!(cleared.tags.is_empty());
    }

    #[tokio::test]
    async fn deleting_task_removes_its_tag_links() {
        let svc = test_service().await;
        let tag = svc.create_tag("x", None).await.unwrap();
        let task = svc
            .create_task(NewTask {
                title: "t".into(),
                tags: vec![tag.id.clone()],
                ..NewTask::default()
            })
            .await
            .unwrap();
        svc.delete_task(&task.id).await.unwrap();

        let stats = svc.tag_stats(&Default::default()).await.unwrap();
        assert_eq!(stats[0].task_count, 0);
    }

    #[tokio::test]
    async fn list_tasks_applies_query() {
        let svc = test_service().await;
        let today = date(2024, 6, 12);
        let tag = svc.create_tag("course", None).await.unwrap();

        let overdue = svc
            .create_task(NewTask {
                title: "Overdue edit".into(),
                due_date: Some(today - Duration::days(2)),
                priority: Priority::Low,
                tags: vec![tag.id.clone()],
                ..NewTask::default()
            })
            .await
            .unwrap();
        let soon = svc
            .create_task(NewTask {
                title: "Record intro".into(),
                due_date: Some(today + Duration::days(3)),
                priority: Priority::High,
                tags: vec![tag.id.clone()],
                ..NewTask::default()
            })
            .await
            .unwrap();
        let undated = svc.create_task(titled("Someday")).await.unwrap();
        let done = svc
            .create_task(NewTask {
                title: "Old done".into(),
                due_date: Some(today - Duration::days(5)),
                ..NewTask::default()
            })
            .await
            .unwrap();
        svc.complete_task(&done.id).await.unwrap();

        let ids = |tasks: Vec<Task>| tasks.into_iter().map(|t| t.id).collect::<Vec<_>>();

        let all = svc.list_tasks(&TaskQuery::default(), today).await.unwrap();
        assert_eq!(
            ids(all),
            vec![
                done.id.clone(),
                overdue.id.clone(),
                soon.id.clone(),
                undated.id.clone()
            ]
        );

        let query = TaskQuery {
            due: DueWindow::Overdue,
            ..TaskQuery::default()
        };
        assert_eq!(
            ids(svc.list_tasks(&query, today).await.unwrap()),
            vec![overdue.id.clone(), undated.id.clone()]
        );

        let query = TaskQuery {
            tags: vec![tag.id.clone()],
            completion: Completion::Incomplete,
            sort: TaskSortField::Priority,
            order: SortOrder::Asc,
            ..TaskQuery::default()
        };
        assert_eq!(
            ids(svc.list_tasks(&query, today).await.unwrap()),
            vec![soon.id.clone(), overdue.id.clone()]
        );

        let query = TaskQuery {
            search: Some("RECORD".into()),
            ..TaskQuery::default()
        };
        assert_eq!(ids(svc.list_tasks(&query, today).await.unwrap()), vec![soon.id]);
    }
}
