//! Course repository: courses with their ordered modules.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lifeops_core::entities::{Course, CourseWithModules, Module};
use lifeops_core::enums::CourseStatus;
use lifeops_core::ids::{PREFIX_COURSE, PREFIX_MODULE};
use lifeops_core::inputs::{NewCourse, NewModule};

use crate::error::DatabaseError;
use crate::helpers::{
    bool_value, get_bool, get_opt_date, get_unsigned, opt_date_value, parse_datetime, parse_enum,
};
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::course::CourseUpdate;

const COURSE_COLS: &str =
    "id, title, description, status, price, genre, release_date, created_at, updated_at";

const MODULE_COLS: &str =
    "id, course_id, title, description, position, is_completed, created_at, updated_at";

fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        price: row.get(4)?,
        genre: row.get(5)?,
        release_date: get_opt_date(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn row_to_module(row: &libsql::Row) -> Result<Module, DatabaseError> {
    Ok(Module {
        id: row.get(0)?,
        course_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        position: get_unsigned(row, 4)?,
        is_completed: get_bool(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl LifeService {
    /// Insert `modules` for a course with positions `0..n`.
    async fn insert_modules(
        &self,
        conn: &libsql::Connection,
        course_id: &str,
        modules: &[NewModule],
        now: DateTime<Utc>,
    ) -> Result<Vec<Module>, DatabaseError> {
        let mut inserted = Vec::with_capacity(modules.len());
        for (position, input) in (0u32..).zip(modules) {
            let id = self.db().generate_id(PREFIX_MODULE).await?;
            conn.execute(
                "INSERT INTO modules (id, course_id, title, description, position, is_completed, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    id.as_str(),
                    course_id,
                    input.title.as_str(),
                    input.description.as_str(),
                    i64::from(position),
                    bool_value(input.is_completed),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
            inserted.push(Module {
                id,
                course_id: course_id.to_string(),
                title: input.title.clone(),
                description: input.description.clone(),
                position,
                is_completed: input.is_completed,
                created_at: now,
                updated_at: now,
            });
        }
        Ok(inserted)
    }

    /// Create a course and its modules in one transaction.
    pub async fn create_course(&self, input: NewCourse) -> Result<CourseWithModules, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COURSE).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO courses (id, title, description, status, price, genre, release_date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            libsql::params![
                id.as_str(),
                input.title.as_str(),
                input.description.as_str(),
                input.status.as_str(),
                input.price,
                input.genre.as_str(),
                opt_date_value(input.release_date),
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )
        .await?;
        let modules = self.insert_modules(&tx, &id, &input.modules, now).await?;
        tx.commit().await?;

        tracing::debug!(course_id = %id, modules = modules.len(), "course created");

        Ok(CourseWithModules {
            course: Course {
                id,
                title: input.title,
                description: input.description,
                status: input.status,
                price: input.price,
                genre: input.genre,
                release_date: input.release_date,
                created_at: now,
                updated_at: now,
            },
            modules,
        })
    }

    async fn get_course_row(&self, id: &str) -> Result<Course, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COURSE_COLS} FROM courses WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_course(&row)
    }

    /// Modules of a course in position order.
    pub async fn list_modules(&self, course_id: &str) -> Result<Vec<Module>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {MODULE_COLS} FROM modules WHERE course_id = ?1 ORDER BY position"),
                [course_id],
            )
            .await?;
        let mut modules = Vec::new();
        while let Some(row) = rows.next().await? {
            modules.push(row_to_module(&row)?);
        }
        Ok(modules)
    }

    pub async fn get_course(&self, id: &str) -> Result<CourseWithModules, DatabaseError> {
        let course = self.get_course_row(id).await?;
        let modules = self.list_modules(id).await?;
        Ok(CourseWithModules { course, modules })
    }

    /// All courses, newest first, each with its modules.
    pub async fn list_courses(&self) -> Result<Vec<CourseWithModules>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COURSE_COLS} FROM courses ORDER BY created_at DESC, rowid DESC"),
                (),
            )
            .await?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {MODULE_COLS} FROM modules ORDER BY course_id, position"),
                (),
            )
            .await?;
        let mut by_course: HashMap<String, Vec<Module>> = HashMap::new();
        while let Some(row) = rows.next().await? {
            let module = row_to_module(&row)?;
            by_course
                .entry(module.course_id.clone())
                .or_default()
                .push(module);
        }

        Ok(courses
            .into_iter()
            .map(|course| {
                let modules = by_course.remove(&course.id).unwrap_or_default();
                CourseWithModules { course, modules }
            })
            .collect())
    }

    /// Partial update. When `modules` is set the course's modules are replaced.
    pub async fn update_course(
        &self,
        id: &str,
        update: CourseUpdate,
    ) -> Result<CourseWithModules, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref title) = update.title {
            clauses.push("title", title.clone());
        }
        if let Some(ref description) = update.description {
            clauses.push("description", description.clone());
        }
        if let Some(status) = update.status {
            clauses.push("status", status.as_str());
        }
        if let Some(price) = update.price {
            clauses.push("price", price);
        }
        if let Some(ref genre) = update.genre {
            clauses.push("genre", genre.clone());
        }
        if let Some(release_date) = update.release_date {
            clauses.push("release_date", opt_date_value(release_date));
        }

        if clauses.is_empty() && update.modules.is_none() {
            return self.get_course(id).await;
        }

        let now = Utc::now();
        let (sql, params) = clauses.into_update("courses", id, now);
        let tx = self.db().conn().transaction().await?;
        let changed = tx.execute(&sql, libsql::params_from_iter(params)).await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        if let Some(ref modules) = update.modules {
            tx.execute("DELETE FROM modules WHERE course_id = ?1", [id])
                .await?;
            self.insert_modules(&tx, id, modules, now).await?;
        }
        tx.commit().await?;

        tracing::debug!(course_id = id, "course updated");
        self.get_course(id).await
    }

    /// Delete a course; its modules go with it.
    pub async fn delete_course(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM courses WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(course_id = id, "course deleted");
        Ok(())
    }

    /// Copy a course as `"<title> (copy)"`, reset to `not_started` with no
    /// release date and every module incomplete.
    pub async fn duplicate_course(&self, id: &str) -> Result<CourseWithModules, DatabaseError> {
        let source = self.get_course(id).await?;
        let modules = source
            .modules
            .iter()
            .map(|m| NewModule {
                title: m.title.clone(),
                description: m.description.clone(),
                is_completed: false,
            })
            .collect();
        self.create_course(NewCourse {
            title: format!("{} (copy)", source.course.title),
            description: source.course.description,
            status: CourseStatus::NotStarted,
            price: source.course.price,
            genre: source.course.genre,
            release_date: None,
            modules,
        })
        .await
    }

    pub async fn set_module_completed(
        &self,
        module_id: &str,
        is_completed: bool,
    ) -> Result<Module, DatabaseError> {
        let now = Utc::now();
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE modules SET is_completed = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![bool_value(is_completed), now.to_rfc3339(), module_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {MODULE_COLS} FROM modules WHERE id = ?1"),
                [module_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_module(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{date, test_service};
    use crate::updates::course::CourseUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn sample() -> NewCourse {
        NewCourse {
            title: "Rust basics".into(),
            description: "From zero to CLI".into(),
            status: CourseStatus::Recording,
            price: 9800,
            genre: "programming".into(),
            release_date: Some(date(2024, 9, 1)),
            modules: vec![
                NewModule::titled("Ownership"),
                NewModule::titled("Traits"),
                NewModule::titled("Async"),
            ],
        }
    }

    #[tokio::test]
    async fn create_course_roundtrip() {
        let svc = test_service().await;
        let created = svc.create_course(sample()).await.unwrap();

        assert!(created.course.id.starts_with("crs-"));
        assert_eq!(created.modules.len(), 3);

        let fetched = svc.get_course(&created.course.id).await.unwrap();
        assert_eq!(fetched.course.title, "Rust basics");
        assert_eq!(fetched.course.price, 9800);
        assert_eq!(fetched.course.status, CourseStatus::Recording);
        assert_eq!(fetched.course.release_date, Some(date(2024, 9, 1)));
        let titles: Vec<&str> = fetched.modules.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Ownership", "Traits", "Async"]);
        let positions: Vec<u32> = fetched.modules.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn get_missing_course_is_no_result() {
        let svc = test_service().await;
        assert!(matches!(
            svc.get_course("crs-missing").await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn list_courses_newest_first_with_modules() {
        let svc = test_service().await;
        let first = svc.create_course(sample()).await.unwrap();
        let second = svc
            .create_course(NewCourse {
                title: "Writing".into(),
                ..NewCourse::default()
            })
            .await
            .unwrap();

        let courses = svc.list_courses().await.unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course.id, second.course.id);
        assert!(courses[0].modules.is_empty());
        assert_eq!(courses[1].course.id, first.course.id);
        assert_eq!(courses[1].modules.len(), 3);
    }

    #[tokio::test]
    async fn partial_update_touches_only_given_fields() {
        let svc = test_service().await;
        let created = svc.create_course(sample()).await.unwrap();

        let update = CourseUpdateBuilder::new()
            .status(CourseStatus::Published)
            .release_date(None)
            .build();
        let updated = svc.update_course(&created.course.id, update).await.unwrap();

        assert_eq!(updated.course.status, CourseStatus::Published);
        assert_eq!(updated.course.release_date, None);
        assert_eq!(updated.course.title, "Rust basics");
        assert_eq!(updated.course.price, 9800);
        assert_eq!(updated.modules.len(), 3);
    }

    #[tokio::test]
    async fn update_replaces_modules() {
        let svc = test_service().await;
        let created = svc.create_course(sample()).await.unwrap();

        let update = CourseUpdateBuilder::new()
            .modules(vec![NewModule::titled("Intro"), NewModule::titled("Outro")])
            .build();
        let updated = svc.update_course(&created.course.id, update).await.unwrap();

        let titles: Vec<&str> = updated.modules.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Outro"]);
        assert_eq!(updated.modules[1].position, 1);
    }

    #[tokio::test]
    async fn empty_update_returns_current() {
        let svc = test_service().await;
        let created = svc.create_course(sample()).await.unwrap();
        let same = svc
            .update_course(&created.course.id, CourseUpdate::default())
            .await
            .unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn update_missing_course_is_no_result() {
        let svc = test_service().await;
        let update = CourseUpdateBuilder::new().title("x").build();
        assert!(matches!(
            svc.update_course("crs-missing", update).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn delete_course_removes_modules() {
        let svc = test_service().await;
        let created = svc.create_course(sample()).await.unwrap();
        svc.delete_course(&created.course.id).await.unwrap();

        assert!(svc.get_course(&created.course.id).await.is_err());
        assert!(svc.list_modules(&created.course.id).await.unwrap().is_empty());
        assert!(matches!(
            svc.delete_course(&created.course.id).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn duplicate_course_resets_progress() {
        let svc = test_service().await;
        let created = svc.create_course(sample()).await.unwrap();
        svc.set_module_completed(&created.modules[0].id, true)
            .await
            .unwrap();

        let copy = svc.duplicate_course(&created.course.id).await.unwrap();
        assert_ne!(copy.course.id, created.course.id);
        assert_eq!(copy.course.title, "Rust basics (copy)");
        assert_eq!(copy.course.status, CourseStatus::NotStarted);
        assert_eq!(copy.course.release_date, None);
        assert_eq!(copy.course.price, 9800);
        assert_eq!(copy.course.genre, "programming");
        assert_eq!(copy.modules.len(), 3);
        assert!(copy.modules.iter().all(|m| !m.is_completed));
        assert_eq!(copy.modules[2].title, "Async");
    }

    #[tokio::test]
    async fn module_completion_drives_progress() {
        let svc = test_service().await;
        let created = svc.create_course(sample()).await.unwrap();

        let module = svc
            .set_module_completed(&created.modules[1].id, true)
            .await
            .unwrap();
        assert!(module.is_completed);

        let fetched = svc.get_course(&created.course.id).await.unwrap();
        assert_eq!(fetched.progress_percent(), 33);

        assert!(matches!(
            svc.set_module_completed("mod-missing", true).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
