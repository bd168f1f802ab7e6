//! Milestone repository.

use chrono::Utc;
use lifeops_core::entities::Milestone;
use lifeops_core::filters::MilestoneFilter;
use lifeops_core::ids::PREFIX_MILESTONE;
use lifeops_core::inputs::NewMilestone;
use lifeops_core::validate;

use crate::error::DatabaseError;
use crate::helpers::{date_text, get_unsigned, parse_date, parse_datetime, parse_enum};
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::milestone::MilestoneUpdate;

const SELECT_COLS: &str = "id, title, description, target_date, status, priority, progress, created_at, updated_at";

fn row_to_milestone(row: &libsql::Row) -> Result<Milestone, DatabaseError> {
    Ok(Milestone {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        target_date: parse_date(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        priority: parse_enum(&row.get::<String>(5)?)?,
        progress: get_unsigned(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl LifeService {
    pub async fn create_milestone(&self, input: NewMilestone) -> Result<Milestone, DatabaseError> {
        validate::progress(input.progress)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MILESTONE).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO milestones (id, title, description, target_date, status, priority, progress, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    input.title.as_str(),
                    input.description.as_str(),
                    date_text(input.target_date),
                    input.status.as_str(),
                    input.priority.as_str(),
                    i64::from(input.progress),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(milestone_id = %id, "milestone created");

        Ok(Milestone {
            id,
            title: input.title,
            description: input.description,
            target_date: input.target_date,
            status: input.status,
            priority: input.priority,
            progress: input.progress,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_milestone(&self, id: &str) -> Result<Milestone, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM milestones WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_milestone(&row)
    }

    pub async fn update_milestone(
        &self,
        id: &str,
        update: MilestoneUpdate,
    ) -> Result<Milestone, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref title) = update.title {
            clauses.push("title", title.clone());
        }
        if let Some(ref description) = update.description {
            clauses.push("description", description.clone());
        }
        if let Some(target_date) = update.target_date {
            clauses.push("target_date", date_text(target_date));
        }
        if let Some(status) = update.status {
            clauses.push("status", status.as_str());
        }
        if let Some(priority) = update.priority {
            clauses.push("priority", priority.as_str());
        }
        if let Some(progress) = update.progress {
            validate::progress(progress)?;
            clauses.push("progress", i64::from(progress));
        }

        if clauses.is_empty() {
            return self.get_milestone(id).await;
        }

        let (sql, params) = clauses.into_update("milestones", id, Utc::now());
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_milestone(id).await
    }

    pub async fn delete_milestone(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM milestones WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Milestones by target date, soonest first.
    pub async fn list_milestones(
        &self,
        filter: &MilestoneFilter,
    ) -> Result<Vec<Milestone>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM milestones ORDER BY target_date ASC, created_at ASC"
                ),
                (),
            )
            .await?;
        let mut milestones = Vec::new();
        while let Some(row) = rows.next().await? {
            let milestone = row_to_milestone(&row)?;
            if filter.matches(&milestone) {
                milestones.push(milestone);
            }
        }
        Ok(milestones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{date, test_service};
    use crate::updates::milestone::MilestoneUpdateBuilder;
    use lifeops_core::enums::{MilestoneStatus, Priority};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_get_roundtrip() {
        let svc = test_service().await;
        let m = svc
            .create_milestone(NewMilestone::new("Launch course", date(2024, 9, 1)))
            .await
            .unwrap();
        assert!(m.id.starts_with("mil-"));
        assert_eq!(svc.get_milestone(&m.id).await.unwrap(), m);
    }

    #[tokio::test]
    async fn progress_over_100_is_rejected() {
        let svc = test_service().await;
        let mut input = NewMilestone::new("Too far", date(2024, 9, 1));
        input.progress = 101;
        assert!(matches!(
            svc.create_milestone(input).await,
            Err(DatabaseError::Validation(_))
        ));

        let m = svc
            .create_milestone(NewMilestone::new("Ok", date(2024, 9, 1)))
            .await
            .unwrap();
        assert!(matches!(
            svc.update_milestone(&m.id, MilestoneUpdateBuilder::new().progress(150).build())
                .await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_status_and_progress() {
        let svc = test_service().await;
        let m = svc
            .create_milestone(NewMilestone::new("Record module 1", date(2024, 7, 1)))
            .await
            .unwrap();
        let updated = svc
            .update_milestone(
                &m.id,
                MilestoneUpdateBuilder::new()
                    .status(MilestoneStatus::InProgress)
                    .progress(40)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.status, MilestoneStatus::InProgress);
        assert_eq!(updated.progress, 40);
        assert_eq!(updated.title, "Record module 1");
    }

    #[tokio::test]
    async fn list_sorted_by_target_date_and_filtered() {
        let svc = test_service().await;
        let late = svc
            .create_milestone(NewMilestone::new("late", date(2024, 12, 1)))
            .await
            .unwrap();
        let mut urgent = NewMilestone::new("early", date(2024, 3, 1));
        urgent.priority = Priority::High;
        let early = svc.create_milestone(urgent).await.unwrap();

        let all = svc
            .list_milestones(&MilestoneFilter::default())
            .await
            .unwrap();
        let ids: Vec<&str> = all.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec![early.id.as_str(), late.id.as_str()]);

        let high = svc
            .list_milestones(&MilestoneFilter {
                priority: Some(Priority::High),
                ..MilestoneFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].id, early.id);

        svc.delete_milestone(&late.id).await.unwrap();
        assert!(matches!(
            svc.get_milestone(&late.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
