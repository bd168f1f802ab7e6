//! Monthly KPI records, quarterly KPI targets, and the progress report that
//! compares the two.

use chrono::{Datelike, NaiveDate, Utc};
use lifeops_core::calendar::quarter_of;
use lifeops_core::entities::{KpiMilestone, KpiRecord};
use lifeops_core::ids::{PREFIX_KPI_MILESTONE, PREFIX_KPI_RECORD};
use lifeops_core::inputs::{KpiMilestoneValues, KpiRecordValues};
use lifeops_core::responses::{KpiMetric, KpiProgressLine, KpiProgressReport};
use lifeops_core::validate;

use crate::error::DatabaseError;
use crate::helpers::{get_unsigned, parse_datetime};
use crate::service::LifeService;

const RECORD_COLS: &str =
    "id, year, month, income, work_hours, course_sales, subscription, created_at, updated_at";

const MILESTONE_COLS: &str = "id, year, quarter, target_income, target_work_hours, \
     target_course_sales, target_subscription, notes, created_at, updated_at";

fn get_year(row: &libsql::Row, idx: i32) -> Result<i32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    i32::try_from(raw).map_err(|_| DatabaseError::Query(format!("Year {raw} out of range")))
}

fn row_to_record(row: &libsql::Row) -> Result<KpiRecord, DatabaseError> {
    Ok(KpiRecord {
        id: row.get(0)?,
        year: get_year(row, 1)?,
        month: get_unsigned(row, 2)?,
        income: row.get(3)?,
        work_hours: row.get(4)?,
        course_sales: row.get(5)?,
        subscription: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn row_to_milestone(row: &libsql::Row) -> Result<KpiMilestone, DatabaseError> {
    Ok(KpiMilestone {
        id: row.get(0)?,
        year: get_year(row, 1)?,
        quarter: get_unsigned(row, 2)?,
        target_income: row.get(3)?,
        target_work_hours: row.get(4)?,
        target_course_sales: row.get(5)?,
        target_subscription: row.get(6)?,
        notes: row.get(7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(value: i64) -> f64 {
    value as f64
}

impl LifeService {
    /// Insert or overwrite the actuals for `(year, month)`.
    pub async fn save_kpi_record(
        &self,
        year: i32,
        month: u32,
        values: KpiRecordValues,
    ) -> Result<KpiRecord, DatabaseError> {
        validate::month(month)?;
        validate::hours("work_hours", values.work_hours)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_KPI_RECORD).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO kpi_records (id, year, month, income, work_hours, course_sales, subscription, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
                 ON CONFLICT (year, month) DO UPDATE SET
                     income = excluded.income,
                     work_hours = excluded.work_hours,
                     course_sales = excluded.course_sales,
                     subscription = excluded.subscription,
                     updated_at = excluded.updated_at",
                libsql::params![
                    id.as_str(),
                    i64::from(year),
                    i64::from(month),
                    values.income,
                    values.work_hours,
                    values.course_sales,
                    values.subscription,
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(year, month, "kpi record saved");

        self.get_kpi_record(year, month)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    pub async fn get_kpi_record(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Option<KpiRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RECORD_COLS} FROM kpi_records WHERE year = ?1 AND month = ?2"),
                libsql::params![i64::from(year), i64::from(month)],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    /// A year's records ordered by month.
    pub async fn list_kpi_records(&self, year: i32) -> Result<Vec<KpiRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RECORD_COLS} FROM kpi_records WHERE year = ?1 ORDER BY month"),
                [i64::from(year)],
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    /// Insert or overwrite the targets for `(year, quarter)`.
    pub async fn save_kpi_milestone(
        &self,
        year: i32,
        quarter: u32,
        values: KpiMilestoneValues,
    ) -> Result<KpiMilestone, DatabaseError> {
        validate::quarter(quarter)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_KPI_MILESTONE).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO kpi_milestones (id, year, quarter, target_income, target_work_hours, target_course_sales, target_subscription, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
                 ON CONFLICT (year, quarter) DO UPDATE SET
                     target_income = excluded.target_income,
                     target_work_hours = excluded.target_work_hours,
                     target_course_sales = excluded.target_course_sales,
                     target_subscription = excluded.target_subscription,
                     notes = excluded.notes,
                     updated_at = excluded.updated_at",
                libsql::params![
                    id.as_str(),
                    i64::from(year),
                    i64::from(quarter),
                    values.target_income,
                    values.target_work_hours,
                    values.target_course_sales,
                    values.target_subscription,
                    values.notes.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(year, quarter, "kpi milestone saved");

        self.get_kpi_milestone(year, quarter)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    pub async fn get_kpi_milestone(
        &self,
        year: i32,
        quarter: u32,
    ) -> Result<Option<KpiMilestone>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {MILESTONE_COLS} FROM kpi_milestones WHERE year = ?1 AND quarter = ?2"
                ),
                libsql::params![i64::from(year), i64::from(quarter)],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_milestone(&row)?)),
            None => Ok(None),
        }
    }

    /// A year's quarterly targets ordered by quarter.
    pub async fn list_kpi_milestones(
        &self,
        year: i32,
    ) -> Result<Vec<KpiMilestone>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {MILESTONE_COLS} FROM kpi_milestones WHERE year = ?1 ORDER BY quarter"
                ),
                [i64::from(year)],
            )
            .await?;
        let mut milestones = Vec::new();
        while let Some(row) = rows.next().await? {
            milestones.push(row_to_milestone(&row)?);
        }
        Ok(milestones)
    }

    /// This month's actuals against this quarter's targets. Missing rows count
    /// as zero.
    pub async fn kpi_progress(&self, today: NaiveDate) -> Result<KpiProgressReport, DatabaseError> {
        let year = today.year();
        let month = today.month();
        let quarter = quarter_of(month);

        let record = self.get_kpi_record(year, month).await?;
        let target = self.get_kpi_milestone(year, quarter).await?;

        let lines = KpiMetric::ALL
            .iter()
            .map(|&metric| {
                let current = record.as_ref().map_or(0.0, |r| match metric {
                    KpiMetric::Income => r.income,
                    KpiMetric::WorkHours => r.work_hours,
                    KpiMetric::CourseSales => as_f64(r.course_sales),
                    KpiMetric::Subscription => as_f64(r.subscription),
                });
                let goal = target.as_ref().map_or(0.0, |t| match metric {
                    KpiMetric::Income => t.target_income,
                    KpiMetric::WorkHours => t.target_work_hours,
                    KpiMetric::CourseSales => as_f64(t.target_course_sales),
                    KpiMetric::Subscription => as_f64(t.target_subscription),
                });
                KpiProgressLine::new(metric, current, goal)
            })
            .collect();

        Ok(KpiProgressReport {
            year,
            month,
            quarter,
            lines,
        })
    }
}
