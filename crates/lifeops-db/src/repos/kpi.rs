//! KPI repository.

use chrono::Utc;
use lifeops_core::entities::Kpi;
use lifeops_core::ids::PREFIX_KPI;
use lifeops_core::inputs::NewKpi;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::kpi::KpiUpdate;

const SELECT_COLS: &str =
    "id, title, description, target_value, current_value, unit, period, created_at, updated_at";

fn row_to_kpi(row: &libsql::Row) -> Result<Kpi, DatabaseError> {
    Ok(Kpi {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        target_value: row.get(3)?,
        current_value: row.get(4)?,
        unit: row.get(5)?,
        period: parse_enum(&row.get::<String>(6)?)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl LifeService {
    pub async fn create_kpi(&self, input: NewKpi) -> Result<Kpi, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_KPI).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO kpis (id, title, description, target_value, current_value, unit, period, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    input.title.as_str(),
                    input.description.as_str(),
                    input.target_value,
                    input.current_value,
                    input.unit.as_str(),
                    input.period.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(kpi_id = %id, "kpi created");

        Ok(Kpi {
            id,
            title: input.title,
            description: input.description,
            target_value: input.target_value,
            current_value: input.current_value,
            unit: input.unit,
            period: input.period,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_kpi(&self, id: &str) -> Result<Kpi, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM kpis WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_kpi(&row)
    }

    pub async fn update_kpi(&self, id: &str, update: KpiUpdate) -> Result<Kpi, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref title) = update.title {
            clauses.push("title", title.clone());
        }
        if let Some(ref description) = update.description {
            clauses.push("description", description.clone());
        }
        if let Some(target) = update.target_value {
            clauses.push("target_value", target);
        }
        if let Some(current) = update.current_value {
            clauses.push("current_value", current);
        }
        if let Some(ref unit) = update.unit {
            clauses.push("unit", unit.clone());
        }
        if let Some(period) = update.period {
            clauses.push("period", period.as_str());
        }

        if clauses.is_empty() {
            return self.get_kpi(id).await;
        }

        let (sql, params) = clauses.into_update("kpis", id, Utc::now());
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_kpi(id).await
    }

    pub async fn delete_kpi(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM kpis WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// KPIs newest first.
    pub async fn list_kpis(&self) -> Result<Vec<Kpi>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM kpis ORDER BY created_at DESC, rowid DESC"),
                (),
            )
            .await?;
        let mut kpis = Vec::new();
        while let Some(row) = rows.next().await? {
            kpis.push(row_to_kpi(&row)?);
        }
        Ok(kpis)
    }
}
