//! `meta_info` key/value store holding the KGI targets and the value
//! proposition statement as JSON documents.

use chrono::Utc;
use lifeops_core::entities::{KgiInfo, MetaInfo, VpsInfo};
use lifeops_core::enums::MetaKey;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::LifeService;

impl LifeService {
    pub async fn get_meta(&self, key: MetaKey) -> Result<Option<MetaInfo>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT key, value, updated_at FROM meta_info WHERE key = ?1",
                [key.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(MetaInfo {
                key: parse_enum(&row.get::<String>(0)?)?,
                value: row.get(1)?,
                updated_at: parse_datetime(&row.get::<String>(2)?)?,
            })),
            None => Ok(None),
        }
    }

    async fn read_meta<T: DeserializeOwned + Default>(
        &self,
        key: MetaKey,
    ) -> Result<T, DatabaseError> {
        match self.get_meta(key).await? {
            Some(meta) => Ok(serde_json::from_str(&meta.value)?),
            None => Ok(T::default()),
        }
    }

    async fn write_meta<T: Serialize + Sync>(
        &self,
        key: MetaKey,
        value: &T,
    ) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(value)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO meta_info (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                libsql::params![key.as_str(), json, Utc::now().to_rfc3339()],
            )
            .await?;
        tracing::debug!(key = key.as_str(), "meta info saved");
        Ok(())
    }

    /// KGI targets; defaults when never saved.
    pub async fn get_kgi(&self) -> Result<KgiInfo, DatabaseError> {
        self.read_meta(MetaKey::Kgi).await
    }

    pub async fn set_kgi(&self, kgi: &KgiInfo) -> Result<KgiInfo, DatabaseError> {
        if !kgi.target_income.is_finite() || kgi.target_income < 0.0 {
            return Err(DatabaseError::Validation(
                "target_income must be a non-negative number".into(),
            ));
        }
        lifeops_core::validate::hours("target_work_hours", kgi.target_work_hours)?;
        self.write_meta(MetaKey::Kgi, kgi).await?;
        Ok(kgi.clone())
    }

    /// Value proposition; empty when never saved.
    pub async fn get_vps(&self) -> Result<VpsInfo, DatabaseError> {
        self.read_meta(MetaKey::Vps).await
    }

    pub async fn set_vps(&self, vps: &VpsInfo) -> Result<VpsInfo, DatabaseError> {
        self.write_meta(MetaKey::Vps, vps).await?;
        Ok(vps.clone())
    }
}
