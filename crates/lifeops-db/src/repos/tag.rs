//! Tag repository: CRUD, usage statistics, and the task/journal join tables.

use std::collections::HashMap;

use chrono::Utc;
use lifeops_core::entities::{DEFAULT_TAG_COLOR, Tag};
use lifeops_core::filters::TagStatsQuery;
use lifeops_core::ids::PREFIX_TAG;
use lifeops_core::responses::TagStat;
use lifeops_core::validate;

use crate::error::DatabaseError;
use crate::helpers::{get_unsigned, parse_datetime, placeholders};
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::tag::TagUpdate;

const SELECT_COLS: &str = "id, name, color, created_at, updated_at";

fn row_to_tag(row: &libsql::Row) -> Result<Tag, DatabaseError> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

/// A join table linking an owner row to tags.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TagLink {
    Task,
    Journal,
}

impl TagLink {
    const fn table(self) -> &'static str {
        match self {
            Self::Task => "task_tags",
            Self::Journal => "journal_tags",
        }
    }

    const fn owner_column(self) -> &'static str {
        match self {
            Self::Task => "task_id",
            Self::Journal => "journal_id",
        }
    }
}

/// Sorted, de-duplicated copy of `ids`.
fn normalize_ids(ids: &[String]) -> Vec<String> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids.dedup();
    ids
}

impl LifeService {
    pub async fn create_tag(&self, name: &str, color: Option<&str>) -> Result<Tag, DatabaseError> {
        let name = validate::tag_name(name)?;
        let color = color.unwrap_or(DEFAULT_TAG_COLOR).to_string();
        validate::hex_color("color", &color)?;
        self.ensure_tag_name_free(&name, None).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TAG).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO tags (id, name, color, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    name.as_str(),
                    color.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(tag_id = %id, name = %name, "tag created");

        Ok(Tag {
            id,
            name,
            color,
            created_at: now,
            updated_at: now,
        })
    }

    async fn ensure_tag_name_free(
        &self,
        name: &str,
        except_id: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id FROM tags WHERE name = ?1 AND id != ?2",
                libsql::params![name, except_id.unwrap_or("")],
            )
            .await?;
        if rows.next().await?.is_some() {
            return Err(DatabaseError::Validation(format!(
                "tag '{name}' already exists"
            )));
        }
        Ok(())
    }

    pub async fn get_tag(&self, id: &str) -> Result<Tag, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tags WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_tag(&row)
    }

    /// All tags ordered by name.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tags ORDER BY name"), ())
            .await?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    pub async fn update_tag(&self, id: &str, update: TagUpdate) -> Result<Tag, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref name) = update.name {
            let name = validate::tag_name(name)?;
            self.ensure_tag_name_free(&name, Some(id)).await?;
            clauses.push("name", name);
        }
        if let Some(ref color) = update.color {
            validate::hex_color("color", color)?;
            clauses.push("color", color.clone());
        }

        if clauses.is_empty() {
            return self.get_tag(id).await;
        }

        let (sql, params) = clauses.into_update("tags", id, Utc::now());
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_tag(id).await
    }

    /// Delete a tag. Tasks and journals carrying it lose the tag.
    pub async fn delete_tag(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self.delete_tags(&[id.to_string()]).await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Delete several tags and their join rows in one transaction. Returns the
    /// number of tags removed.
    pub async fn delete_tags(&self, ids: &[String]) -> Result<u64, DatabaseError> {
        let ids = normalize_ids(ids);
        if ids.is_empty() {
            return Ok(0);
        }
        let in_list = placeholders(1, ids.len());

        let tx = self.db().conn().transaction().await?;
        for link in [TagLink::Task, TagLink::Journal] {
            tx.execute(
                &format!("DELETE FROM {} WHERE tag_id IN ({in_list})", link.table()),
                libsql::params_from_iter(ids.clone()),
            )
            .await?;
        }
        let deleted = tx
            .execute(
                &format!("DELETE FROM tags WHERE id IN ({in_list})"),
                libsql::params_from_iter(ids.clone()),
            )
            .await?;
        tx.commit().await?;

        tracing::debug!(deleted, "tags deleted");
        Ok(deleted)
    }

    /// Usage counts for every tag, filtered and sorted by `query`.
    pub async fn tag_stats(&self, query: &TagStatsQuery) -> Result<Vec<TagStat>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT t.id, t.name, t.color, t.created_at, t.updated_at,
                        (SELECT COUNT(*) FROM task_tags tt WHERE tt.tag_id = t.id),
                        (SELECT COUNT(*) FROM journal_tags jt WHERE jt.tag_id = t.id)
                 FROM tags t ORDER BY t.name",
                (),
            )
            .await?;
        let mut stats = Vec::new();
        while let Some(row) = rows.next().await? {
            let tag = row_to_tag(&row)?;
            stats.push(TagStat::new(
                tag,
                get_unsigned(&row, 5)?,
                get_unsigned(&row, 6)?,
            ));
        }
        Ok(query.apply(stats))
    }

    /// Fail with `Validation` unless every id names an existing tag.
    pub(crate) async fn ensure_tags_exist(&self, ids: &[String]) -> Result<(), DatabaseError> {
        let ids = normalize_ids(ids);
        if ids.is_empty() {
            return Ok(());
        }
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT COUNT(*) FROM tags WHERE id IN ({})",
                    placeholders(1, ids.len())
                ),
                libsql::params_from_iter(ids.clone()),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let found: usize = get_unsigned(&row, 0)?;
        if found != ids.len() {
            return Err(DatabaseError::Validation(format!(
                "unknown tag id in [{}]",
                ids.join(", ")
            )));
        }
        Ok(())
    }

    /// Replace the tags of one owner row. Runs on `conn` so callers can wrap
    /// it in their transaction.
    pub(crate) async fn replace_tag_links(
        conn: &libsql::Connection,
        link: TagLink,
        owner_id: &str,
        tag_ids: &[String],
    ) -> Result<Vec<String>, DatabaseError> {
        let tag_ids = normalize_ids(tag_ids);
        conn.execute(
            &format!(
                "DELETE FROM {} WHERE {} = ?1",
                link.table(),
                link.owner_column()
            ),
            [owner_id],
        )
        .await?;
        for tag_id in &tag_ids {
            conn.execute(
                &format!(
                    "INSERT OR IGNORE INTO {} ({}, tag_id) VALUES (?1, ?2)",
                    link.table(),
                    link.owner_column()
                ),
                libsql::params![owner_id, tag_id.as_str()],
            )
            .await?;
        }
        Ok(tag_ids)
    }

    /// Tag ids of one owner row, sorted.
    pub(crate) async fn tag_ids_for(
        &self,
        link: TagLink,
        owner_id: &str,
    ) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT tag_id FROM {} WHERE {} = ?1 ORDER BY tag_id",
                    link.table(),
                    link.owner_column()
                ),
                [owner_id],
            )
            .await?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<String>(0)?);
        }
        Ok(ids)
    }

    /// Tag ids of every owner row, keyed by owner id.
    pub(crate) async fn tag_id_map(
        &self,
        link: TagLink,
    ) -> Result<HashMap<String, Vec<String>>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {}, tag_id FROM {} ORDER BY tag_id",
                    link.owner_column(),
                    link.table()
                ),
                (),
            )
            .await?;
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        while let Some(row) = rows.next().await? {
            map.entry(row.get::<String>(0)?)
                .or_default()
                .push(row.get::<String>(1)?);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::tag::TagUpdateBuilder;
    use lifeops_core::filters::{SortOrder, TagSortField};
    use lifeops_core::inputs::{NewJournal, NewTask};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_tag_trims_and_defaults_color() {
        let svc = test_service().await;
        let tag = svc.create_tag("  english  ", None).await.unwrap();

        assert!(tag.id.starts_with("tag-"));
        assert_eq!(tag.name, "english");
        assert_eq!(tag.color, "#6B7280");
        assert_eq!(svc.get_tag(&tag.id).await.unwrap(), tag);
    }

    #[tokio::test]
    async fn create_tag_validates() {
        let svc = test_service().await;
        assert!(matches!(
            svc.create_tag("   ", None).await,
            Err(DatabaseError::Validation(_))
        ));
        assert!(matches!(
            svc.create_tag("x", Some("blue")).await,
            Err(DatabaseError::Validation(_))
        ));
        svc.create_tag("dup", None).await.unwrap();
        assert!(matches!(
            svc.create_tag(" dup", None).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn list_tags_by_name() {
        let svc = test_service().await;
        svc.create_tag("writing", None).await.unwrap();
        svc.create_tag("admin", None).await.unwrap();
        svc.create_tag("music", None).await.unwrap();

        let names: Vec<String> = svc
            .list_tags()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["admin", "music", "writing"]);
    }

    #[tokio::test]
    async fn update_tag_fields() {
        let svc = test_service().await;
        let tag = svc.create_tag("old", None).await.unwrap();
        let other = svc.create_tag("taken", None).await.unwrap();

        let updated = svc
            .update_tag(&tag.id, TagUpdateBuilder::new().color("#112233").build())
            .await
            .unwrap();
        assert_eq!(updated.name, "old");
        assert_eq!(updated.color, "#112233");

        let renamed = svc
            .update_tag(&tag.id, TagUpdateBuilder::new().name(" new ").build())
            .await
            .unwrap();
        assert_eq!(renamed.name, "new");

        assert!(matches!(
            svc.update_tag(&tag.id, TagUpdateBuilder::new().name(&other.name).build())
                .await,
            Err(DatabaseError::Validation(_))
        ));
        // Renaming to its own name is fine.
        assert!(
            svc.update_tag(&tag.id, TagUpdateBuilder::new().name("new").build())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn tag_stats_counts_and_sorts() {
        let svc = test_service().await;
        let work = svc.create_tag("work", None).await.unwrap();
        let life = svc.create_tag("life", None).await.unwrap();
        let idle = svc.create_tag("idle", None).await.unwrap();

        for _ in 0..2 {
            svc.create_task(NewTask {
                title: "t".into(),
                tags: vec![work.id.clone()],
                ..NewTask::default()
            })
            .await
            .unwrap();
        }
        svc.create_journal(NewJournal {
            title: "j".into(),
            tags: vec![work.id.clone(), life.id.clone()],
            ..NewJournal::default()
        })
        .await
        .unwrap();

        let stats = svc.tag_stats(&TagStatsQuery::default()).await.unwrap();
        let summary: Vec<(&str, u32, u32, u32)> = stats
            .iter()
            .map(|s| {
                (
                    s.tag.name.as_str(),
                    s.task_count,
                    s.journal_count,
                    s.total_count,
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![("work", 2, 1, 3), ("life", 0, 1, 1), ("idle", 0, 0, 0)]
        );

        let by_name = svc
            .tag_stats(&TagStatsQuery {
                search: Some("I".into()),
                sort: TagSortField::Name,
                order: SortOrder::Asc,
            })
            .await
            .unwrap();
        let names: Vec<&str> = by_name.iter().map(|s| s.tag.name.as_str()).collect();
        assert_eq!(names, vec!["idle", "life"]);
        assert_eq!(by_name[0].tag.id, idle.id);
    }

    #[tokio::test]
    async fn delete_tags_removes_join_rows() {
        let svc = test_service().await;
        let a = svc.create_tag("a", None).await.unwrap();
        let b = svc.create_tag("b", None).await.unwrap();
        let keep = svc.create_tag("keep", None).await.unwrap();

        let task = svc
            .create_task(NewTask {
                title: "tagged".into(),
                tags: vec![a.id.clone(), keep.id.clone()],
                ..NewTask::default()
            })
            .await
            .unwrap();
        let journal = svc
            .create_journal(NewJournal {
                title: "tagged".into(),
                tags: vec![b.id.clone()],
                ..NewJournal::default()
            })
            .await
            .unwrap();

        let deleted = svc
            .delete_tags(&[a.id.clone(), b.id.clone()])
            .await
            .unwrap();
        assert_eq!(deleted, 2);

        assert_eq!(svc.get_task(&task.id).await.unwrap().tags, vec![keep.id]);
        assert!(svc.get_journal(&journal.id).await.unwrap().tags.is_empty());
        assert_eq!(svc.list_tags().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_tags_empty_is_noop() {
        let svc = test_service().await;
        assert_eq!(svc.delete_tags(&[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_missing_tag_is_no_result() {
        let svc = test_service().await;
        assert!(matches!(
            svc.delete_tag("tag-missing").await,
            Err(DatabaseError::NoResult)
        ));
    }
}
