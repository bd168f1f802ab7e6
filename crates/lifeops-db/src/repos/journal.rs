//! Journal repository.

use chrono::Utc;
use lifeops_core::entities::Journal;
use lifeops_core::filters::JournalFilter;
use lifeops_core::ids::PREFIX_JOURNAL;
use lifeops_core::inputs::NewJournal;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::repos::tag::TagLink;
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::journal::JournalUpdate;

const SELECT_COLS: &str = "id, title, content, mood, created_at, updated_at";

fn row_to_journal(row: &libsql::Row) -> Result<Journal, DatabaseError> {
    Ok(Journal {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        mood: parse_enum(&row.get::<String>(3)?)?,
        tags: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl LifeService {
    pub async fn create_journal(&self, input: NewJournal) -> Result<Journal, DatabaseError> {
        self.ensure_tags_exist(&input.tags).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_JOURNAL).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO journals (id, title, content, mood, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            libsql::params![
                id.as_str(),
                input.title.as_str(),
                input.content.as_str(),
                input.mood.as_str(),
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )
        .await?;
        let tags = Self::replace_tag_links(&tx, TagLink::Journal, &id, &input.tags).await?;
        tx.commit().await?;

        tracing::debug!(journal_id = %id, "journal created");

        Ok(Journal {
            id,
            title: input.title,
            content: input.content,
            mood: input.mood,
            tags,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_journal(&self, id: &str) -> Result<Journal, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM journals WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let mut journal = row_to_journal(&row)?;
        journal.tags = self.tag_ids_for(TagLink::Journal, id).await?;
        Ok(journal)
    }

    pub async fn update_journal(
        &self,
        id: &str,
        update: JournalUpdate,
    ) -> Result<Journal, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref title) = update.title {
            clauses.push("title", title.clone());
        }
        if let Some(ref content) = update.content {
            clauses.push("content", content.clone());
        }
        if let Some(mood) = update.mood {
            clauses.push("mood", mood.as_str());
        }

        if clauses.is_empty() && update.tags.is_none() {
            return self.get_journal(id).await;
        }
        if let Some(ref tags) = update.tags {
            self.ensure_tags_exist(tags).await?;
        }

        let (sql, params) = clauses.into_update("journals", id, Utc::now());
        let tx = self.db().conn().transaction().await?;
        let changed = tx.execute(&sql, libsql::params_from_iter(params)).await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        if let Some(ref tags) = update.tags {
            Self::replace_tag_links(&tx, TagLink::Journal, id, tags).await?;
        }
        tx.commit().await?;

        self.get_journal(id).await
    }

    pub async fn delete_journal(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM journals WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(journal_id = id, "journal deleted");
        Ok(())
    }

    /// Entries newest first, narrowed by `filter`.
    pub async fn list_journals(&self, filter: &JournalFilter) -> Result<Vec<Journal>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM journals ORDER BY created_at DESC, rowid DESC"),
                (),
            )
            .await?;
        let mut tags = self.tag_id_map(TagLink::Journal).await?;
        let mut journals = Vec::new();
        while let Some(row) = rows.next().await? {
            let mut journal = row_to_journal(&row)?;
            journal.tags = tags.remove(&journal.id).unwrap_or_default();
            journals.push(journal);
        }
        Ok(filter.apply(journals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::journal::JournalUpdateBuilder;
    use lifeops_core::enums::Mood;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_journal_defaults_to_neutral() {
        let svc = test_service().await;
        let journal = svc
            .create_journal(NewJournal {
                title: "Monday".into(),
                content: "Slow start".into(),
                ..NewJournal::default()
            })
            .await
            .unwrap();

        assert!(journal.id.starts_with("jnl-"));
        assert_eq!(journal.mood, Mood::Neutral);
        assert_eq!(svc.get_journal(&journal.id).await.unwrap(), journal);
    }

    #[tokio::test]
    async fn update_replaces_tags_and_keeps_other_fields() {
        let svc = test_service().await;
        let a = svc.create_tag("a", None).await.unwrap();
        let b = svc.create_tag("b", None).await.unwrap();
        let journal = svc
            .create_journal(NewJournal {
                title: "Entry".into(),
                content: "Body".into(),
                mood: Mood::Good,
                tags: vec![a.id.clone()],
            })
            .await
            .unwrap();

        let updated = svc
            .update_journal(
                &journal.id,
                JournalUpdateBuilder::new()
                    .mood(Mood::Great)
                    .tags(vec![b.id.clone()])
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.mood, Mood::Great);
        assert_eq!(updated.tags, vec![b.id]);
        assert_eq!(updated.title, "Entry");
        assert_eq!(updated.content, "Body");
    }

    #[tokio::test]
    async fn list_journals_newest_first_with_filter() {
        let svc = test_service().await;
        let tag = svc.create_tag("rec", None).await.unwrap();
        let first = svc
            .create_journal(NewJournal {
                title: "Walk".into(),
                mood: Mood::Good,
                ..NewJournal::default()
            })
            .await
            .unwrap();
        let second = svc
            .create_journal(NewJournal {
                title: "Recording".into(),
                content: "Mic died".into(),
                mood: Mood::Bad,
                tags: vec![tag.id.clone()],
            })
            .await
            .unwrap();

        let all = svc.list_journals(&JournalFilter::default()).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
        assert_eq!(all[0].tags, vec![tag.id.clone()]);

        let bad = svc
            .list_journals(&JournalFilter {
                mood: Some(Mood::Bad),
                ..JournalFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(bad.len(), 1);

        let searched = svc
            .list_journals(&JournalFilter {
                search: Some("mic".into()),
                ..JournalFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(searched[0].id, second.id);

        let tagged = svc
            .list_journals(&JournalFilter {
                tags: vec![tag.id],
                ..JournalFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(tagged.len(), 1);
    }

    #[tokio::test]
    async fn delete_journal() {
        let svc = test_service().await;
        let journal = svc
            .create_journal(NewJournal {
                title: "Gone".into(),
                ..NewJournal::default()
            })
            .await
            .unwrap();
        svc.delete_journal(&journal.id).await.unwrap();
        assert!(matches!(
            svc.get_journal(&journal.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(matches!(
            svc.delete_journal(&journal.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
