//! Strategy entries, dated strategy reviews, and the assembled document.

use chrono::Utc;
use lifeops_core::entities::{Strategy, StrategyReview};
use lifeops_core::enums::StrategyCategory;
use lifeops_core::ids::{PREFIX_STRATEGY, PREFIX_STRATEGY_REVIEW};
use lifeops_core::inputs::{NewStrategy, NewStrategyReview};
use lifeops_core::responses::StrategyDocument;

use crate::error::DatabaseError;
use crate::helpers::{date_text, parse_date, parse_datetime, parse_enum};
use crate::service::LifeService;
use crate::updates::SetClauses;
use crate::updates::strategy::StrategyUpdate;

const STRATEGY_COLS: &str = "id, title, content, category, created_at, updated_at";
const REVIEW_COLS: &str = "id, date, summary, next_strategy, created_at, updated_at";

fn row_to_strategy(row: &libsql::Row) -> Result<Strategy, DatabaseError> {
    Ok(Strategy {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        category: parse_enum(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

fn row_to_review(row: &libsql::Row) -> Result<StrategyReview, DatabaseError> {
    Ok(StrategyReview {
        id: row.get(0)?,
        date: parse_date(&row.get::<String>(1)?)?,
        summary: row.get(2)?,
        next_strategy: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl LifeService {
    pub async fn create_strategy(&self, input: NewStrategy) -> Result<Strategy, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_STRATEGY).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO strategies (id, title, content, category, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    input.title.as_str(),
                    input.content.as_str(),
                    input.category.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(strategy_id = %id, category = input.category.as_str(), "strategy created");

        Ok(Strategy {
            id,
            title: input.title,
            content: input.content,
            category: input.category,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_strategy(&self, id: &str) -> Result<Strategy, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {STRATEGY_COLS} FROM strategies WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_strategy(&row)
    }

    pub async fn update_strategy(
        &self,
        id: &str,
        update: StrategyUpdate,
    ) -> Result<Strategy, DatabaseError> {
        let mut clauses = SetClauses::new();
        if let Some(ref title) = update.title {
            clauses.push("title", title.clone());
        }
        if let Some(ref content) = update.content {
            clauses.push("content", content.clone());
        }
        if let Some(category) = update.category {
            clauses.push("category", category.as_str());
        }

        if clauses.is_empty() {
            return self.get_strategy(id).await;
        }

        let (sql, params) = clauses.into_update("strategies", id, Utc::now());
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_strategy(id).await
    }

    pub async fn delete_strategy(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM strategies WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Strategies newest first, optionally limited to one category.
    pub async fn list_strategies(
        &self,
        category: Option<StrategyCategory>,
    ) -> Result<Vec<Strategy>, DatabaseError> {
        let mut rows = match category {
            Some(category) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {STRATEGY_COLS} FROM strategies WHERE category = ?1
                             ORDER BY created_at DESC, rowid DESC"
                        ),
                        [category.as_str()],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {STRATEGY_COLS} FROM strategies ORDER BY created_at DESC, rowid DESC"
                        ),
                        (),
                    )
                    .await?
            }
        };
        let mut strategies = Vec::new();
        while let Some(row) = rows.next().await? {
            strategies.push(row_to_strategy(&row)?);
        }
        Ok(strategies)
    }

    pub async fn create_strategy_review(
        &self,
        input: NewStrategyReview,
    ) -> Result<StrategyReview, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_STRATEGY_REVIEW).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO strategy_reviews (id, date, summary, next_strategy, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    date_text(input.date),
                    input.summary.as_str(),
                    input.next_strategy.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(review_id = %id, date = %input.date, "strategy review created");

        Ok(StrategyReview {
            id,
            date: input.date,
            summary: input.summary,
            next_strategy: input.next_strategy,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn delete_strategy_review(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM strategy_reviews WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Reviews, most recent date first.
    pub async fn list_strategy_reviews(&self) -> Result<Vec<StrategyReview>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {REVIEW_COLS} FROM strategy_reviews ORDER BY date DESC, created_at DESC"
                ),
                (),
            )
            .await?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    pub async fn strategy_document(&self) -> Result<StrategyDocument, DatabaseError> {
        let strategies = self.list_strategies(None).await?;
        let reviews = self.list_strategy_reviews().await?;
        Ok(StrategyDocument::assemble(strategies, reviews))
    }
}
