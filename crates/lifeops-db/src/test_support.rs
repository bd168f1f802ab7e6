//! Shared test utilities for lifeops-db unit tests.

pub(crate) mod helpers {
    use chrono::NaiveDate;

    use crate::LifeDb;
    use crate::service::LifeService;

    /// In-memory service with a fresh schema.
    pub async fn test_service() -> LifeService {
        let db = LifeDb::open_local(":memory:").await.unwrap();
        LifeService::from_db(db)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
