//! Home screen aggregate.

use chrono::NaiveDate;
use lifeops_core::filters::{Completion, TodoFilter};
use lifeops_core::responses::{Dashboard, HabitStatus};

use crate::error::DatabaseError;
use crate::service::LifeService;

impl LifeService {
    /// Everything the home screen shows for `today`.
    pub async fn dashboard(&self, today: NaiveDate) -> Result<Dashboard, DatabaseError> {
        let kgi = self.get_kgi().await?;
        let vps = self.get_vps().await?;
        let check = self.get_habit_check(today).await?;
        let kpi_progress = self.kpi_progress(today).await?;
        let open_todos = self
            .list_todos(&TodoFilter {
                completion: Completion::Incomplete,
            })
            .await?;
        let weekly_plan = self.weekly_plan().await?;

        Ok(Dashboard {
            date: today,
            kgi,
            vps,
            habits: HabitStatus::for_day(today, check.as_ref()),
            kpi_progress,
            open_todos,
            weekly_plan,
        })
    }
}
