//! Daily habit checks and the weekly habit plan.

use chrono::{Days, NaiveDate, Utc};
use lifeops_core::entities::{HabitCheck, HabitPlan};
use lifeops_core::enums::Habit;
use lifeops_core::ids::{PREFIX_HABIT_CHECK, PREFIX_HABIT_PLAN};
use lifeops_core::responses::WeeklyPlan;
use lifeops_core::validate;

use crate::error::DatabaseError;
use crate::helpers::{bool_value, date_text, get_bool, get_unsigned, parse_date, parse_datetime};
use crate::service::LifeService;

const CHECK_COLS: &str = "id, date, english_study, exercise, created_at, updated_at";
const PLAN_COLS: &str = "id, day_of_week, activities, hours, created_at, updated_at";

fn row_to_check(row: &libsql::Row) -> Result<HabitCheck, DatabaseError> {
    Ok(HabitCheck {
        id: row.get(0)?,
        date: parse_date(&row.get::<String>(1)?)?,
        english_study: get_bool(row, 2)?,
        exercise: get_bool(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

fn row_to_plan(row: &libsql::Row) -> Result<HabitPlan, DatabaseError> {
    Ok(HabitPlan {
        id: row.get(0)?,
        day_of_week: get_unsigned(row, 1)?,
        activities: row.get(2)?,
        hours: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl LifeService {
    pub async fn get_habit_check(
        &self,
        date: NaiveDate,
    ) -> Result<Option<HabitCheck>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {CHECK_COLS} FROM habit_checks WHERE date = ?1"),
                [date_text(date)],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_check(&row)?)),
            None => Ok(None),
        }
    }

    /// Set one habit for `date`, creating the day's row when it is missing.
    pub async fn set_habit(
        &self,
        date: NaiveDate,
        habit: Habit,
        value: bool,
    ) -> Result<HabitCheck, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_HABIT_CHECK).await?;
        let column = habit.as_str();
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO habit_checks (id, date, {column}, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4)
                     ON CONFLICT (date) DO UPDATE SET
                         {column} = excluded.{column},
                         updated_at = excluded.updated_at"
                ),
                libsql::params![id.as_str(), date_text(date), bool_value(value), now.to_rfc3339()],
            )
            .await?;
        tracing::debug!(%date, habit = column, value, "habit set");

        self.get_habit_check(date)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Flip one habit for `date`. An unchecked day becomes checked.
    pub async fn toggle_habit(
        &self,
        date: NaiveDate,
        habit: Habit,
    ) -> Result<HabitCheck, DatabaseError> {
        let current = self
            .get_habit_check(date)
            .await?
            .is_some_and(|c| c.is_checked(habit));
        self.set_habit(date, habit, !current).await
    }

    /// Checks between `from` and `to` inclusive, oldest first.
    pub async fn list_habit_checks(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<HabitCheck>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {CHECK_COLS} FROM habit_checks WHERE date BETWEEN ?1 AND ?2 ORDER BY date"
                ),
                libsql::params![date_text(from), date_text(to)],
            )
            .await?;
        let mut checks = Vec::new();
        while let Some(row) = rows.next().await? {
            checks.push(row_to_check(&row)?);
        }
        Ok(checks)
    }

    /// Consecutive checked days ending today. An unchecked today does not
    /// break a streak that ran through yesterday.
    pub async fn habit_streak(&self, habit: Habit, today: NaiveDate) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT date FROM habit_checks WHERE {} = 1 AND date <= ?1 ORDER BY date DESC",
                    habit.as_str()
                ),
                [date_text(today)],
            )
            .await?;

        let mut expected = today;
        let mut streak = 0u32;
        while let Some(row) = rows.next().await? {
            let date = parse_date(&row.get::<String>(0)?)?;
            if streak == 0 && date != today {
                // Allow the streak to start yesterday.
                expected = today.checked_sub_days(Days::new(1)).unwrap_or(today);
            }
            if date != expected {
                break;
            }
            streak += 1;
            match expected.checked_sub_days(Days::new(1)) {
                Some(prev) => expected = prev,
                None => break,
            }
        }
        Ok(streak)
    }

    /// Insert or overwrite the plan for a weekday (0 = Sunday).
    pub async fn save_habit_plan(
        &self,
        day_of_week: u8,
        activities: &str,
        hours: f64,
    ) -> Result<HabitPlan, DatabaseError> {
        validate::day_of_week(day_of_week)?;
        validate::hours("hours", hours)?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_HABIT_PLAN).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO habit_plans (id, day_of_week, activities, hours, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                 ON CONFLICT (day_of_week) DO UPDATE SET
                     activities = excluded.activities,
                     hours = excluded.hours,
                     updated_at = excluded.updated_at",
                libsql::params![
                    id.as_str(),
                    i64::from(day_of_week),
                    activities,
                    hours,
                    now.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(day_of_week, hours, "habit plan saved");

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PLAN_COLS} FROM habit_plans WHERE day_of_week = ?1"),
                [i64::from(day_of_week)],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_plan(&row)
    }

    pub async fn delete_habit_plan(&self, day_of_week: u8) -> Result<(), DatabaseError> {
        validate::day_of_week(day_of_week)?;
        let changed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM habit_plans WHERE day_of_week = ?1",
                [i64::from(day_of_week)],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Saved plans, Sunday first.
    pub async fn list_habit_plans(&self) -> Result<Vec<HabitPlan>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PLAN_COLS} FROM habit_plans ORDER BY day_of_week"),
                (),
            )
            .await?;
        let mut plans = Vec::new();
        while let Some(row) = rows.next().await? {
            plans.push(row_to_plan(&row)?);
        }
        Ok(plans)
    }

    pub async fn weekly_plan(&self) -> Result<WeeklyPlan, DatabaseError> {
        Ok(WeeklyPlan::from_plans(self.list_habit_plans().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{date, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn toggle_creates_then_flips() {
        let svc = test_service().await;
        let day = date(2024, 6, 12);
        assert!(svc.get_habit_check(day).await.unwrap().is_none());

        let check = svc.toggle_habit(day, Habit::Exercise).await.unwrap();
        assert!(check.id.starts_with("hab-"));
        assert!(check.exercise);
        assert!(!check.english_study);

        let check2 = svc.toggle_habit(day, Habit::EnglishStudy).await.unwrap();
        assert_eq!(check2.id, check.id);
        assert!(check2.exercise);
        assert!(check2.english_study);

        let check3 = svc.toggle_habit(day, Habit::Exercise).await.unwrap();
        assert!(!check3.exercise);
        assert!(check3.english_study);
    }

    #[tokio::test]
    async fn set_is_idempotent() {
        let svc = test_service().await;
        let day = date(2024, 6, 12);
        svc.set_habit(day, Habit::EnglishStudy, true).await.unwrap();
        let check = svc.set_habit(day, Habit::EnglishStudy, true).await.unwrap();
        assert!(check.english_study);
    }

    #[tokio::test]
    async fn list_range_is_inclusive() {
        let svc = test_service().await;
        for d in [9, 10, 14, 15, 16] {
            svc.set_habit(date(2024, 6, d), Habit::Exercise, true)
                .await
                .unwrap();
        }
        let dates: Vec<NaiveDate> = svc
            .list_habit_checks(date(2024, 6, 10), date(2024, 6, 15))
            .await
            .unwrap()
            .iter()
            .map(|c| c.date)
            .collect();
        assert_eq!(
            dates,
            vec![date(2024, 6, 10), date(2024, 6, 14), date(2024, 6, 15)]
        );
    }

    #[tokio::test]
    async fn streak_counts_back_from_today_or_yesterday() {
        let svc = test_service().await;
        for d in [8, 10, 11, 12] {
            svc.set_habit(date(2024, 6, d), Habit::Exercise, true)
                .await
                .unwrap();
        }
        assert_eq!(
            svc.habit_streak(Habit::Exercise, date(2024, 6, 12))
                .await
                .unwrap(),
            3
        );
        assert_eq!(
            svc.habit_streak(Habit::Exercise, date(2024, 6, 13))
                .await
                .unwrap(),
            3
        );
        assert_eq!(
            svc.habit_streak(Habit::Exercise, date(2024, 6, 14))
                .await
                .unwrap(),
            0
        );
        assert_eq!(
            svc.habit_streak(Habit::EnglishStudy, date(2024, 6, 12))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn plan_upserts_per_weekday() {
        let svc = test_service().await;
        let first = svc.save_habit_plan(1, "English", 1.0).await.unwrap();
        let second = svc.save_habit_plan(1, "English + gym", 2.5).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.activities, "English + gym");
        assert_eq!(svc.list_habit_plans().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn plan_validates_day_and_hours() {
        let svc = test_service().await;
        assert!(matches!(
            svc.save_habit_plan(7, "x", 1.0).await,
            Err(DatabaseError::Validation(_))
        ));
        assert!(matches!(
            svc.save_habit_plan(2, "x", -1.0).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn weekly_plan_fills_seven_days() {
        let svc = test_service().await;
        svc.save_habit_plan(0, "rest", 0.5).await.unwrap();
        svc.save_habit_plan(6, "deep work", 4.0).await.unwrap();

        let week = svc.weekly_plan().await.unwrap();
        assert_eq!(week.days.len(), 7);
        assert!(week.days[0].plan.is_some());
        assert!(week.days[3].plan.is_none());
        assert!((week.total_hours - 4.5).abs() < f64::EPSILON);

        svc.delete_habit_plan(0).await.unwrap();
        assert!(matches!(
            svc.delete_habit_plan(0).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
