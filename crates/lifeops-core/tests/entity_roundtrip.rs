//! Serde roundtrip and JsonSchema validation for stored and aggregate types.

use chrono::{NaiveDate, Utc};
use lifeops_core::entities::*;
use lifeops_core::enums::*;
use lifeops_core::inputs::*;
use lifeops_core::responses::*;
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

roundtrip_and_validate!(
    course_with_modules_roundtrip,
    CourseWithModules,
    CourseWithModules {
        course: Course {
            id: "crs-a3f8b2c1".into(),
            title: "Rust for web developers".into(),
            description: "Ownership without tears".into(),
            status: CourseStatus::Recording,
            price: 12800,
            genre: "programming".into(),
            release_date: Some(date(2024, 9, 1)),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        },
        modules: vec![Module {
            id: "mod-00000001".into(),
            course_id: "crs-a3f8b2c1".into(),
            title: "Borrowing".into(),
            description: String::new(),
            position: 0,
            is_completed: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }],
    }
);

roundtrip_and_validate!(
    task_roundtrip,
    Task,
    Task {
        id: "tsk-b7c1d2e3".into(),
        title: "Edit chapter 2".into(),
        description: "Cut intro to under a minute".into(),
        category: TaskCategory::Course,
        priority: Priority::High,
        frequency: TaskFrequency::Once,
        estimated_hours: 2.5,
        due_date: Some(date(2024, 6, 14)),
        is_completed: true,
        completed_at: Some(Utc::now()),
        tags: vec!["tag-11111111".into()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    kpi_record_roundtrip,
    KpiRecord,
    KpiRecord {
        id: "kpr-00c0ffee".into(),
        year: 2024,
        month: 6,
        income: 85.5,
        work_hours: 3.5,
        course_sales: 12,
        subscription: 40,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    milestone_roundtrip,
    Milestone,
    Milestone {
        id: "mil-12345678".into(),
        title: "Publish second course".into(),
        description: String::new(),
        target_date: date(2024, 12, 31),
        status: MilestoneStatus::InProgress,
        priority: Priority::Medium,
        progress: 40,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    journal_roundtrip,
    Journal,
    Journal {
        id: "jnl-deadbeef".into(),
        title: "Good recording day".into(),
        content: "Three takes, all usable.".into(),
        mood: Mood::Great,
        tags: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    habit_check_roundtrip,
    HabitCheck,
    HabitCheck {
        id: "hab-0a0b0c0d".into(),
        date: date(2024, 6, 12),
        english_study: true,
        exercise: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(user_settings_roundtrip, UserSettings, UserSettings::default());

roundtrip_and_validate!(kgi_roundtrip, KgiInfo, KgiInfo::default());

roundtrip_and_validate!(
    new_task_roundtrip,
    NewTask,
    NewTask {
        title: "Reply to students".into(),
        tags: vec!["tag-22222222".into()],
        ..NewTask::default()
    }
);

roundtrip_and_validate!(
    kpi_progress_roundtrip,
    KpiProgressReport,
    KpiProgressReport {
        year: 2024,
        month: 6,
        quarter: 2,
        lines: KpiMetric::ALL
            .iter()
            .map(|&m| KpiProgressLine::new(m, 10.0, 40.0))
            .collect(),
    }
);

roundtrip_and_validate!(
    strategy_document_roundtrip,
    StrategyDocument,
    StrategyDocument::assemble(
        vec![Strategy {
            id: "str-aaaaaaaa".into(),
            title: "Two videos a week".into(),
            content: String::new(),
            category: StrategyCategory::Kdi,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }],
        vec![StrategyReview {
            id: "srv-bbbbbbbb".into(),
            date: date(2024, 6, 30),
            summary: "Hit the recording target".into(),
            next_strategy: "Start marketing".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }],
    )
);

#[test]
fn enums_reject_unknown_values() {
    assert!(serde_json::from_str::<Mood>("\"ecstatic\"").is_err());
    assert!(serde_json::from_str::<CourseStatus>("\"NotStarted\"").is_err());
}
