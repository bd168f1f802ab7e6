use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Language, Theme};

/// Background color used when none has been saved.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    /// `#RRGGBB`.
    pub background_color: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Per-user preferences, stored as a single JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct UserSettings {
    pub theme: Theme,
    pub language: Language,
    pub notifications: NotificationSettings,
    pub profile: ProfileSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub task_reminders: bool,
    pub kpi_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            task_reminders: true,
            kpi_updates: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub timezone: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            timezone: "UTC".to_string(),
        }
    }
}
