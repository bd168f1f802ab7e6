//! KPI update builder.

use lifeops_core::enums::KpiPeriod;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct KpiUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<KpiPeriod>,
}

pub struct KpiUpdateBuilder(KpiUpdate);

impl KpiUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(KpiUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn target_value(mut self, value: f64) -> Self {
        self.0.target_value = Some(value);
        self
    }

    #[must_use]
    pub const fn current_value(mut self, value: f64) -> Self {
        self.0.current_value = Some(value);
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.0.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub const fn period(mut self, period: KpiPeriod) -> Self {
        self.0.period = Some(period);
        self
    }

    #[must_use]
    pub fn build(self) -> KpiUpdate {
        self.0
    }
}

impl Default for KpiUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
