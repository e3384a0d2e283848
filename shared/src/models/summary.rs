//! Dashboard summary returned by the backend

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial and operational headline figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSummary {
    #[serde(rename = "financiero")]
    pub finance: FinanceSummary,
    #[serde(rename = "operativo")]
    pub operations: OperationsSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FinanceSummary {
    /// Income minus expenses
    #[serde(rename = "caja")]
    pub cash: Decimal,
    #[serde(rename = "egresos")]
    pub expenses: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OperationsSummary {
    #[serde(rename = "animales")]
    pub animals: u32,
    #[serde(rename = "lotes")]
    pub lots: u32,
    /// Supplies at or below their reorder point
    #[serde(rename = "alertas")]
    pub low_stock_alerts: u32,
}
