use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    food::entities::{FoodItem, ThermicQuality},
};

/// How the user identified the food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanMethod {
    Barcode,
    Photo,
    Manual,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown scan method '{0}', expected one of barcode, photo, manual")]
pub struct ParseScanMethodError(pub String);

impl ScanMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMethod::Barcode => "barcode",
            ScanMethod::Photo => "photo",
            ScanMethod::Manual => "manual",
        }
    }
}

impl fmt::Display for ScanMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMethod {
    type Err = ParseScanMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [ScanMethod::Barcode, ScanMethod::Photo, ScanMethod::Manual]
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseScanMethodError(s.to_string()))
    }
}

/// One scan in a user's history. Name, calories and thermic quality are
/// copied from the catalog at scan time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: Uuid,
    pub user_id: String,
    pub food_id: i64,
    pub method: ScanMethod,
    pub barcode: Option<String>,
    pub food_name: String,
    pub calories: f64,
    pub thermic_quality: ThermicQuality,
    pub created_at: DateTime<Utc>,
}

impl ScanRecord {
    pub fn new(
        user_id: String,
        food: &FoodItem,
        method: ScanMethod,
        barcode: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            food_id: food.id,
            method,
            barcode: barcode.filter(|code| !code.trim().is_empty()),
            food_name: food.name.clone(),
            calories: food.calories,
            thermic_quality: food.thermic_quality,
            created_at: now,
        }
    }
}
