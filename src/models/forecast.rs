use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

pub const MIN_DAYS: i32 = 1;
pub const MAX_DAYS: i32 = 30;
pub const DEFAULT_DAYS: i32 = 5;

// Celsius samples are drawn from [MIN_TEMPERATURE_C, MAX_TEMPERATURE_C).
pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 55;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

pub const SUMMARIES: [Summary; 10] = [
    Summary::Freezing,
    Summary::Bracing,
    Summary::Chilly,
    Summary::Cool,
    Summary::Mild,
    Summary::Warm,
    Summary::Balmy,
    Summary::Hot,
    Summary::Sweltering,
    Summary::Scorching,
];

/// One day of synthetic weather.
///
/// The Fahrenheit temperature is not stored, it is derived from
/// `temperature_c` whenever the record is read or serialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(into = "ForecastRecordBody")]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Option<Summary>,
}

impl ForecastRecord {
    pub fn temperature_f(&self) -> i32 {
        // `as` truncates toward zero.
        32 + (self.temperature_c as f64 / 0.5556) as i32
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastRecordBody {
    date: NaiveDate,
    temperature_c: i32,
    summary: Option<Summary>,
    temperature_f: i32,
}

impl From<ForecastRecord> for ForecastRecordBody {
    fn from(record: ForecastRecord) -> Self {
        ForecastRecordBody {
            temperature_f: record.temperature_f(),
            date: record.date,
            temperature_c: record.temperature_c,
            summary: record.summary,
        }
    }
}

/// A day count that has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDays(i32);

impl ForecastDays {
    pub fn new(days: i32) -> Result<ForecastDays, ForecastError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(ForecastError::InvalidArgument { days });
        }
        Ok(ForecastDays(days))
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl Default for ForecastDays {
    fn default() -> Self {
        ForecastDays(DEFAULT_DAYS)
    }
}

pub fn generate_forecast<R: Rng + ?Sized>(
    today: NaiveDate,
    days: ForecastDays,
    rng: &mut R,
) -> Vec<ForecastRecord> {
    (1..=days.get())
        .map(|index| ForecastRecord {
            date: today + Duration::days(index as i64),
            temperature_c: rng.random_range(MIN_TEMPERATURE_C..MAX_TEMPERATURE_C),
            summary: SUMMARIES.choose(rng).copied(),
        })
        .collect()
}

#[async_trait]
pub trait ForecastService: Send + Sync {
    async fn forecast(&self, days: ForecastDays) -> Vec<ForecastRecord>;
}
