use crate::models::forecast::{ForecastDays, ForecastRecord, ForecastService, generate_forecast};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Draws from the thread local generator, so every call owns its source.
pub struct RandomForecastService;

#[async_trait]
impl ForecastService for RandomForecastService {
    async fn forecast(&self, days: ForecastDays) -> Vec<ForecastRecord> {
        log::debug!("Generating {} day forecast", days.get());
        generate_forecast(today(), days, &mut rand::rng())
    }
}

/// Reseeds for each call. Identical requests on the same day get identical
/// forecasts.
pub struct SeededForecastService {
    pub seed: u64,
}

#[async_trait]
impl ForecastService for SeededForecastService {
    async fn forecast(&self, days: ForecastDays) -> Vec<ForecastRecord> {
        log::debug!(
            "Generating {} day forecast with seed {}",
            days.get(),
            self.seed
        );
        let mut rng = StdRng::seed_from_u64(self.seed);
        generate_forecast(today(), days, &mut rng)
    }
}
