pub mod forecast;
pub mod random_forecast;
