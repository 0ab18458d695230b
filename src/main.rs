use app::{AppState, create_app};
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use config::{ServerConfig, Settings};
use error::ConfigError;
use models::forecast::ForecastService;
use models::random_forecast::{RandomForecastService, SeededForecastService};
use std::net::IpAddr;
use std::process::ExitCode;
use std::sync::Arc;

mod app;
mod config;
mod error;
mod models;
mod routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML file with server settings.
    #[arg(long, env = "FORECAST_CONFIG")]
    config: Option<String>,

    #[arg(short, long, env = "FORECAST_ADDRESS")]
    address: Option<IpAddr>,

    #[arg(short, long, env = "FORECAST_PORT")]
    port: Option<u16>,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,

    /// Generate reproducible forecasts from this seed.
    #[arg(short, long, env = "FORECAST_SEED")]
    seed: Option<u64>,
}

impl Args {
    fn settings(self) -> Result<Settings, ConfigError> {
        let file_config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        let cli_config = ServerConfig {
            address: self.address,
            port: self.port,
            key_file_path: self.key_file_path,
            cert_file_path: self.cert_file_path,
            seed: self.seed,
        };
        file_config.merge(cli_config).resolve()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let settings = match Args::parse().settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let forecasts: Arc<dyn ForecastService> = match settings.seed {
        Some(seed) => {
            log::info!("using seeded forecasts with seed {}", seed);
            Arc::new(SeededForecastService { seed })
        }
        None => Arc::new(RandomForecastService),
    };
    let app = create_app(AppState { forecasts });

    let addr = settings.addr;
    log::info!("listening on {}", addr);
    let result = if let Some(tls) = settings.tls {
        log::info!(
            "using tls with key file {} and cert file {}",
            tls.key_file_path,
            tls.cert_file_path
        );
        match RustlsConfig::from_pem_file(tls.cert_file_path, tls.key_file_path).await {
            Ok(tls) => {
                axum_server::bind_rustls(addr, tls)
                    .serve(app.into_make_service())
                    .await
            }
            Err(err) => Err(err),
        }
    } else {
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("server failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
