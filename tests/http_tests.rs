use reqwest::StatusCode;
use reqwest::blocking::get;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::process::{Child, Command};
use std::thread;
use std::time::Duration;

struct ForecastTestServer {
    process: Child,
    port: u16,
}

impl ForecastTestServer {
    // Every test gets its own port so they can run in parallel.
    fn spawn(port: u16, extra_args: &[&str]) -> Self {
        let executable = env!("CARGO_BIN_EXE_forecast-api");
        let server = ForecastTestServer {
            process: Command::new(executable)
                .args(["--address", "127.0.0.1", "--port", &port.to_string()])
                .args(extra_args)
                .spawn()
                .expect("Could not start forecast-api"),
            port,
        };
        while get(server.url("/weatherforecast")).is_err() {
            thread::sleep(Duration::from_millis(1));
        }
        server
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

impl Drop for ForecastTestServer {
    fn drop(&mut self) {
        self.process
            .kill()
            .expect("Failed to send kill signal to forecast-api");
        self.process.wait().expect("forecast-api failed to stop");
    }
}

#[test]
fn can_start_and_stop_server() {
    ForecastTestServer::spawn(3101, &[]);
}

#[test]
fn weatherforecast_returns_json() {
    let server = ForecastTestServer::spawn(3102, &[]);
    let res = get(server.url("/weatherforecast")).expect("Could not send request");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    let body = res.text().unwrap();
    assert!(body.to_lowercase().contains("temperaturec"));
    let records: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(records.len(), 5);
}

#[test]
fn forecast_respects_days_parameter() {
    let server = ForecastTestServer::spawn(3103, &[]);
    let res = get(server.url("/api/weather/forecast?days=12")).expect("Could not send request");
    assert_eq!(res.status(), StatusCode::OK);
    let records: Vec<Value> = res.json().unwrap();
    assert_eq!(records.len(), 12);

    for days in ["0", "31"] {
        let res = get(server.url(&format!("/api/weather/forecast?days={days}")))
            .expect("Could not send request");
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.text().unwrap(), "Days must be between 1 and 30");
    }
}

#[test]
fn seeded_server_repeats_itself() {
    let server = ForecastTestServer::spawn(3104, &["--seed", "42"]);
    let fetch = || -> Vec<Value> {
        get(server.url("/api/weather/forecast?days=30"))
            .expect("Could not send request")
            .json()
            .unwrap()
    };
    let first = fetch();
    let second = fetch();
    if first[0]["date"] == second[0]["date"] {
        assert_eq!(first, second);
    }
}
