#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use warp::http::StatusCode;
use warp::Filter;

/// Shared state behind the fake amplifier's routes
#[derive(Default)]
struct AmpState {
    volume: Mutex<i64>,
    status_body: Mutex<Option<String>>,
    requests: Mutex<Vec<String>>,
}

/// An in-process HTTP server answering the two volume endpoints
pub struct FakeAmplifier {
    addr: SocketAddr,
    state: Arc<AmpState>,
}

impl FakeAmplifier {
    /// Start on an ephemeral loopback port with the given volume
    pub async fn start(volume: i64) -> Self {
        let state = Arc::new(AmpState::default());
        *state.volume.lock().unwrap() = volume;

        let with_state = {
            let state = Arc::clone(&state);
            warp::any().map(move || Arc::clone(&state))
        };

        let status = warp::get()
            .and(warp::path!("YamahaExtendedControl" / "v1" / "main" / "getStatus"))
            .and(with_state.clone())
            .map(|state: Arc<AmpState>| {
                state.requests.lock().unwrap().push("getStatus".to_string());

                let body = match state.status_body.lock().unwrap().clone() {
                    Some(body) => body,
                    None => serde_json::json!({
                        "response_code": 0,
                        "power": "on",
                        "volume": *state.volume.lock().unwrap(),
                        "mute": false,
                        "max_volume": 161,
                    })
                    .to_string(),
                };

                warp::reply::with_status(body, StatusCode::OK)
            });

        let set_volume = warp::get()
            .and(warp::path!("YamahaExtendedControl" / "v1" / "main" / "setVolume"))
            .and(warp::query::<HashMap<String, String>>())
            .and(with_state)
            .map(|query: HashMap<String, String>, state: Arc<AmpState>| {
                let requested = query.get("volume").cloned().unwrap_or_default();
                state
                    .requests
                    .lock()
                    .unwrap()
                    .push(format!("setVolume?volume={}", requested));

                match requested.parse::<i64>() {
                    Ok(volume) => {
                        *state.volume.lock().unwrap() = volume;
                        warp::reply::with_status(
                            r#"{"response_code":0}"#.to_string(),
                            StatusCode::OK,
                        )
                    }
                    Err(_) => warp::reply::with_status(
                        r#"{"response_code":3}"#.to_string(),
                        StatusCode::BAD_REQUEST,
                    ),
                }
            });

        let (addr, server) =
            warp::serve(status.or(set_volume)).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, state }
    }

    /// `host:port` to hand to the client
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    pub fn volume(&self) -> i64 {
        *self.state.volume.lock().unwrap()
    }

    /// Replace the getStatus body with a fixed string
    pub fn set_status_body(&self, body: &str) {
        *self.state.status_body.lock().unwrap() = Some(body.to_string());
    }

    /// Every request seen so far, as `endpoint[?query]`
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}
