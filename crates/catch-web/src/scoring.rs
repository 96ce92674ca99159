//! Fire-and-forget submission of final scores to the platform backend.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::dom;

/// Backend route, relative to the API base.
pub const SUBMIT_SCORE_PATH: &str = "/api/catch-game/submit-score";

/// JSON body of the submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitScore {
    pub score: u32,
}

/// Posts final scores with the session cookie attached.
#[derive(Debug, Clone)]
pub struct ScoreClient {
    endpoint: String,
    refresh_event: String,
}

impl ScoreClient {
    /// `api_base` may be empty (same origin) and may carry a trailing slash.
    pub fn new(api_base: &str, refresh_event: impl Into<String>) -> Self {
        Self {
            endpoint: format!("{}{}", api_base.trim_end_matches('/'), SUBMIT_SCORE_PATH),
            refresh_event: refresh_event.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn body(score: u32) -> String {
        // Serializing a single integer field cannot fail.
        serde_json::to_string(&SubmitScore { score }).unwrap_or_default()
    }

    /// Start the request and return immediately.
    ///
    /// Failures are logged, never surfaced. Once the request settles either way,
    /// the refresh event is dispatched so history/leaderboard widgets reload.
    pub fn submit(&self, score: u32) {
        let endpoint = self.endpoint.clone();
        let refresh_event = self.refresh_event.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match post_score(&endpoint, score).await {
                Ok(()) => log::info!("score {} submitted", score),
                Err(err) => log::warn!("score submission failed: {:?}", err),
            }
            if let Err(err) = dom::dispatch(&refresh_event, None) {
                log::warn!("{} dispatch failed: {:?}", refresh_event, err);
            }
        });
    }
}

async fn post_score(endpoint: &str, score: u32) -> Result<(), JsValue> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_credentials(RequestCredentials::Include);
    init.set_body(&JsValue::from_str(&ScoreClient::body(score)));

    let request = Request::new_with_str_and_init(endpoint, &init)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if response.ok() {
        Ok(())
    } else {
        Err(JsValue::from_str(&format!("HTTP {}", response.status())))
    }
}
