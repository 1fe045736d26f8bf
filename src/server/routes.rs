use super::AppState;
use crate::browser::open_tabs;
use crate::config::TabMode;
use crate::error::{ArgstoneError, Result};
use crate::link::build_chat_url;
use crate::prompt::Category;
use crate::request::PromptRequest;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

const INDEX_HTML: &str = include_str!("index.html");

/// Body of `POST /open`.
#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default = "default_count", deserialize_with = "deserialize_count")]
    pub stones: i64,
    #[serde(default = "default_count", deserialize_with = "deserialize_count")]
    pub kernels: i64,
    #[serde(default, rename = "type")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OpenResponse {
    pub status: &'static str,
    pub opened: u32,
    pub url: String,
    pub mode: TabMode,
}

fn default_count() -> i64 {
    1
}

/// Accept counts as JSON integers or as numeric strings (`3` or `"3"`).
fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Text(String),
    }

    match RawCount::deserialize(deserializer)? {
        RawCount::Int(n) => Ok(n),
        RawCount::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, found '{}'", s))),
    }
}

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn open_chat(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<OpenRequest>, JsonRejection>,
) -> Result<Json<OpenResponse>> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, "rejected_open_request");
        ArgstoneError::BadRequest(e.body_text())
    })?;

    let category = Category::resolve(body.category.as_deref(), state.default_category);
    let request = PromptRequest::new(
        body.prompt.as_deref().unwrap_or_default(),
        body.stones,
        body.kernels,
        category,
    )
    .inspect_err(|e| warn!(error = %e, "rejected_open_request"))?;

    let prompt = state
        .templates
        .generate(&request.text, request.kernels, request.category)?;

    info!(
        category = %prompt.category,
        kernels = request.kernels,
        stones = request.stones,
        "prompt_generated"
    );
    let url = build_chat_url(&state.link, &prompt.text)?.to_string();

    let opened = match state.tab_mode {
        TabMode::Client => request.stones,
        TabMode::Server => {
            let launcher = state.launcher.clone();
            let target = url.clone();
            let stones = request.stones;
            tokio::task::spawn_blocking(move || open_tabs(launcher.as_ref(), &target, stones))
                .await
                .map_err(|e| ArgstoneError::BrowserError(e.to_string()))??
        }
    };

    Ok(Json(OpenResponse {
        status: "ok",
        opened,
        url,
        mode: state.tab_mode,
    }))
}
