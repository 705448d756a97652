use axum::{
    routing::post,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::info;

use crate::api::models::{ChatReply, ChatRequest};
use crate::error::{AppError, Result};
use crate::prompt::build_system_prompt;
use crate::shortcut::shortcut_reply;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>> {
    let message = req.message.unwrap_or_default();
    if message.is_empty() {
        return Err(AppError::MissingMessage);
    }

    // Scrape failures degrade to placeholder content inside the cache and
    // never reach the client.
    let sections = state.cache.get_content().await;

    if let Some(reply) = shortcut_reply(&message) {
        info!("serving shortcut reply");
        return Ok(Json(ChatReply {
            reply: reply.to_string(),
        }));
    }

    let system_prompt = build_system_prompt(&state.config.persona, &sections);
    let reply = state.completion.complete(&system_prompt, &message).await?;
    info!("completion reply served ({} chars)", reply.len());

    Ok(Json(ChatReply { reply }))
}
