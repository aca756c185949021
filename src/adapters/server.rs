use crate::core::engine::{ReplyBody, SkillReply};
use crate::core::registry::SkillRegistry;
use crate::utils::error::Result;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

pub fn build_router(registry: SkillRegistry) -> Router {
    Router::new()
        .route("/api/{skill}", post(run_skill))
        .route("/healthz", get(healthz))
        .with_state(registry)
}

pub async fn serve(listen_addr: &str, registry: SkillRegistry) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(
        "🚀 Serving {} skills on http://{}",
        registry.len(),
        listener.local_addr()?
    );
    for name in registry.names() {
        tracing::info!("   POST /api/{}", name);
    }

    axum::serve(listener, build_router(registry)).await?;
    Ok(())
}

async fn run_skill(
    State(registry): State<SkillRegistry>,
    Path(skill): Path<String>,
    body: Bytes,
) -> Response {
    let Some(engine) = registry.get(&skill) else {
        tracing::warn!("Request for unknown skill '{}'", skill);
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{} - Unknown skill.", skill),
        )
            .into_response();
    };

    reply_response(engine.process(&body).await)
}

fn reply_response(reply: SkillReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match reply.body {
        ReplyBody::Json(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        ReplyBody::Text(text) => (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
    }
}

async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
