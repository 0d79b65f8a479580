use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    state::AppState,
    task::{self, Task, TaskPayload},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        task::task_handlers::list_tasks,
        task::task_handlers::create_task,
        task::task_handlers::get_task,
        task::task_handlers::update_task,
        task::task_handlers::patch_task,
        task::task_handlers::delete_task,
    ),
    components(
        schemas(
            Task,
            TaskPayload,
        )
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Explicit routing table: one entry per (verb, path) pair.
    let task_routes = Router::new()
        .route("/", get(task::list_tasks).post(task::create_task))
        .route(
            "/:id",
            get(task::get_task)
                .put(task::update_task)
                .patch(task::patch_task)
                .delete(task::delete_task),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .nest("/tasks", task_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
