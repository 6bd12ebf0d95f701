use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{ApiResponse, CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// GET / — static description of the API surface.
pub async fn root_index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Todo API is running!",
        "endpoints": {
            "GET /api/todos": "Get all todos",
            "GET /api/todos/status?status=completed": "Get todos by status (completed/pending)",
            "GET /api/todos/search?q=searchterm": "Search todos by title or description",
            "GET /api/todos/:id": "Get todo by ID",
            "POST /api/todos": "Create a new todo",
            "PUT /api/todos/:id": "Update a todo",
            "DELETE /api/todos/:id": "Delete a todo",
            "PATCH /api/todos/:id/toggle": "Toggle todo completion status",
        },
        "example": {
            "createTodo": {
                "method": "POST",
                "url": "/api/todos",
                "body": { "title": "Buy groceries", "description": "Milk, bread, eggs" },
            },
        },
    }))
}

pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
    let todos = state.service.get_all_todos()?;
    Ok(Json(ApiResponse::list(todos)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let todo = state.service.get_todo_by_id(&id)?;
    Ok(Json(ApiResponse::data(todo)))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state.service.create_todo(body)?;
    tracing::info!(id = %todo.id, "todo created");
    let body = ApiResponse::data_with_message(todo, "Todo created successfully");
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let todo = state.service.update_todo(&id, body)?;
    tracing::info!(id = %todo.id, "todo updated");
    Ok(Json(ApiResponse::data_with_message(todo, "Todo updated successfully")))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.service.delete_todo(&id)?;
    tracing::info!(id = %id, "todo deleted");
    Ok(Json(ApiResponse::message("Todo deleted successfully")))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let todo = state.service.toggle_todo(&id)?;
    let message = if todo.completed {
        "Todo completed successfully"
    } else {
        "Todo uncompleted successfully"
    };
    Ok(Json(ApiResponse::data_with_message(todo, message)))
}

pub async fn todos_by_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
    // Anything other than "completed" (including no param) means pending.
    let completed = params.status.as_deref() == Some("completed");
    let todos = state.service.get_todos_by_status(completed)?;
    Ok(Json(ApiResponse::list(todos)))
}

pub async fn search_todos(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<Todo>>>, ApiError> {
    // Boundary validation: a missing or empty term never reaches the service.
    let term = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::BadRequest("Search query is required".to_string())),
    };

    let todos = state.service.search_todos_by_title(term)?;
    Ok(Json(ApiResponse::list(todos)))
}
