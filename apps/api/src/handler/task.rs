//! # タスク API ハンドラ
//!
//! タスク CRUD のエンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス              | 説明           |
//! |----------|-------------------|----------------|
//! | POST     | `/api/tasks`      | タスク作成     |
//! | GET      | `/api/tasks`      | タスク一覧取得 |
//! | GET      | `/api/tasks/{id}` | タスク取得     |
//! | PUT      | `/api/tasks/{id}` | タスク部分更新 |
//! | DELETE   | `/api/tasks/{id}` | タスク削除     |

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use taskboard_domain::task::{Task, TaskId};

use crate::{
   error::ApiError,
   usecase::task::{CreateTaskInput, TaskUseCaseImpl, UpdateTaskInput},
};

/// タスクハンドラーの State
pub struct TaskState {
   pub usecase: TaskUseCaseImpl,
}

/// タスク DTO
#[derive(Debug, Serialize)]
pub struct TaskDto {
   pub id:          i64,
   pub title:       String,
   pub description: Option<String>,
   pub status:      String,
   pub created_at:  String,
   pub updated_at:  String,
}

impl TaskDto {
   fn from_task(task: &Task) -> Self {
      Self {
         id:          task.id().as_i64(),
         title:       task.title().as_str().to_string(),
         description: task.description().map(|d| d.to_string()),
         status:      task.status().to_string(),
         created_at:  task.created_at().to_rfc3339(),
         updated_at:  task.updated_at().to_rfc3339(),
      }
   }
}

/// タスク作成リクエスト
///
/// バリデーションはユースケース側で行うため、全フィールドを Option で受ける。
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
   pub title:       Option<String>,
   pub description: Option<String>,
   pub status:      Option<String>,
}

/// タスク更新リクエスト（部分更新）
///
/// `description` は「キー未指定（変更なし）」と「明示的な null（クリア）」を
/// 区別するため二重 Option で受ける。
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
   pub title:       Option<String>,
   #[serde(default, deserialize_with = "deserialize_nullable_field")]
   pub description: Option<Option<String>>,
   pub status:      Option<String>,
}

/// null を `Some(None)`、値を `Some(Some(値))` として受け取る
///
/// `#[serde(default)]` と組み合わせることで、キー未指定は `None` になる。
fn deserialize_nullable_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
   D: Deserializer<'de>,
{
   Option::<String>::deserialize(deserializer).map(Some)
}

/// タスクを作成する
///
/// ## エンドポイント
/// POST /api/tasks
pub async fn create_task(
   State(state): State<Arc<TaskState>>,
   Json(request): Json<CreateTaskRequest>,
) -> Result<Response, ApiError> {
   let task = state
      .usecase
      .create_task(CreateTaskInput {
         title:       request.title,
         description: request.description,
         status:      request.status,
      })
      .await?;

   Ok((StatusCode::CREATED, Json(TaskDto::from_task(&task))).into_response())
}

/// タスク一覧を取得する
///
/// ## エンドポイント
/// GET /api/tasks
pub async fn list_tasks(State(state): State<Arc<TaskState>>) -> Result<Response, ApiError> {
   let tasks = state.usecase.list_tasks().await?;

   let response: Vec<TaskDto> = tasks.iter().map(TaskDto::from_task).collect();

   Ok((StatusCode::OK, Json(response)).into_response())
}

/// タスクを取得する
///
/// ## エンドポイント
/// GET /api/tasks/{id}
pub async fn get_task(
   State(state): State<Arc<TaskState>>,
   Path(id): Path<i64>,
) -> Result<Response, ApiError> {
   let task = state.usecase.get_task(TaskId::from_i64(id)).await?;

   Ok((StatusCode::OK, Json(TaskDto::from_task(&task))).into_response())
}

/// タスクを部分更新する
///
/// ## エンドポイント
/// PUT /api/tasks/{id}
pub async fn update_task(
   State(state): State<Arc<TaskState>>,
   Path(id): Path<i64>,
   Json(request): Json<UpdateTaskRequest>,
) -> Result<Response, ApiError> {
   let task = state
      .usecase
      .update_task(UpdateTaskInput {
         task_id:     TaskId::from_i64(id),
         title:       request.title,
         description: request.description,
         status:      request.status,
      })
      .await?;

   Ok((StatusCode::OK, Json(TaskDto::from_task(&task))).into_response())
}

/// タスクを削除する
///
/// ## エンドポイント
/// DELETE /api/tasks/{id}
pub async fn delete_task(
   State(state): State<Arc<TaskState>>,
   Path(id): Path<i64>,
) -> Result<Response, ApiError> {
   state.usecase.delete_task(TaskId::from_i64(id)).await?;

   Ok((
      StatusCode::OK,
      Json(serde_json::json!({ "message": "タスクを削除しました" })),
   )
      .into_response())
}
