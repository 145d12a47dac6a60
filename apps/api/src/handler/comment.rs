//! # コメント API ハンドラ
//!
//! コメント CRUD のエンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス                      | 説明                         |
//! |----------|---------------------------|------------------------------|
//! | POST     | `/api/comments`           | コメント作成                 |
//! | GET      | `/api/comments/{task_id}` | タスクに紐づくコメント一覧   |
//! | PUT      | `/api/comments/{id}`      | コメント部分更新             |
//! | DELETE   | `/api/comments/{id}`      | コメント削除                 |
//!
//! GET のパスパラメータはタスク ID、PUT / DELETE はコメント ID を指す点に注意。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use taskboard_domain::{
   comment::{Comment, CommentId},
   task::TaskId,
};

use crate::{
   error::ApiError,
   usecase::comment::{CommentUseCaseImpl, CreateCommentInput, UpdateCommentInput},
};

/// コメントハンドラーの State
pub struct CommentState {
   pub usecase: CommentUseCaseImpl,
}

/// コメント DTO
#[derive(Debug, Serialize)]
pub struct CommentDto {
   pub id:         i64,
   pub task_id:    i64,
   pub content:    String,
   pub created_at: String,
   pub updated_at: String,
}

impl CommentDto {
   fn from_comment(comment: &Comment) -> Self {
      Self {
         id:         comment.id().as_i64(),
         task_id:    comment.task_id().as_i64(),
         content:    comment.content().as_str().to_string(),
         created_at: comment.created_at().to_rfc3339(),
         updated_at: comment.updated_at().to_rfc3339(),
      }
   }
}

/// コメント作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
   pub task_id: Option<i64>,
   pub content: Option<String>,
}

/// コメント更新リクエスト（部分更新）
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
   pub content: Option<String>,
}

/// コメントを作成する
///
/// ## エンドポイント
/// POST /api/comments
pub async fn create_comment(
   State(state): State<Arc<CommentState>>,
   Json(request): Json<CreateCommentRequest>,
) -> Result<Response, ApiError> {
   let comment = state
      .usecase
      .create_comment(CreateCommentInput {
         task_id: request.task_id,
         content: request.content,
      })
      .await?;

   Ok((
      StatusCode::CREATED,
      Json(CommentDto::from_comment(&comment)),
   )
      .into_response())
}

/// タスクに紐づくコメント一覧を取得する
///
/// ## エンドポイント
/// GET /api/comments/{task_id}
pub async fn list_comments_by_task(
   State(state): State<Arc<CommentState>>,
   Path(task_id): Path<i64>,
) -> Result<Response, ApiError> {
   let comments = state
      .usecase
      .list_comments_by_task(TaskId::from_i64(task_id))
      .await?;

   let response: Vec<CommentDto> = comments.iter().map(CommentDto::from_comment).collect();

   Ok((StatusCode::OK, Json(response)).into_response())
}

/// コメントを部分更新する
///
/// ## エンドポイント
/// PUT /api/comments/{id}
pub async fn update_comment(
   State(state): State<Arc<CommentState>>,
   Path(id): Path<i64>,
   Json(request): Json<UpdateCommentRequest>,
) -> Result<Response, ApiError> {
   let comment = state
      .usecase
      .update_comment(UpdateCommentInput {
         comment_id: CommentId::from_i64(id),
         content:    request.content,
      })
      .await?;

   Ok((StatusCode::OK, Json(CommentDto::from_comment(&comment))).into_response())
}

/// コメントを削除する
///
/// ## エンドポイント
/// DELETE /api/comments/{id}
pub async fn delete_comment(
   State(state): State<Arc<CommentState>>,
   Path(id): Path<i64>,
) -> Result<Response, ApiError> {
   state
      .usecase
      .delete_comment(CommentId::from_i64(id))
      .await?;

   Ok((
      StatusCode::OK,
      Json(serde_json::json!({ "message": "コメントを削除しました" })),
   )
      .into_response())
}
