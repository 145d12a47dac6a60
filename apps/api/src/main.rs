//! # Taskboard API サーバー
//!
//! タスクとコメントを管理する REST API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス                      | 説明                       |
//! |----------|---------------------------|----------------------------|
//! | GET      | `/`                       | 稼働メッセージ             |
//! | GET      | `/health`                 | Liveness Check             |
//! | GET      | `/health/ready`           | Readiness Check（DB 含む） |
//! | POST     | `/api/tasks`              | タスク作成                 |
//! | GET      | `/api/tasks`              | タスク一覧取得             |
//! | GET      | `/api/tasks/{id}`         | タスク取得                 |
//! | PUT      | `/api/tasks/{id}`         | タスク部分更新             |
//! | DELETE   | `/api/tasks/{id}`         | タスク削除                 |
//! | POST     | `/api/comments`           | コメント作成               |
//! | GET      | `/api/comments/{task_id}` | タスクのコメント一覧       |
//! | PUT      | `/api/comments/{id}`      | コメント部分更新           |
//! | DELETE   | `/api/comments/{id}`      | コメント削除               |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `APP_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `APP_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! APP_PORT=8000 DATABASE_URL=postgres://... cargo run -p taskboard-api
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{
   Router,
   routing::{get, post},
};
use config::AppConfig;
use handler::{
   comment::{
      CommentState, create_comment, delete_comment, list_comments_by_task, update_comment,
   },
   health::{ReadinessState, health_check, index, readiness_check},
   task::{TaskState, create_task, delete_task, get_task, list_tasks, update_task},
};
use taskboard_domain::clock::SystemClock;
use taskboard_infra::{
   db,
   repository::{
      CommentRepository, PostgresCommentRepository, PostgresTaskRepository, TaskRepository,
   },
};
use taskboard_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use usecase::{CommentUseCaseImpl, TaskUseCaseImpl};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("api");
   init_tracing(tracing_config);
   let _tracing_guard = tracing::info_span!("app", service = "api").entered();

   // 設定読み込み
   let config = AppConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Taskboard API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // マイグレーション実行
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの実行に失敗しました");
   tracing::info!("マイグレーションを適用しました");

   // Readiness Check 用 State（pool が move される前に clone）
   let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

   // 依存コンポーネントを初期化
   let clock = Arc::new(SystemClock);
   let task_repo: Arc<dyn TaskRepository> =
      Arc::new(PostgresTaskRepository::new(pool.clone()));
   let comment_repo: Arc<dyn CommentRepository> = Arc::new(PostgresCommentRepository::new(pool));
   let task_state = Arc::new(TaskState {
      usecase: TaskUseCaseImpl::new(task_repo, clock.clone()),
   });
   let comment_state = Arc::new(CommentState {
      usecase: CommentUseCaseImpl::new(comment_repo, clock),
   });

   // ルーター構築
   let app = Router::new()
      .route("/", get(index))
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/health/ready", get(readiness_check))
            .with_state(readiness_state),
      )
      .merge(
         Router::new()
            .route("/api/tasks", get(list_tasks).post(create_task))
            .route(
               "/api/tasks/{id}",
               get(get_task).put(update_task).delete(delete_task),
            )
            .with_state(task_state),
      )
      .merge(
         Router::new()
            .route("/api/comments", post(create_comment))
            .route(
               "/api/comments/{id}",
               get(list_comments_by_task)
                  .put(update_comment)
                  .delete(delete_comment),
            )
            .with_state(comment_state),
      )
      .layer(CorsLayer::permissive())
      .layer(TraceLayer::new_for_http());

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Taskboard API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
