//! # Employee Service サーバー
//!
//! 従業員ディレクトリの CRUD API を提供するサービス。
//!
//! ## 役割
//!
//! - **ビジネスロジック**: 作成時のメールアドレス重複チェック
//! - **データ永続化**: PostgreSQL への従業員レコード保存
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `APP_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `APP_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,staffhub=debug`） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p staffhub-employee-service
//!
//! # 本番環境
//! APP_PORT=3000 DATABASE_URL=postgres://... \
//!     cargo run -p staffhub-employee-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use axum::{
   Router,
   routing::get,
};
use staffhub_employee_service::{
   config::ServiceConfig,
   handler::{
      EmployeeState,
      ReadinessState,
      create_employee,
      delete_employee,
      get_employee,
      health_check,
      list_employees,
      readiness_check,
      update_employee,
   },
   usecase::EmployeeUseCaseImpl,
};
use staffhub_infra::{db, repository::PostgresEmployeeRepository};
use staffhub_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Employee Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   init_tracing(&TracingConfig::from_env("info,staffhub=debug"));

   // 設定読み込み
   let config = ServiceConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Employee Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // マイグレーション適用
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの適用に失敗しました");

   // 依存コンポーネントを初期化
   let employee_repository = Arc::new(PostgresEmployeeRepository::new(pool.clone()));
   let employee_state = Arc::new(EmployeeState {
      usecase: EmployeeUseCaseImpl::new(employee_repository),
   });
   let readiness_state = Arc::new(ReadinessState { pool });

   // ルーター構築
   let app = Router::new()
      .route("/health", get(health_check))
      .route("/health/ready", get(readiness_check))
      .with_state(readiness_state)
      .route(
         "/api/employee",
         get(list_employees).post(create_employee),
      )
      .route(
         "/api/employee/{id}",
         get(get_employee)
            .put(update_employee)
            .delete(delete_employee),
      )
      .with_state(employee_state)
      .layer(TraceLayer::new_for_http());

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Employee Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
