//! # Employee Service 設定
//!
//! 環境変数から Employee Service サーバーの設定を読み込む。

use std::env;

/// Employee Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ServiceConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// データベース接続 URL
   pub database_url: String,
}

impl ServiceConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host: env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: env::var("APP_PORT")
            .expect("APP_PORT が設定されていません")
            .parse()
            .expect("APP_PORT は有効なポート番号である必要があります"),
         database_url: env::var("DATABASE_URL").expect("DATABASE_URL が設定されていません"),
      })
   }
}
