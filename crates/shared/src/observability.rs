//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// ログ出力形式
///
/// 環境変数 `LOG_FORMAT` で切り替える。
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// JSON 形式（本番環境向け）
   Json,
   /// 人間が読みやすい形式（開発環境向け）
   #[default]
   Pretty,
}

impl LogFormat {
   /// 文字列からログ形式をパースする
   ///
   /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
   /// stderr に警告を出力する。
   pub fn parse(s: &str) -> Self {
      match s {
         "json" => Self::Json,
         "pretty" => Self::Pretty,
         other => {
            eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
            Self::Pretty
         }
      }
   }

   /// 環境変数 `LOG_FORMAT` から読み取る
   ///
   /// 未設定の場合は [`Pretty`](LogFormat::Pretty) をデフォルトとする。
   pub fn from_env() -> Self {
      match std::env::var("LOG_FORMAT") {
         Ok(val) => Self::parse(&val),
         Err(_) => Self::default(),
      }
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
   /// `RUST_LOG` 未設定時に使用するデフォルトフィルタ
   pub default_filter: String,
   /// ログ出力形式
   pub log_format:     LogFormat,
}

impl TracingConfig {
   /// 新しい設定を作成する
   pub fn new(default_filter: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         default_filter: default_filter.into(),
         log_format,
      }
   }

   /// 環境変数から設定を読み取る
   ///
   /// `LOG_FORMAT` 環境変数で出力形式を決定する。
   pub fn from_env(default_filter: impl Into<String>) -> Self {
      Self::new(default_filter, LogFormat::from_env())
   }
}

/// グローバルな tracing subscriber を初期化する
///
/// フィルタは `RUST_LOG` 環境変数から読み込み、未設定の場合は
/// `config.default_filter` を使用する。
///
/// # パニック
///
/// 既に subscriber が設定されている場合はパニックする。
/// アプリケーション起動時に一度だけ呼び出すこと。
pub fn init_tracing(config: &TracingConfig) {
   let filter = EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

   match config.log_format {
      LogFormat::Json => {
         tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
      }
      LogFormat::Pretty => {
         tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   // ===== LogFormat::parse テスト =====

   #[test]
   fn test_parse_jsonでjsonを返す() {
      assert_eq!(LogFormat::parse("json"), LogFormat::Json);
   }

   #[test]
   fn test_parse_prettyでprettyを返す() {
      assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
   }

   #[test]
   fn test_parse_不正な値でprettyにフォールバックする() {
      assert_eq!(LogFormat::parse("unknown"), LogFormat::Pretty);
      assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
      assert_eq!(LogFormat::parse("JSON"), LogFormat::Pretty);
   }

   // ===== LogFormat::default テスト =====

   #[test]
   fn test_defaultでprettyを返す() {
      assert_eq!(LogFormat::default(), LogFormat::Pretty);
   }

   // ===== TracingConfig テスト =====

   #[test]
   fn test_newで設定値が保持される() {
      let config = TracingConfig::new("info,staffhub=debug", LogFormat::Json);

      assert_eq!(config.default_filter, "info,staffhub=debug");
      assert_eq!(config.log_format, LogFormat::Json);
   }
}
