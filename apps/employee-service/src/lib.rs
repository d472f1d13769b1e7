//! # Employee Service ライブラリ
//!
//! Employee Service の設定・エラー・ユースケース・ハンドラを公開する。
//! バイナリ（`main.rs`）とテストの両方からこのクレート経由で利用する。

pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
