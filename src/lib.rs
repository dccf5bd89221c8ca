//! Beauty AI Rust
//!
//! 写真（ファイル / カメラキャプチャ）をGemini APIへ送信し、
//! 美容指標・改善点・詳細解析からなる構造化結果を返すツール。

pub mod acquisition;
pub mod analyzer;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod types;

pub use app::{App, AppState};
pub use error::{BeautyAiError, Result};
pub use types::AnalysisResult;
