//! 画像取得モジュール
//!
//! 入力経路は2つ（ファイル選択 / カメラキャプチャ）だが、
//! どちらも同じ出力契約に集約する: Base64エンコード済み画像＋MIMEタイプ。

pub mod camera;

use crate::error::{BeautyAiError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;

/// 解析クライアントに渡す画像ペイロード
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    /// Base64エンコード済みデータ（Data URLプレフィックスなし）
    pub data: String,
    /// MIMEタイプ（例: "image/jpeg"）
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(data: String, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Data URL形式（"data:image/jpeg;base64,..."）に変換
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Data URLからペイロードを復元
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let data = extract_base64_from_data_url(data_url)
            .ok_or_else(|| BeautyAiError::ImageLoad("不正なData URLです".into()))?;
        let mime_type = extract_mime_type_from_data_url(data_url);
        Ok(Self::new(data.to_string(), mime_type))
    }
}

/// Data URLからBase64データ部分を抽出
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出（抽出失敗時は"image/jpeg"）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// 拡張子からMIMEタイプを判定（png/jpeg/webpのみ対応）
fn mime_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// 画像ファイルを読み込んでペイロード化
///
/// ファイル全体をメモリに読み込み、Base64エンコードする。
/// 読み込み失敗は呼び出し側で解析エラーとして扱う。
pub fn load_image_file(path: &Path) -> Result<ImagePayload> {
    if !path.exists() {
        return Err(BeautyAiError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();

    let mime_type = mime_type_for_extension(&ext)
        .ok_or_else(|| BeautyAiError::UnsupportedFormat(path.display().to_string()))?;

    let bytes = std::fs::read(path)
        .map_err(|e| BeautyAiError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    Ok(ImagePayload::new(BASE64.encode(bytes), mime_type))
}
