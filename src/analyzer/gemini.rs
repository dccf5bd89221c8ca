//! Gemini API連携モジュール
//!
//! 画像＋指示プロンプト＋responseSchemaを送信し、構造検証済みの
//! AnalysisResultを返す。この境界の内側で起きた失敗（通信・HTTP・
//! パース・構造検証）はすべてモックフォールバックに吸収され、
//! `analyze`は決して失敗しない。リトライ・キャッシュは行わない。

use crate::acquisition::ImagePayload;
use crate::analyzer::{mock, parser, prompt, schema};
use crate::config::Config;
use crate::error::{BeautyAiError, Result};
use crate::types::AnalysisResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// 解析クライアント
pub struct GeminiClient {
    api_key: String,
    model: String,
    temperature: f32,
    http: reqwest::Client,
    verbose: bool,
}

impl GeminiClient {
    pub fn new(config: &Config, verbose: bool) -> Result<Self> {
        let api_key = config.get_api_key()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| BeautyAiError::Config(format!("HTTPクライアント初期化失敗: {}", e)))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            http,
            verbose,
        })
    }

    /// 画像を解析する
    ///
    /// 失敗ポリシー: この呼び出しは決してエラーを返さない。
    /// API障害時はモック結果に差し替え、UIフローを止めない。
    pub async fn analyze(&self, payload: &ImagePayload) -> AnalysisResult {
        match self.request_analysis(payload).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("⚠ Gemini APIエラー: {}（モックデータで継続）", e);
                mock::mock_result(&mut StdRng::from_entropy())
            }
        }
    }

    /// API呼び出し本体（失敗しうる内側の経路）
    async fn request_analysis(&self, payload: &ImagePayload) -> Result<AnalysisResult> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: payload.mime_type.clone(),
                            data: payload.data.clone(),
                        },
                    },
                    Part::Text {
                        text: prompt::build_analysis_prompt(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: schema::response_schema(),
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BeautyAiError::ApiCall(format!("リクエスト送信失敗: {}", e)))?;

        if !response.status().is_success() {
            return Err(BeautyAiError::ApiCall(format!(
                "API error: {}",
                response.status()
            )));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| BeautyAiError::ApiParse(format!("レスポンス読み取り失敗: {}", e)))?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| BeautyAiError::ApiParse("Empty response".into()))?;

        if self.verbose {
            let preview: String = text.chars().take(500).collect();
            println!("  レスポンス: {}", preview);
        }

        parser::parse_analysis_response(text.trim())
    }
}
