//! APIレスポンスパーサー
//!
//! レスポンステキストからJSONオブジェクトを抽出し、AnalysisResultへ
//! 構造検証付きでパースする。トップレベル4フィールドの欠落・nullは
//! トランスポート障害と同じ「解析失敗」として扱う。

use crate::error::{BeautyAiError, Result};
use crate::types::AnalysisResult;

/// レスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(BeautyAiError::ApiParse("JSONが見つかりません".into()))
}

/// 解析レスポンスをパース
///
/// serdeの型付きデシリアライズが構造検証を兼ねる:
/// 必須フィールドの欠落やnullはここでエラーになる。
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult> {
    let json_str = extract_json(response)?;
    let result: AnalysisResult = serde_json::from_str(json_str.trim())
        .map_err(|e| BeautyAiError::ApiParse(format!("JSONパースエラー: {}", e)))?;
    Ok(result)
}
