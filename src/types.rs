//! 解析結果の型定義
//!
//! Gemini APIのレスポンススキーマと1対1で対応する。
//! トップレベル4フィールドはすべて必須（欠落はパースエラー＝解析失敗扱い）。

use serde::{Deserialize, Serialize};

/// 美容指標（1項目分のスコア）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeautyIndex {
    pub name: String,
    /// 0〜100のスコア
    pub score: f64,
    pub emoji: String,
}

/// マインドマップのノード（problems / solutions共通）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    /// リスト内で一意のID
    pub id: String,
    pub text: String,
    pub emoji: String,
}

/// 詳細解析テキスト（5つの叙述フィールド、すべて必須）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub introduction: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: String,
    pub conclusion: String,
}

/// 解析結果全体
///
/// problemsとsolutionsは独立したリスト（インデックス・IDでの対応付けは保証しない）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub beauty_indexes: Vec<BeautyIndex>,
    pub problems: Vec<MindMapNode>,
    pub solutions: Vec<MindMapNode>,
    pub detailed_analysis: DetailedAnalysis,
}
