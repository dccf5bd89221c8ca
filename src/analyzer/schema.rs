//! Gemini出力スキーマ定義
//!
//! generationConfig.responseSchemaに渡す厳密なスキーマ。
//! `crate::types`の構造と1対1で対応させること。

use serde_json::{json, Value};

/// ノードリスト（problems / solutions）共通のスキーマ
fn mind_map_node_schema(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "description": description,
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "text": { "type": "STRING" },
                "emoji": { "type": "STRING" }
            },
            "required": ["id", "text", "emoji"]
        }
    })
}

/// レスポンススキーマを生成
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "beautyIndexes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "score": { "type": "NUMBER" },
                        "emoji": { "type": "STRING" }
                    },
                    "required": ["name", "score", "emoji"]
                }
            },
            "problems": mind_map_node_schema("A list of 3-5 key areas for improvement."),
            "solutions": mind_map_node_schema("A list of actionable solutions corresponding to the problems."),
            "detailedAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "introduction": {
                        "type": "STRING",
                        "description": "A warm, emoji-rich introduction."
                    },
                    "strengths": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "A list of key strengths identified."
                    },
                    "weaknesses": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "A list of key weaknesses identified."
                    },
                    "suggestions": {
                        "type": "STRING",
                        "description": "Detailed, actionable suggestions for improvement."
                    },
                    "conclusion": {
                        "type": "STRING",
                        "description": "A positive and encouraging conclusion."
                    }
                },
                "required": ["introduction", "strengths", "weaknesses", "suggestions", "conclusion"]
            }
        },
        "required": ["beautyIndexes", "problems", "solutions", "detailedAnalysis"]
    })
}
