//! 美容指標の固定リスト
//!
//! プロンプト生成とモックフォールバックの両方がこのリストを参照する。
//! 返却されるbeautyIndexesはこのリストと同数・同名である想定だが、
//! 照合は名前の文字列一致で行う（位置には依存しない）。

/// 美容指標の定義（名前＋絵文字）
#[derive(Debug, Clone, Copy)]
pub struct BeautyMetric {
    pub name: &'static str,
    pub emoji: &'static str,
}

/// 固定の10指標
pub const BEAUTY_METRICS: &[BeautyMetric] = &[
    BeautyMetric { name: "Facial Symmetry", emoji: "⚖️" },
    BeautyMetric { name: "Skin Glow Index", emoji: "✨" },
    BeautyMetric { name: "Eye Attractiveness Index", emoji: "👁️" },
    BeautyMetric { name: "Facial Golden Ratio", emoji: "⭐" },
    BeautyMetric { name: "Jawline Definition", emoji: "🗿" },
    BeautyMetric { name: "Hair Health & Density", emoji: "💇‍♀️" },
    BeautyMetric { name: "Smile Radiance", emoji: "😊" },
    BeautyMetric { name: "Posture & Alignment", emoji: "🧘‍♀️" },
    BeautyMetric { name: "Youthful Vitality", emoji: "🌱" },
    BeautyMetric { name: "Overall Charm", emoji: "💖" },
];

/// 指標名をカンマ区切りで連結（プロンプト用）
pub fn metric_names_joined() -> String {
    BEAUTY_METRICS
        .iter()
        .map(|m| m.name)
        .collect::<Vec<_>>()
        .join(", ")
}
