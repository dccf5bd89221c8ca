//! モックフォールバック生成
//!
//! API障害時に差し替えるスキーマ準拠のローカル結果。
//! スコアだけが乱数（60〜99の一様分布）で、他は固定文。
//! 乱数源は引数で差し替え可能（テストではシード固定）。

use crate::metrics::BEAUTY_METRICS;
use crate::types::{AnalysisResult, BeautyIndex, DetailedAnalysis, MindMapNode};
use rand::Rng;

/// モック結果を生成
///
/// 固定指標リストの1項目につきBeautyIndexを1つ、同順・同絵文字で返す。
pub fn mock_result<R: Rng>(rng: &mut R) -> AnalysisResult {
    AnalysisResult {
        beauty_indexes: BEAUTY_METRICS
            .iter()
            .map(|metric| BeautyIndex {
                name: metric.name.to_string(),
                score: rng.gen_range(60..100) as f64,
                emoji: metric.emoji.to_string(),
            })
            .collect(),
        problems: vec![
            node("p1", "Low Skin Glow ✨", "✨"),
            node("p2", "Slight Asymmetry", "↔️"),
            node("p3", "Weak Jawline 🗿", "🗿"),
            node("p4", "Uneven Posture 🧍‍♂️", "🧍‍♂️"),
        ],
        solutions: vec![
            node("s1", "Incorporate Vitamin C serums and stay hydrated. 💧", "🧴"),
            node("s2", "Try facial exercises and lymphatic drainage massage. 💆‍♂️", "💆‍♂️"),
            node("s3", "Chew hard gum and practice mewing for definition. 🔥", "🔥"),
            node("s4", "Focus on core strength and stretching exercises daily. 🧘‍♀️", "🧘‍♀️"),
        ],
        detailed_analysis: DetailedAnalysis {
            introduction: "Welcome to your Beutoria analysis! 🌸 We've analyzed your photo to reveal your unique beauty profile. Remember, beauty is diverse and this analysis is here to highlight your amazing features and offer empowering suggestions. Let's glow! ✨".to_string(),
            strengths: vec![
                "Your Eye Attractiveness Index is remarkably high! Your eyes are captivating and expressive. 👁️".to_string(),
                "You possess a strong Facial Golden Ratio, indicating harmonious facial proportions. ⭐".to_string(),
                "Your Hair Health & Density appears to be excellent, contributing to a youthful and vibrant look. 💇‍♀️".to_string(),
            ],
            weaknesses: vec![
                "The Skin Glow Index could be enhanced. This can be influenced by diet, hydration, and skincare.".to_string(),
                "There is room for improvement in Posture & Alignment, which can significantly impact overall presence.".to_string(),
            ],
            suggestions: "To elevate your natural radiance, consider a skincare routine rich in antioxidants. Incorporating daily facial massage can improve circulation and symmetry. For posture, simple exercises like wall sits and shoulder blade squeezes can make a world of difference. Celebrate your unique beauty every day! 💛".to_string(),
            conclusion: "You are radiant! 💖 This analysis is a stepping stone on your personal beauty journey. Embrace your strengths, explore these suggestions, and most importantly, love the skin you're in. Keep shining! 🍀".to_string(),
        },
    }
}

fn node(id: &str, text: &str, emoji: &str) -> MindMapNode {
    MindMapNode {
        id: id.to_string(),
        text: text.to_string(),
        emoji: emoji.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mock_has_one_index_per_metric() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = mock_result(&mut rng);

        assert_eq!(result.beauty_indexes.len(), BEAUTY_METRICS.len());
        for (index, metric) in result.beauty_indexes.iter().zip(BEAUTY_METRICS) {
            assert_eq!(index.name, metric.name);
            assert_eq!(index.emoji, metric.emoji);
        }
    }

    #[test]
    fn test_mock_scores_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let result = mock_result(&mut rng);
            for index in &result.beauty_indexes {
                assert!(
                    (60.0..=99.0).contains(&index.score),
                    "スコアが範囲外: {}",
                    index.score
                );
            }
        }
    }

    #[test]
    fn test_mock_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        assert_eq!(mock_result(&mut rng1), mock_result(&mut rng2));
    }

    #[test]
    fn test_mock_is_structurally_complete() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = mock_result(&mut rng);

        assert!(!result.problems.is_empty());
        assert!(!result.solutions.is_empty());
        assert!(!result.detailed_analysis.introduction.is_empty());
        assert!(!result.detailed_analysis.strengths.is_empty());
        assert!(!result.detailed_analysis.weaknesses.is_empty());
        assert!(!result.detailed_analysis.suggestions.is_empty());
        assert!(!result.detailed_analysis.conclusion.is_empty());
    }
}
