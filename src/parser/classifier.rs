//! Keyword-based category classification.
//!
//! A static table maps each category id to an ordered keyword list. The
//! first category, in declaration order, with any keyword appearing as a
//! literal substring of the utterance wins. No match returns `None`; the
//! assembler, not the classifier, applies the default-category policy.

use log::debug;

/// Category ids paired with their trigger keywords, in priority order.
/// Ids must line up with the registry defaults in [`crate::category`].
pub const CATEGORY_KEYWORDS: [(&str, &[&str]); 4] = [
    ("work", &["工作", "會議", "開會", "報告", "專案", "任務", "上班"]),
    ("personal", &["個人", "私人", "家庭", "購物", "休息"]),
    ("health", &["運動", "健身", "跑步", "游泳", "瑜珈", "醫生", "看醫生", "健康"]),
    ("social", &["聚餐", "聚會", "朋友", "約會", "電影", "社交", "派對"]),
];

/// Return the id of the first category with a keyword in the utterance.
pub fn classify(utterance: &str) -> Option<&'static str> {
    for (category_id, keywords) in CATEGORY_KEYWORDS {
        for keyword in keywords {
            if utterance.contains(keyword) {
                debug!("Keyword '{}' classified utterance as '{}'", keyword, category_id);
                return Some(category_id);
            }
        }
    }
    None
}
