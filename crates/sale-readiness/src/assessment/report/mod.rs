mod content;
mod synthesis;
pub mod views;

pub use content::{category_recommendations, GENERIC_RECOMMENDATIONS, READY_RECOMMENDATIONS};
pub use synthesis::{
    category_analysis, overall_score, recommendations, synthesize, Report,
    CATEGORY_RECOMMENDATION_GATE, HIGH_TIER_THRESHOLD,
};
