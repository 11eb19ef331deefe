pub mod analysis;
pub mod catalog;
pub mod error;
pub mod fitting;
pub mod history;
pub mod model;
pub mod simulate;

pub use analysis::{analyze_swing, flex_for_head_speed, synthesize_swing};
pub use catalog::Catalog;
pub use error::EngineError;
pub use fitting::generate_recommendations;
pub use history::analysis_history;
pub use simulate::{base_distance_or_default, hit_with_modifier, simulate_hit};
