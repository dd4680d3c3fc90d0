pub mod engine;
pub mod filters;
pub mod outcome;
pub mod render;

pub use engine::{OutfitRequest, Selector};
pub use outcome::{GenerationError, Recommendation, RecommendationResult};
pub use render::render;
