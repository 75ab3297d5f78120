/// Rule-based course recommendation
mod engine;
mod error;
pub mod prereq;
mod types;
pub mod year;

pub use engine::Recommender;
pub use error::RecommendError;
pub use types::*;
