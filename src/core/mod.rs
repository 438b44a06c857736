//! Analysis orchestration: pipeline, memoization and the loaded session

pub mod cache;
pub mod pipeline;
pub mod session;

pub use cache::{AnalysisCache, CacheKey, SeriesFingerprint};
pub use pipeline::{AnalysisError, AnalysisPipeline, DateRange};
pub use session::AnalysisSession;
