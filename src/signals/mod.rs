//! Signal evaluation interfaces.

pub mod categories;
pub mod decision;
pub mod engine;
pub mod rules;
pub mod scoring;

pub use decision::{advise, Advice, AdviceSet, Tone};
pub use engine::{EvaluationInput, SignalEvaluator};
pub use rules::{Rule, RuleMatch, RuleTable};
pub use scoring::{aggregate_score, ScoreCard, ScoreInputs};
