//! Signal evaluation: latest indicator values to a categorical verdict.

use tracing::{debug, warn};

use crate::indicators::IndicatorOutput;
use crate::models::signal::SignalReason;
use crate::models::{
    IndicatorSnapshot, PerformanceLabel, Recommendation, ReturnLabel, RiskLabel, SignalVerdict,
    SupportResistanceLevels, SupportResistanceZone, TrendSignal, VolatilityRegime,
};
use crate::signals::categories::{
    direction_label, performance_label, recommendation_rules, return_label_rules, risk_rules,
    trend_rules, volatility_regime_rules, zone_rules, TrendContext, ZoneContext,
};
use crate::signals::rules::RuleTable;
use crate::signals::scoring::{score, ScoreInputs};

/// Minimum number of points for any trend or return reading
pub const MIN_POINTS: usize = 2;

/// Everything the evaluator reads, with undefined values left as `None`
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationInput {
    pub points: usize,
    pub price: f64,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    pub total_return_pct: Option<f64>,
    pub mean_abs_return_pct: Option<f64>,
    pub return_std_pct: Option<f64>,
    pub support_resistance: Option<SupportResistanceLevels>,
}

impl EvaluationInput {
    pub fn from_snapshot(snapshot: &IndicatorSnapshot, points: usize) -> Self {
        Self {
            points,
            price: snapshot.current_price,
            ma_short: snapshot.ma_short,
            ma_long: snapshot.ma_long,
            total_return_pct: snapshot.total_return_pct,
            mean_abs_return_pct: snapshot.mean_abs_return_pct,
            return_std_pct: snapshot.return_std_pct,
            support_resistance: snapshot.support_resistance,
        }
    }

    fn has_history(&self) -> bool {
        self.points >= MIN_POINTS
    }
}

pub struct SignalEvaluator {
    trend: RuleTable<TrendContext, TrendSignal>,
    regime: RuleTable<f64, VolatilityRegime>,
    risk: RuleTable<f64, RiskLabel>,
    zone: RuleTable<ZoneContext, SupportResistanceZone>,
    recommendation: RuleTable<u8, Recommendation>,
    return_label: RuleTable<u8, ReturnLabel>,
}

impl SignalEvaluator {
    pub fn new() -> Self {
        Self {
            trend: trend_rules(),
            regime: volatility_regime_rules(),
            risk: risk_rules(),
            zone: zone_rules(),
            recommendation: recommendation_rules(),
            return_label: return_label_rules(),
        }
    }

    /// Evaluate a full indicator output; an empty series yields a verdict
    /// that is insufficient in every category.
    pub fn evaluate_output(&self, output: &IndicatorOutput) -> SignalVerdict {
        match &output.snapshot {
            Some(snapshot) => {
                self.evaluate(&EvaluationInput::from_snapshot(snapshot, output.series.len()))
            }
            None => {
                warn!("No price points to evaluate");
                Self::insufficient()
            }
        }
    }

    pub fn evaluate(&self, input: &EvaluationInput) -> SignalVerdict {
        let mut reasons = Vec::new();

        let trend_signal = self.trend_signal(input, &mut reasons);
        let volatility_regime = self.volatility_regime(input, &mut reasons);
        let support_resistance_zone = self.zone(input, &mut reasons);

        let risk_label = input.return_std_pct.map(|std| {
            let m = self.risk.evaluate(&std);
            push_reason(&mut reasons, self.risk.category(), m.rule);
            m.label
        });

        let card = self.score_inputs(input).map(|inputs| score(&inputs));
        if let Some(card) = &card {
            for component in card.components.iter().filter(|c| c.awarded) {
                push_reason(&mut reasons, "score", &component.name);
            }
        }
        let aggregate_score = card.map(|c| c.total);

        let overall_recommendation = match aggregate_score {
            Some(total) => {
                let m = self.recommendation.evaluate(&total);
                push_reason(&mut reasons, self.recommendation.category(), m.rule);
                m.label
            }
            None => Recommendation::InsufficientData,
        };
        let return_label = aggregate_score.map(|total| self.return_label.evaluate(&total).label);

        let direction_label = input.ma_short.map(|ma| direction_label(input.price, ma));
        let period_performance: Option<PerformanceLabel> = input
            .total_return_pct
            .filter(|_| input.has_history())
            .map(performance_label);

        debug!(
            trend = %trend_signal,
            regime = %volatility_regime,
            zone = %support_resistance_zone,
            score = ?aggregate_score,
            recommendation = %overall_recommendation,
            "Signal verdict"
        );

        SignalVerdict {
            trend_signal,
            volatility_regime,
            support_resistance_zone,
            aggregate_score,
            overall_recommendation,
            return_label,
            risk_label,
            direction_label,
            period_performance,
            distance_to_support_pct: input
                .support_resistance
                .and_then(|sr| sr.distance_to_support_pct(input.price)),
            distance_to_resistance_pct: input
                .support_resistance
                .and_then(|sr| sr.distance_to_resistance_pct(input.price)),
            reasons,
        }
    }

    fn trend_signal(
        &self,
        input: &EvaluationInput,
        reasons: &mut Vec<SignalReason>,
    ) -> TrendSignal {
        let (ma_short, ma_long) = match (input.ma_short, input.ma_long) {
            (Some(s), Some(l)) if input.has_history() => (s, l),
            _ => return TrendSignal::InsufficientData,
        };
        let m = self.trend.evaluate(&TrendContext {
            price: input.price,
            ma_short,
            ma_long,
        });
        push_reason(reasons, self.trend.category(), m.rule);
        m.label
    }

    fn volatility_regime(
        &self,
        input: &EvaluationInput,
        reasons: &mut Vec<SignalReason>,
    ) -> VolatilityRegime {
        let mean_abs = match input.mean_abs_return_pct {
            Some(v) if input.has_history() => v,
            _ => return VolatilityRegime::InsufficientData,
        };
        let m = self.regime.evaluate(&mean_abs);
        push_reason(reasons, self.regime.category(), m.rule);
        m.label
    }

    fn zone(
        &self,
        input: &EvaluationInput,
        reasons: &mut Vec<SignalReason>,
    ) -> SupportResistanceZone {
        let Some(levels) = input.support_resistance else {
            return SupportResistanceZone::InsufficientData;
        };
        let m = self.zone.evaluate(&ZoneContext {
            price: input.price,
            support: levels.support,
            resistance: levels.resistance,
        });
        push_reason(reasons, self.zone.category(), m.rule);
        m.label
    }

    fn score_inputs(&self, input: &EvaluationInput) -> Option<ScoreInputs> {
        if !input.has_history() {
            return None;
        }
        Some(ScoreInputs {
            total_return_pct: input.total_return_pct?,
            return_std_pct: input.return_std_pct?,
            price: input.price,
            ma_short: input.ma_short?,
            support: input.support_resistance?.support,
        })
    }

    fn insufficient() -> SignalVerdict {
        SignalVerdict {
            trend_signal: TrendSignal::InsufficientData,
            volatility_regime: VolatilityRegime::InsufficientData,
            support_resistance_zone: SupportResistanceZone::InsufficientData,
            aggregate_score: None,
            overall_recommendation: Recommendation::InsufficientData,
            return_label: None,
            risk_label: None,
            direction_label: None,
            period_performance: None,
            distance_to_support_pct: None,
            distance_to_resistance_pct: None,
            reasons: Vec::new(),
        }
    }
}

impl Default for SignalEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn push_reason(reasons: &mut Vec<SignalReason>, category: &str, rule: &str) {
    reasons.push(SignalReason {
        category: category.to_string(),
        rule: rule.to_string(),
    });
}
