//! Canned recommendation texts for each verdict category

use serde::{Deserialize, Serialize};

use crate::models::{
    IndicatorSnapshot, PerformanceLabel, Recommendation, SignalVerdict, SupportResistanceZone,
    TrendSignal, VolatilityRegime,
};
use crate::reports::format::{format_currency, format_pct};

/// Tone of an advice block, for the presentation layer to color it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
    Negative,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub tone: Tone,
    pub headline: String,
    pub decision: String,
    pub points: Vec<String>,
}

impl Advice {
    fn new(tone: Tone, headline: impl Into<String>, decision: impl Into<String>) -> Self {
        Self {
            tone,
            headline: headline.into(),
            decision: decision.into(),
            points: Vec::new(),
        }
    }

    fn point(mut self, text: impl Into<String>) -> Self {
        self.points.push(text.into());
        self
    }
}

/// All advice blocks for one verdict, in report order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceSet {
    pub performance: Advice,
    pub volatility: Advice,
    pub trend: Advice,
    pub support_resistance: Advice,
    pub overall: Advice,
}

pub fn advise(verdict: &SignalVerdict, snapshot: &IndicatorSnapshot) -> AdviceSet {
    AdviceSet {
        performance: performance_advice(verdict, snapshot),
        volatility: volatility_advice(verdict.volatility_regime),
        trend: trend_advice(verdict.trend_signal, snapshot),
        support_resistance: zone_advice(verdict, snapshot),
        overall: overall_advice(verdict.overall_recommendation, snapshot),
    }
}

fn insufficient(topic: &str) -> Advice {
    Advice::new(
        Tone::Info,
        format!("INSUFFICIENT DATA: not enough history to assess {}.", topic),
        "No decision",
    )
}

pub fn performance_advice(verdict: &SignalVerdict, snapshot: &IndicatorSnapshot) -> Advice {
    let (Some(label), Some(total)) = (verdict.period_performance, snapshot.total_return_pct) else {
        return insufficient("period performance");
    };
    match label {
        PerformanceLabel::Positive => Advice::new(
            Tone::Positive,
            format!(
                "POSITIVE PERIOD: the share gained {} over the analysed period.",
                format_pct(total)
            ),
            "Hold or increase positions",
        )
        .point("The upward trend reflects solid company performance"),
        PerformanceLabel::Negative => Advice::new(
            Tone::Negative,
            format!(
                "NEGATIVE PERIOD: the share lost {} over the analysed period.",
                format_pct(total.abs())
            ),
            "Watch financial indicators and company strategy closely before investing",
        ),
    }
}

pub fn volatility_advice(regime: VolatilityRegime) -> Advice {
    match regime {
        VolatilityRegime::Low => Advice::new(
            Tone::Positive,
            "LOW VOLATILITY: the share carries moderate risk.",
            "Suitable for cautious profiles",
        )
        .point("Predictable moves and limited risk"),
        VolatilityRegime::Medium => Advice::new(
            Tone::Caution,
            "MEDIUM VOLATILITY: risk is balanced.",
            "Diversify the portfolio to mitigate risk",
        )
        .point("Regular monitoring recommended"),
        VolatilityRegime::High => Advice::new(
            Tone::Negative,
            "HIGH VOLATILITY: elevated risk.",
            "Allocate capital carefully",
        )
        .point("Consider hedging strategies or wait for stabilization"),
        VolatilityRegime::InsufficientData => insufficient("volatility"),
    }
}

pub fn trend_advice(signal: TrendSignal, snapshot: &IndicatorSnapshot) -> Advice {
    let price = format_currency(snapshot.current_price);
    let ma_short = snapshot.ma_short.map(format_currency).unwrap_or_default();
    let ma_long = snapshot.ma_long.map(format_currency).unwrap_or_default();

    match signal {
        TrendSignal::StrongBullish => Advice::new(
            Tone::Positive,
            format!(
                "STRONG BULLISH SIGNAL: price ({price}) > MA short ({ma_short}) \
                 > MA long ({ma_long})"
            ),
            "BUY SIGNAL",
        )
        .point("Short-term uptrend confirmed")
        .point("Positive momentum")
        .point("Keep existing positions"),
        TrendSignal::MixedBullish => Advice::new(
            Tone::Caution,
            format!(
                "MIXED SIGNAL: price ({price}) > MA short ({ma_short}) \
                 but MA short <= MA long ({ma_long})"
            ),
            "CAUTION / PATIENCE",
        )
        .point("Short term positive but long term negative")
        .point("Wait for the averages to cross")
        .point("Watch the current support"),
        TrendSignal::StrongBearish => Advice::new(
            Tone::Negative,
            format!(
                "STRONG BEARISH SIGNAL: price ({price}) < MA short ({ma_short}) \
                 < MA long ({ma_long})"
            ),
            "SELL SIGNAL",
        )
        .point("Downtrend confirmed")
        .point("Risk of further decline")
        .point("Consider reducing positions"),
        TrendSignal::Neutral => Advice::new(
            Tone::Info,
            format!("NEUTRAL SIGNAL: price ({price}) close to its moving averages"),
            "HOLD / OBSERVE",
        )
        .point("Market consolidating")
        .point("Wait for a clear direction")
        .point("Do not open new positions"),
        TrendSignal::InsufficientData => insufficient("the moving-average trend"),
    }
}

pub fn zone_advice(verdict: &SignalVerdict, snapshot: &IndicatorSnapshot) -> Advice {
    let price = format_currency(snapshot.current_price);
    let Some(levels) = snapshot.support_resistance else {
        return insufficient("support and resistance");
    };

    match verdict.support_resistance_zone {
        SupportResistanceZone::Safe => {
            let mut advice = Advice::new(
                Tone::Positive,
                format!("SAFE ZONE: the price ({price}) sits inside the safety band."),
                "Hold positions, healthy equilibrium zone",
            );
            if let Some(d) = verdict.distance_to_support_pct {
                advice = advice.point(format!("Distance to support: {}", format_pct(d)));
            }
            if let Some(d) = verdict.distance_to_resistance_pct {
                advice = advice.point(format!("Distance to resistance: {}", format_pct(d)));
            }
            advice
        }
        SupportResistanceZone::NearSupport => Advice::new(
            Tone::Caution,
            format!(
                "NEAR SUPPORT: the price ({price}) is close to support ({}).",
                format_currency(levels.support)
            ),
            "ACTIVE MONITORING",
        )
        .point("If support breaks, consider reducing the position")
        .point("On a rebound, a potential buying opportunity"),
        SupportResistanceZone::NearResistance => Advice::new(
            Tone::Caution,
            format!(
                "NEAR RESISTANCE: the price ({price}) is close to resistance ({}).",
                format_currency(levels.resistance)
            ),
            "TAKE PROFITS",
        )
        .point("Short-term correction risk")
        .point("Consider a partial sale to lock in gains"),
        SupportResistanceZone::InsufficientData => insufficient("support and resistance"),
    }
}

pub fn overall_advice(recommendation: Recommendation, snapshot: &IndicatorSnapshot) -> Advice {
    match recommendation {
        Recommendation::Buy => {
            let stop = snapshot
                .support_resistance
                .map(|sr| format_currency(sr.support))
                .unwrap_or_default();
            Advice::new(
                Tone::Positive,
                "MAIN RECOMMENDATION: BUY / INCREASE POSITIONS",
                format!("Open or increase positions with a stop-loss below {stop}"),
            )
            .point("Positive performance")
            .point("Upward trend")
            .point("Controlled volatility")
            .point("Price above support")
        }
        Recommendation::Hold => Advice::new(
            Tone::Caution,
            "MAIN RECOMMENDATION: HOLD / OBSERVE",
            "Keep existing positions and wait for further signals",
        )
        .point("Wait for more clarity on the trend")
        .point("Watch supports closely")
        .point("Avoid opening large new positions"),
        Recommendation::Sell => Advice::new(
            Tone::Negative,
            "MAIN RECOMMENDATION: SELL / REDUCE POSITIONS",
            "Consider reducing positions to limit potential losses",
        )
        .point("Negative performance")
        .point("Downward trend")
        .point("High risk"),
        Recommendation::InsufficientData => insufficient("an overall recommendation"),
    }
}

