//! Text and JSON renderings of an `AnalysisReport`

use std::fmt::Write;

use crate::reports::format::{
    format_count, format_currency, format_pct, format_signed_pct, or_dash,
};
use crate::reports::AnalysisReport;
use crate::signals::Advice;

pub fn render_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Plain-text report, one section per analysis
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, r: &AnalysisReport) -> std::fmt::Result {
    let snap = &r.snapshot;
    let verdict = &r.verdict;

    writeln!(
        out,
        "{} analysis, {} to {} ({} sessions)",
        r.instrument, r.period.from, r.period.to, r.period.points
    )?;
    rule(out)?;

    section(out, "Key metrics")?;
    let km = &r.key_metrics;
    writeln!(
        out,
        "  Close            {} ({})",
        format_currency(km.current_close),
        or_dash(km.change_pct, format_signed_pct)
    )?;
    writeln!(out, "  Period high      {}", format_currency(km.period_high))?;
    writeln!(out, "  Period low       {}", format_currency(km.period_low))?;
    writeln!(out, "  Total volume     {}", format_count(km.total_volume))?;

    section(out, "Price statistics")?;
    writeln!(out, "  {:<18}{:>12}{:>12}{:>12}{:>12}", "", "Mean", "Min", "Max", "Std")?;
    for c in &r.statistics.price {
        writeln!(
            out,
            "  {:<18}{:>12}{:>12}{:>12}{:>12}",
            c.column,
            format_currency(c.mean),
            format_currency(c.min),
            format_currency(c.max),
            or_dash(c.std, format_currency)
        )?;
    }

    section(out, "Volume statistics")?;
    writeln!(out, "  {:<18}{:>16}{:>16}{:>16}", "", "Mean", "Min", "Max")?;
    for c in &r.statistics.volume {
        writeln!(
            out,
            "  {:<18}{:>16}{:>16}{:>16}",
            c.column,
            format_count(c.mean),
            format_count(c.min),
            format_count(c.max)
        )?;
    }

    section(out, "1. Price trend")?;
    writeln!(out, "  Initial price    {}", format_currency(snap.first_price))?;
    writeln!(out, "  Current price    {}", format_currency(snap.current_price))?;
    writeln!(out, "  Total return     {}", or_dash(snap.total_return_pct, format_signed_pct))?;
    advice(out, &r.advice.performance)?;

    section(out, "2. Volatility and risk")?;
    writeln!(out, "  Daily return std      {}", or_dash(snap.return_std_pct, format_pct))?;
    writeln!(out, "  Mean |daily return|   {}", or_dash(snap.mean_abs_return_pct, format_pct))?;
    writeln!(
        out,
        "  Mean price std ({}d)  {}",
        r.windows.volatility_window,
        or_dash(snap.mean_price_std, format_currency)
    )?;
    writeln!(out, "  Regime                {}", verdict.volatility_regime)?;
    advice(out, &r.advice.volatility)?;

    section(out, "3. Trading signals")?;
    writeln!(out, "  Current price    {}", format_currency(snap.current_price))?;
    writeln!(
        out,
        "  MA {:<2}            {}",
        r.windows.short_window,
        or_dash(snap.ma_short, format_currency)
    )?;
    writeln!(
        out,
        "  MA {:<2}            {}",
        r.windows.long_window,
        or_dash(snap.ma_long, format_currency)
    )?;
    writeln!(out, "  VWAP             {}", format_currency(snap.vwap))?;
    writeln!(out, "  Signal           {}", verdict.trend_signal)?;
    advice(out, &r.advice.trend)?;

    section(out, "4. Support and resistance")?;
    match snap.support_resistance {
        Some(sr) => {
            writeln!(out, "  Support ({}d)      {}", sr.window, format_currency(sr.support))?;
            writeln!(out, "  Resistance ({}d)   {}", sr.window, format_currency(sr.resistance))?;
        }
        None => writeln!(out, "  Support/resistance undefined")?,
    }
    writeln!(out, "  Zone             {}", verdict.support_resistance_zone)?;
    advice(out, &r.advice.support_resistance)?;

    section(out, "5. Synthesis")?;
    match verdict.aggregate_score {
        Some(score) => writeln!(out, "  Overall score    {}/5", score)?,
        None => writeln!(out, "  Overall score    undefined (insufficient data)")?,
    }
    if let Some(label) = verdict.return_label {
        writeln!(out, "  Return           {}", label)?;
    }
    if let Some(label) = verdict.risk_label {
        writeln!(out, "  Risk             {}", label)?;
    }
    if let Some(label) = verdict.direction_label {
        writeln!(out, "  Trend            {}", label)?;
    }
    writeln!(out, "  Recommendation   {}", verdict.overall_recommendation)?;
    advice(out, &r.advice.overall)?;

    rule(out)?;
    writeln!(
        out,
        "Generated automatically from historical data. Not investment advice."
    )
}

fn rule(out: &mut String) -> std::fmt::Result {
    writeln!(out, "{}", "-".repeat(72))
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)
}

fn advice(out: &mut String, advice: &Advice) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "  {}", advice.headline)?;
    writeln!(out, "  Decision: {}", advice.decision)?;
    for point in &advice.points {
        writeln!(out, "    - {}", point)?;
    }
    Ok(())
}
