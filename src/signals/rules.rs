//! Ordered threshold rules: evaluated top-down, first match wins.

/// A named predicate mapped to a label
pub struct Rule<C, L> {
    pub name: &'static str,
    pub predicate: fn(&C) -> bool,
    pub label: L,
}

/// Outcome of a table evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<L> {
    pub label: L,
    /// Name of the rule that fired, or of the fallback
    pub rule: &'static str,
}

/// Ordered rule list with a fallback label used when nothing matches.
pub struct RuleTable<C, L> {
    category: &'static str,
    rules: Vec<Rule<C, L>>,
    fallback: (&'static str, L),
}

impl<C, L: Copy> RuleTable<C, L> {
    pub fn new(category: &'static str, fallback_name: &'static str, fallback: L) -> Self {
        Self {
            category,
            rules: Vec::new(),
            fallback: (fallback_name, fallback),
        }
    }

    /// Append a rule; precedence follows insertion order.
    pub fn rule(mut self, name: &'static str, predicate: fn(&C) -> bool, label: L) -> Self {
        self.rules.push(Rule {
            name,
            predicate,
            label,
        });
        self
    }

    pub fn evaluate(&self, context: &C) -> RuleMatch<L> {
        self.rules
            .iter()
            .find(|rule| (rule.predicate)(context))
            .map(|rule| RuleMatch {
                label: rule.label,
                rule: rule.name,
            })
            .unwrap_or(RuleMatch {
                label: self.fallback.1,
                rule: self.fallback.0,
            })
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn rules(&self) -> &[Rule<C, L>] {
        &self.rules
    }
}
