use pokedex_protocol::SpeciesSummary;
use tracing::debug;

use crate::config::BlankFieldPolicy;
use crate::config::FilterConfig;
use crate::criteria::FieldValue;
use crate::criteria::FilterCriteria;

/// Absorbs float noise in `value * 10` before comparing with integer units.
const UNIT_EPSILON: f64 = 1e-9;

/// Capitalizes each word (split on spaces and hyphens) and lowercases the
/// rest: `"fire"` becomes `"Fire"`, `"mr-mime"` becomes `"Mr-Mime"`.
pub fn display_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;
    for c in raw.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = c == ' ' || c == '-';
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

/// Applies [`FilterCriteria`] to a roster.
#[derive(Debug, Clone, Default)]
pub struct PredicateEvaluator {
    blank_fields: BlankFieldPolicy,
}

impl PredicateEvaluator {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            blank_fields: config.blank_fields,
        }
    }

    /// Keeps the species satisfying every present criterion, in roster order.
    pub fn evaluate(
        &self,
        criteria: &FilterCriteria,
        mut roster: Vec<SpeciesSummary>,
    ) -> Vec<SpeciesSummary> {
        if criteria.has_no_criteria() {
            return roster;
        }
        let before = roster.len();
        roster.retain(|species| self.matches(criteria, species));
        debug!(
            generation = criteria.generation,
            kept = roster.len(),
            dropped = before - roster.len(),
            "evaluated filter criteria"
        );
        roster
    }

    /// Checks `type, type2, minHeight, maxHeight, minWeight, maxWeight` in
    /// that order and stops at the first failing criterion.
    pub fn matches(&self, criteria: &FilterCriteria, species: &SpeciesSummary) -> bool {
        self.check_type(criteria.primary_type.as_ref(), species.primary_type())
            && self.check_type(criteria.secondary_type.as_ref(), species.secondary_type())
            && self.check_measure(criteria.min_height.as_ref(), species.height, Bound::Min)
            && self.check_measure(criteria.max_height.as_ref(), species.height, Bound::Max)
            && self.check_measure(criteria.min_weight.as_ref(), species.weight, Bound::Min)
            && self.check_measure(criteria.max_weight.as_ref(), species.weight, Bound::Max)
    }

    fn check_type(&self, wanted: Option<&FieldValue<String>>, actual: Option<&str>) -> bool {
        match wanted {
            None => true,
            Some(FieldValue::Blank) => self.blank_passes(),
            Some(FieldValue::Set(wanted)) => {
                actual.is_some_and(|actual| display_case(actual) == display_case(wanted))
            }
        }
    }

    /// `actual` is in tenths of the criterion's unit (dm vs m, hg vs kg).
    fn check_measure(&self, limit: Option<&FieldValue<f64>>, actual: u32, bound: Bound) -> bool {
        match limit {
            None => true,
            Some(FieldValue::Blank) => self.blank_passes(),
            Some(FieldValue::Set(limit)) => {
                let limit = limit * 10.0;
                let actual = f64::from(actual);
                match bound {
                    Bound::Min => actual + UNIT_EPSILON >= limit,
                    Bound::Max => actual - UNIT_EPSILON <= limit,
                }
            }
        }
    }

    fn blank_passes(&self) -> bool {
        self.blank_fields == BlankFieldPolicy::Inactive
    }
}
