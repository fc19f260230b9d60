use serde::Serialize;

/// Fixed weights of the priority formula.
///
/// ```text
/// score = urgency * 0.4 + importance * 0.3 + deadline * 0.2 + effort_efficiency * 0.1
/// ```
///
/// The weights are not user-configurable; they are exported alongside results
/// so a scored file documents how it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub urgency_weight: f64,
    pub importance_weight: f64,
    pub deadline_weight: f64,
    pub effort_weight: f64,
}

pub const WEIGHTS: ScoringWeights = ScoringWeights {
    urgency_weight: 0.4,
    importance_weight: 0.3,
    deadline_weight: 0.2,
    effort_weight: 0.1,
};

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.urgency_weight + self.importance_weight + self.deadline_weight + self.effort_weight
    }
}
