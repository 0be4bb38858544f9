//! Progress, achievement, and trend signals for savings goals.

use uuid::Uuid;

use crate::domain::Dream;

/// Variation (percent) at or above which an encouragement fires.
pub const ENCOURAGEMENT_THRESHOLD: f64 = 10.0;
/// Variation (percent) at or below which a warning fires.
pub const WARNING_THRESHOLD: f64 = -10.0;

/// Consumer-facing signals derived from a savings change. Presentation
/// lifecycle (toasts, dismissal) stays outside the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Savings first reached a dream's target.
    DreamAchieved { dream_id: Uuid, name: String },
    /// Savings grew by at least [`ENCOURAGEMENT_THRESHOLD`] percent.
    Encouragement { variation: f64 },
    /// Savings shrank by at least ten percent.
    Warning { variation: f64 },
}

pub struct GoalService;

impl GoalService {
    /// Progress toward a target in percent, capped at 100. Zero when no
    /// target is set.
    pub fn dream_progress(current_savings: f64, target_amount: f64) -> f64 {
        if target_amount <= 0.0 {
            return 0.0;
        }
        ((current_savings / target_amount) * 100.0).min(100.0)
    }

    pub fn is_dream_achieved(current_savings: f64, target_amount: f64) -> bool {
        current_savings >= target_amount
    }

    /// Percent change between savings snapshots. Starting from zero counts
    /// as +100 so "started from nothing" still registers; two empty
    /// snapshots stay silent.
    pub fn savings_variation(current_savings: f64, previous_savings: f64) -> f64 {
        if previous_savings == 0.0 {
            return if current_savings > 0.0 { 100.0 } else { 0.0 };
        }
        ((current_savings - previous_savings) / previous_savings) * 100.0
    }

    /// Pure signal computation over a snapshot diff. Dreams with a positive
    /// target, not yet flagged achieved, and now covered by savings yield a
    /// celebratory signal; the trend signal follows.
    pub fn evaluate_signals(
        previous_savings: f64,
        current_savings: f64,
        dreams: &[Dream],
    ) -> Vec<Signal> {
        let mut signals = Vec::new();
        for dream in dreams {
            if dream.target_amount > 0.0
                && !dream.achieved
                && Self::is_dream_achieved(current_savings, dream.target_amount)
            {
                signals.push(Signal::DreamAchieved {
                    dream_id: dream.id,
                    name: dream.name.clone(),
                });
            }
        }
        let variation = Self::savings_variation(current_savings, previous_savings);
        if variation >= ENCOURAGEMENT_THRESHOLD {
            signals.push(Signal::Encouragement { variation });
        } else if variation <= WARNING_THRESHOLD {
            signals.push(Signal::Warning { variation });
        }
        signals
    }
}
