//! Savings goal model
//!
//! A goal tracks progress toward a fixed target amount. Linked transactions
//! contribute their full amount; `current_amount` is clamped to
//! `[0, target_amount]` on every adjustment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal with a target amount and accumulated progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Unique identifier
    pub id: GoalId,

    /// Display name
    pub name: String,

    /// Category label (e.g. "Travel", "Emergency")
    #[serde(default)]
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Display icon (emoji or short label)
    #[serde(default)]
    pub icon: String,

    /// Target amount, fixed at creation; editable only by a direct goal update
    pub target_amount: Money,

    /// Accumulated progress, always within [0, target_amount]
    pub current_amount: Money,

    /// Optional deadline, used only for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl SavingsGoal {
    /// Create a new goal with zero progress
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            category: String::new(),
            description: String::new(),
            icon: String::new(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
        }
    }

    /// Apply a signed contribution delta, clamping the result to
    /// `[0, target_amount]`
    pub fn apply(&mut self, delta: Money) {
        self.current_amount =
            (self.current_amount + delta).clamp_to(Money::zero(), self.target_amount);
    }

    /// Overwrite the progress directly, clamped to `[0, target_amount]`
    pub fn set_progress(&mut self, amount: Money) {
        self.current_amount = amount.clamp_to(Money::zero(), self.target_amount);
    }

    /// Progress as a percentage of the target (0.0 - 100.0)
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount.is_zero() {
            return 0.0;
        }
        (self.current_amount.cents() as f64 / self.target_amount.cents() as f64) * 100.0
    }

    /// Check if the goal has been fully funded
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Days until the deadline relative to the given date; negative when
    /// the deadline has passed, None when no deadline is set
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.deadline
            .map(|deadline| deadline.signed_duration_since(today).num_days())
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::MissingName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {} ({:.0}%)",
            self.name,
            self.current_amount,
            self.target_amount,
            self.progress_percent()
        )
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    MissingName,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Goal name is required"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Target amount must be greater than 0 (got {})", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal() {
        let goal = SavingsGoal::new("Vacation", Money::from_cents(120_000));
        assert_eq!(goal.current_amount, Money::zero());
        assert!(!goal.is_complete());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_apply_clamps_at_target() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_cents(120_000));
        goal.apply(Money::from_cents(100_000));
        assert_eq!(goal.current_amount, Money::from_cents(100_000));

        // Overshoot clamps to target
        goal.apply(Money::from_cents(50_000));
        assert_eq!(goal.current_amount, Money::from_cents(120_000));
        assert!(goal.is_complete());
    }

    #[test]
    fn test_apply_clamps_at_zero() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_cents(120_000));
        goal.apply(Money::from_cents(30_000));
        goal.apply(-Money::from_cents(50_000));
        assert_eq!(goal.current_amount, Money::zero());
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_cents(1000));
        goal.set_progress(Money::from_cents(2500));
        assert_eq!(goal.current_amount, Money::from_cents(1000));
        goal.set_progress(-Money::from_cents(100));
        assert_eq!(goal.current_amount, Money::zero());
    }

    #[test]
    fn test_progress_percent() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_cents(120_000));
        goal.apply(Money::from_cents(100_000));
        let percent = goal.progress_percent();
        assert!((percent - 83.33).abs() < 0.01);
    }

    #[test]
    fn test_days_remaining() {
        let mut goal = SavingsGoal::new("Vacation", Money::from_cents(1000));
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(goal.days_remaining(today), None);

        goal.deadline = NaiveDate::from_ymd_opt(2025, 1, 25);
        assert_eq!(goal.days_remaining(today), Some(10));

        goal.deadline = NaiveDate::from_ymd_opt(2025, 1, 10);
        assert_eq!(goal.days_remaining(today), Some(-5));
    }

    #[test]
    fn test_validate() {
        let mut goal = SavingsGoal::new("", Money::from_cents(1000));
        assert_eq!(goal.validate(), Err(GoalValidationError::MissingName));

        goal.name = "Vacation".to_string();
        goal.target_amount = Money::zero();
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut goal = SavingsGoal::new("Emergency fund", Money::from_cents(500_000));
        goal.icon = "🛟".to_string();
        goal.deadline = NaiveDate::from_ymd_opt(2025, 12, 31);

        let json = serde_json::to_string(&goal).unwrap();
        let back: SavingsGoal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, goal);
    }
}
