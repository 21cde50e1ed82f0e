//! Savings goal display formatting

use chrono::NaiveDate;

use crate::models::SavingsGoal;

const PROGRESS_BAR_WIDTH: usize = 20;

/// Format a goal as a row with a progress bar
pub fn format_goal_row(goal: &SavingsGoal, today: NaiveDate) -> String {
    let filled = ((goal.progress_percent() / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    let bar = format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    );

    let deadline = match goal.days_remaining(today) {
        Some(days) if days >= 0 => format!(" ({} days left)", days),
        Some(_) => " (deadline passed)".to_string(),
        None => String::new(),
    };

    let icon = if goal.icon.is_empty() {
        String::new()
    } else {
        format!("{} ", goal.icon)
    };

    format!(
        "{} {}{:18} {} {} / {} ({:.0}%){}",
        goal.id,
        icon,
        goal.name,
        bar,
        goal.current_amount,
        goal.target_amount,
        goal.progress_percent(),
        deadline
    )
}

/// Format a list of goals
pub fn format_goal_list(goals: &[SavingsGoal], today: NaiveDate) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format_goal_row(goal, today));
        output.push('\n');
    }
    output
}
