use lumilab_core::content::STEPS;

use super::CommandResult;

pub fn run() -> CommandResult {
    let mut lines = Vec::new();
    for step in STEPS.iter() {
        lines.push(format!("Step {}: {}", step.number, step.title));
        lines.extend(step.points.iter().map(|point| format!("  - {point}")));
    }
    CommandResult::text(lines.join("\n"))
}
