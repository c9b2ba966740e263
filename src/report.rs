//! Text and JSON rendering of demo results.

use colored::*;
use eyre::Result;
use tasktrack::domain::{Priority, ProjectTask, Task};

use crate::config::DisplayConfig;
use crate::demo::DemoReport;

fn priority_label(priority: Priority) -> ColoredString {
    let label = format!("{:<6}", priority.as_str());
    match priority {
        Priority::High => label.red().bold(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.dimmed(),
    }
}

fn format_task(task: &Task, display: &DisplayConfig) -> String {
    let mark = if task.completed { "[x]".green() } else { "[ ]".normal() };
    let due = task
        .due
        .map(|d| format!(" (due {})", d.format(&display.date_format)))
        .unwrap_or_default();
    format!("{} {} {}{}  {}", mark, priority_label(task.priority), task.title, due, task.id.dimmed())
}

fn format_project_task(entry: &ProjectTask, display: &DisplayConfig) -> String {
    format!("{:<12} {}", entry.project.cyan(), format_task(&entry.task, display))
}

/// Render the report as colored text.
pub fn render_text(report: &DemoReport, display: &DisplayConfig) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "{} {} (tie-break: {})",
        "Now:".bold(),
        report.now.format(&display.date_format),
        report.tie_break
    ));
    out.push(format!("{} {}", "Completed:".green(), report.completed_ids.join(", ")));

    for project in &report.projects {
        out.push(String::new());
        out.push(format!("{}", project.name.cyan().bold()));
        for task in project.active.iter().chain(project.completed.iter()) {
            out.push(format!("  {}", format_task(task, display)));
        }
        let stats = &project.stats;
        let levels: Vec<String> = Priority::ALL
            .iter()
            .map(|&p| format!("{} {}", p, stats.count(p)))
            .collect();
        out.push(format!(
            "  {} total {}, active {}, completed {}, {}",
            "Stats:".bold(),
            stats.total,
            stats.active(),
            stats.completed,
            levels.join(", ")
        ));
    }

    out.push(String::new());
    out.push(format!("{}", "By priority".bold()));
    for entry in &report.by_priority {
        out.push(format!("  {}", format_project_task(entry, display)));
    }

    out.push(String::new());
    out.push(format!("{}", "Overdue".red().bold()));
    if report.overdue.is_empty() {
        out.push("  nothing overdue".to_string());
    }
    for entry in &report.overdue {
        out.push(format!("  {}", format_project_task(entry, display)));
    }

    out.join("\n")
}

/// Render the report as pretty JSON.
pub fn render_json(report: &DemoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
