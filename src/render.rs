//! Text rendering of the task table.

use crate::models::Task;

const HEADERS: [&str; 6] = ["ID", "Task", "Due Date", "Status", "Priority", "Action"];

fn row(task: &Task) -> [String; 6] {
    [
        format!("#{}", task.id),
        task.task.clone(),
        task.due_date_label(),
        task.status_label().to_string(),
        task.priority.to_string(),
        task.toggle_label().to_string(),
    ]
}

/// Render tasks, in the given order, as an aligned table.
pub fn table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let rows: Vec<[String; 6]> = tasks.iter().map(|t| row(t)).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.map(String::from).iter(), &widths);
    push_line(
        &mut out,
        widths.map(|w| "-".repeat(w)).iter(),
        &widths,
    );
    for cells in &rows {
        push_line(&mut out, cells.iter(), &widths);
    }
    out.pop();
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a String>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Banner line shown above the table
pub fn banner(message: &str) -> String {
    format!("[ {message} ]")
}
