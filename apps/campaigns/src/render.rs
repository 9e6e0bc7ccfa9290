//! Plain-text rendering of the campaign page for the terminal.

use client_core::{
    view::{CampaignRow, PageView, ToggleIcon, EMPTY_MESSAGE, LOADING_MESSAGE},
    Notifier,
};

const HEADERS: [&str; 6] = [
    "ID",
    "CAMPAIGN",
    "CREATED",
    "SENDER ACCOUNT",
    "PROSPECT LIST",
    "ACTIONS",
];

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("✔ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✘ {message}");
    }
}

pub fn render_page(view: &PageView) -> String {
    match view {
        PageView::Loading => format!("{LOADING_MESSAGE}\n"),
        PageView::Empty => format!("{EMPTY_MESSAGE} (campaigns create)\n"),
        PageView::Table(rows) => render_table(rows),
    }
}

fn render_table(rows: &[CampaignRow]) -> String {
    let cells: Vec<[String; 6]> = rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row_cells(row: &CampaignRow) -> [String; 6] {
    let action = if row.deleting {
        "deleting...".to_string()
    } else {
        match row.toggle_icon {
            ToggleIcon::Pause => "pause".to_string(),
            ToggleIcon::Play => "play".to_string(),
        }
    };
    [
        row.id.to_string(),
        format!("{} [{}]", row.name, row.status_label),
        row.created_on.clone(),
        format!(
            "({}) {} / {}",
            row.sender.initials, row.sender.name, row.sender.provider
        ),
        row.list_summary.clone().unwrap_or_else(|| "-".to_string()),
        action,
    ]
}

fn push_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
