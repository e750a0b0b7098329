//! Text rendering of a [`Screen`].

use std::fmt;

use crate::boundary::Screen;
use crate::content::Content;
use crate::page::{PageView, ResultsView};
use crate::table::Cell;

const AVATAR_MARK: &str = "[avatar]";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit OSC 8 escape sequences so supporting terminals make names and
    /// avatars clickable.
    pub hyperlinks: bool,
}

/// A screen paired with how to draw it.
pub struct Rendered<'a> {
    pub screen: &'a Screen,
    pub options: RenderOptions,
}

pub fn render(screen: &Screen, options: RenderOptions) -> String {
    Rendered { screen, options }.to_string()
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.screen {
            Screen::Page(view) => write_page(f, view, self.options),
            Screen::Crashed { message, reload } => {
                writeln!(f, "{message}")?;
                writeln!(f, "[{reload}]")
            }
        }
    }
}

fn write_page(f: &mut impl fmt::Write, view: &PageView, options: RenderOptions) -> fmt::Result {
    if let Some(message) = &view.notification {
        writeln!(f, "[!] {message}")?;
        writeln!(f)?;
    }

    writeln!(f, "{}", view.title)?;
    writeln!(f, "{}", "=".repeat(view.title.len()))?;
    writeln!(f, "{}: {}", view.filter_label, view.filter)?;
    if view.search_button.disabled {
        writeln!(f, "[{} ...]", view.search_button.label)?;
    } else {
        writeln!(f, "[{}]", view.search_button.label)?;
    }
    writeln!(f)?;

    match &view.content {
        Content::Prompt(message) | Content::Empty(message) => writeln!(f, "{message}"),
        Content::Results(results) => write_results(f, results, options),
    }
}

fn write_results(f: &mut impl fmt::Write, results: &ResultsView, options: RenderOptions) -> fmt::Result {
    let table = &results.table;

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
            *width = (*width).max(visible_width(cell, options));
        }
    }

    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{h:<w$}"))
        .collect();
    writeln!(f, "{}", header.join("  ").trim_end())?;
    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    writeln!(f, "{}", "-".repeat(total_width))?;

    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| render_cell(cell, w, options))
            .collect();
        writeln!(f, "{}", cells.join("  ").trim_end())?;
    }

    let pagination = &results.pagination;
    writeln!(f)?;
    writeln!(
        f,
        "Rows per page: {}  {}  {} previous page | next page {}",
        pagination.rows_per_page,
        pagination.summary(),
        if pagination.previous_enabled { "<" } else { " " },
        if pagination.next_enabled { ">" } else { " " },
    )
}

fn visible_width(cell: &Cell, options: RenderOptions) -> usize {
    match cell {
        Cell::Repository { .. } if options.hyperlinks => {
            AVATAR_MARK.len() + 1 + cell.text().chars().count()
        }
        _ => cell.text().chars().count(),
    }
}

fn hyperlink(href: &str, text: &str) -> String {
    format!("\u{1b}]8;;{href}\u{1b}\\{text}\u{1b}]8;;\u{1b}\\")
}

fn render_cell(cell: &Cell, width: usize, options: RenderOptions) -> String {
    let padding = " ".repeat(width.saturating_sub(visible_width(cell, options)));

    match cell {
        Cell::Repository { avatar, link } if options.hyperlinks => format!(
            "{} {}{padding}",
            hyperlink(&avatar.src, AVATAR_MARK),
            hyperlink(&link.href, &link.text),
        ),
        _ => format!("{}{padding}", cell.text()),
    }
}
