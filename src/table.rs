//! Results table: repository records laid out as rows, fields shown verbatim.

use crate::models::Repository;

pub const HEADERS: [&str; 5] = ["Repository", "Stars", "Forks", "Open issues", "Updated at"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub alt: String,
    pub src: String,
}

/// Where a followed link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A new browser tab/window, `target="_blank"`.
    NewContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
    pub target: LinkTarget,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Repository { avatar: Avatar, link: Link },
    Text(String),
}

impl Cell {
    /// Visible text of the cell. The avatar contributes none.
    pub fn text(&self) -> &str {
        match self {
            Cell::Repository { link, .. } => &link.text,
            Cell::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub cells: [Cell; 5],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsTable {
    pub headers: [&'static str; 5],
    pub rows: Vec<Row>,
}

impl ResultsTable {
    pub fn new(repositories: &[Repository]) -> Self {
        Self {
            headers: HEADERS,
            rows: repositories.iter().map(row).collect(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

fn row(repository: &Repository) -> Row {
    Row {
        key: repository.id.to_string(),
        cells: [
            Cell::Repository {
                avatar: Avatar {
                    alt: repository.name.clone(),
                    src: repository.owner.avatar_url.clone(),
                },
                link: Link {
                    text: repository.name.clone(),
                    href: repository.html_url.clone(),
                    target: LinkTarget::NewContext,
                    rel: "noreferrer",
                },
            },
            Cell::Text(repository.stargazers_count.to_string()),
            Cell::Text(repository.forks_count.to_string()),
            Cell::Text(repository.open_issues_count.to_string()),
            Cell::Text(repository.updated_at.clone()),
        ],
    }
}
