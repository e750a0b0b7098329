use clap::{CommandFactory, Parser, Subcommand};

use crate::pagination::PageSize;

/// One line typed at the search prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct Prompt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the "Filter by" input
    #[command(alias = "f")]
    Filter {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Search, optionally setting the filter first
    #[command(alias = "s")]
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Move one page forward
    #[command(alias = "n")]
    Next,

    /// Move one page back
    #[command(aliases = ["previous", "p"])]
    Prev,

    /// Jump to a page (1-based)
    Page {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        number: u32,
    },

    /// Change rows per page: 30, 50 or 100
    Rows { size: PageSize },

    /// Dismiss the error notification
    Close,

    /// Start over with a fresh page after an unexpected error
    Reload,

    /// Leave
    #[command(aliases = ["exit", "q"])]
    Quit,
}

impl Command {
    /// `Ok(None)` for a blank line. Help requests come back as an error of
    /// kind `DisplayHelp` carrying the rendered help.
    pub fn parse(line: &str) -> Result<Option<Command>, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        Prompt::try_parse_from(words).map(|prompt| Some(prompt.command))
    }
}

/// Generated list of prompt commands.
pub fn help() -> String {
    Prompt::command().render_help().to_string()
}

/// Free text given after a command word, words joined by single spaces.
pub fn joined(text: &[String]) -> String {
    text.join(" ")
}
