use clap::Parser;

use crate::pagination::PageSize;

/// Search GitHub repositories by name and page through the results.
#[derive(Parser, Debug)]
#[command(name = "github_search_page", version, about)]
pub struct Cli {
    /// API base URL (overrides GITHUB_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Run a single search and exit instead of starting the prompt
    #[arg(long, short)]
    pub query: Option<String>,

    /// Rows per page: 30, 50 or 100
    #[arg(long, default_value = "30", value_parser = parse_page_size)]
    pub per_page: PageSize,

    /// Page to show with --query (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Print the --query result as JSON
    #[arg(long, requires = "query")]
    pub json: bool,

    /// Make repository names clickable in terminals that support OSC 8
    #[arg(long)]
    pub hyperlinks: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_page_size(value: &str) -> Result<PageSize, String> {
    value.parse()
}
