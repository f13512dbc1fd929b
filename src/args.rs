use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "blogchart",
    about = "Search a blog API and browse a cached music chart from the command line",
    version,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the backend serving /search and /melon
    #[arg(long, default_value = "http://127.0.0.1:5000", global = true)]
    pub base_url: Url,

    /// Output format for rendered results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the blog API for a query
    Search {
        /// Search query; leading and trailing whitespace is trimmed
        query: String,
    },
    /// Show the cached music chart
    Chart,
    /// Show chart entries whose artist contains a keyword
    Filter {
        /// Substring to match against artist names (case-sensitive)
        keyword: String,
    },
    /// Show the top-20 artist frequency ranking for the chart
    Ranking,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain terminal lines
    Text,
    /// HTML fragments matching the web page structure
    Html,
}
