use anyhow::Result;
use clap::Parser;
use tracing::error;

use blogchart::args::{Args, Command, OutputFormat};
use blogchart::cache::ChartCache;
use blogchart::client::{ApiClient, ClientError};
use blogchart::view::{Node, ViewState, ViewTree};
use blogchart::{output, render, stats, utils};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose)?;
    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let client = ApiClient::new(args.base_url.clone());
    let mut cache = ChartCache::new();
    let mut view = ViewState::new();
    let token = view.begin();

    let (tree, exit_code) = match dispatch(&args.command, &client, &mut cache) {
        Ok(tree) => (tree, 0),
        // Validation and soft failures are ordinary outcomes for the user.
        Err(err) if err.is_user_facing() => (user_facing_view(&err), 0),
        Err(err) => {
            error!(error = %err, "Request failed");
            (render::failure(&err.to_string()), 1)
        }
    };

    view.apply(token, tree);
    print_view(view.tree(), args.format);
    exit_code
}

fn dispatch(
    command: &Command,
    client: &ApiClient,
    cache: &mut ChartCache,
) -> Result<ViewTree, ClientError> {
    match command {
        Command::Search { query } => {
            let items = client.search(query)?;
            Ok(render::search_results(&items))
        }
        Command::Chart => {
            let chart = cache.get_or_fetch(|| client.chart())?;
            Ok(render::chart(chart))
        }
        Command::Filter { keyword } => {
            let chart = cache.get_or_fetch(|| client.chart())?;
            let matches = stats::filter_by_artist(chart, keyword);
            Ok(render::artist_filter(keyword, &matches))
        }
        Command::Ranking => {
            let chart = cache.get_or_fetch(|| client.chart())?;
            let counts = stats::artist_ranking(chart);
            Ok(render::artist_ranking(&counts))
        }
    }
}

fn user_facing_view(err: &ClientError) -> ViewTree {
    match err {
        ClientError::EmptyQuery => render::empty_query(),
        other => ViewTree::new(vec![Node::Placeholder(other.to_string())]),
    }
}

fn print_view(tree: &ViewTree, format: OutputFormat) {
    let rendered = match format {
        OutputFormat::Text => output::to_text(tree),
        OutputFormat::Html => output::to_html(tree),
    };
    print!("{rendered}");
}
