//! Pure renderers: decoded models in, [`ViewTree`] out. Nothing here touches
//! the network or the terminal, which keeps every display rule testable.

use crate::markup;
use crate::models::{ChartEntry, SearchResult};
use crate::stats::ArtistCount;
use crate::view::{Node, ViewTree};

/// How many ranking positions are displayed. Positions beyond this are
/// computed by the aggregator but never rendered.
pub const RANKING_DISPLAY_LIMIT: usize = 20;

pub const NO_RESULTS_TEXT: &str = "No results found.";

/// Blog search results, one item per record in input order. An empty list
/// renders the "no results" placeholder instead.
pub fn search_results(items: &[SearchResult]) -> ViewTree {
    if items.is_empty() {
        return ViewTree::new(vec![Node::Placeholder(NO_RESULTS_TEXT.to_string())]);
    }

    let nodes = items
        .iter()
        .map(|item| Node::SearchItem {
            title: markup::parse_inline(&item.title),
            link: item.link.clone(),
            description: markup::parse_inline(&item.description),
            blogger_name: item.blogger_name.clone(),
            post_date: markup::format_post_date(&item.post_date),
        })
        .collect();
    ViewTree::new(nodes)
}

/// The full chart in input order. Empty input renders an empty tree, no
/// placeholder.
pub fn chart(entries: &[ChartEntry]) -> ViewTree {
    ViewTree::new(entries.iter().map(chart_item).collect())
}

/// Chart entries whose artist matched `keyword`. An empty match set renders
/// a message carrying the keyword verbatim.
pub fn artist_filter(keyword: &str, matches: &[&ChartEntry]) -> ViewTree {
    if matches.is_empty() {
        return ViewTree::new(vec![Node::Placeholder(format!(
            "No songs found for \"{keyword}\"."
        ))]);
    }
    ViewTree::new(matches.iter().map(|entry| chart_item(entry)).collect())
}

/// Numbered artist ranking, cut to the display limit.
pub fn artist_ranking(counts: &[ArtistCount]) -> ViewTree {
    let nodes = counts
        .iter()
        .take(RANKING_DISPLAY_LIMIT)
        .enumerate()
        .map(|(i, c)| Node::RankingItem {
            position: i + 1,
            artist: c.artist.clone(),
            count: c.count,
        })
        .collect();
    ViewTree::new(nodes)
}

/// Validation message for an empty or whitespace-only query.
pub fn empty_query() -> ViewTree {
    ViewTree::new(vec![Node::Error(crate::client::EMPTY_QUERY_TEXT.to_string())])
}

/// Terminal error view for transport and application failures.
pub fn failure(message: &str) -> ViewTree {
    ViewTree::new(vec![Node::Error(format!(
        "An error occurred during the request: {message}"
    ))])
}

fn chart_item(entry: &ChartEntry) -> Node {
    Node::ChartItem {
        rank: entry.rank,
        title: entry.title.clone(),
        artist: entry.artist.clone(),
        image_url: entry.image_url.clone(),
    }
}
