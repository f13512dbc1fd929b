//! Output adapters: the only place a [`ViewTree`] becomes displayable text.
//! `to_html` reproduces the fragment structure of the original page with all
//! model text escaped; `to_text` is the terminal rendering.

use std::fmt::Write;

use crate::view::{Inline, Node, ViewTree};

/// Escape text for safe interpolation into HTML element content or a
/// double-quoted attribute value.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn inline_html(runs: &[Inline]) -> String {
    let mut html = String::new();
    for run in runs {
        match run {
            Inline::Text(text) => html.push_str(&escape_html(text)),
            Inline::Emphasis(text) => {
                html.push_str("<b>");
                html.push_str(&escape_html(text));
                html.push_str("</b>");
            }
        }
    }
    html
}

fn inline_text(runs: &[Inline]) -> String {
    let mut text = String::new();
    for run in runs {
        match run {
            Inline::Text(t) => text.push_str(t),
            Inline::Emphasis(t) => {
                text.push('*');
                text.push_str(t);
                text.push('*');
            }
        }
    }
    text
}

/// Render the tree as HTML fragments. Consecutive ranking items are grouped
/// into one ordered list, matching the numbered-list presentation.
pub fn to_html(tree: &ViewTree) -> String {
    let mut html = String::new();
    let mut in_ranking = false;

    for node in &tree.nodes {
        let is_ranking = matches!(node, Node::RankingItem { .. });
        if in_ranking && !is_ranking {
            html.push_str("</ol>\n");
            in_ranking = false;
        }
        if is_ranking && !in_ranking {
            html.push_str("<ol class=\"artist-ranking\">\n");
            in_ranking = true;
        }

        match node {
            Node::Placeholder(text) => {
                let _ = writeln!(html, "<p class=\"placeholder\">{}</p>", escape_html(text));
            }
            Node::Error(text) => {
                let _ = writeln!(html, "<p class=\"error\">{}</p>", escape_html(text));
            }
            Node::SearchItem {
                title,
                link,
                description,
                blogger_name,
                post_date,
            } => {
                let _ = writeln!(
                    html,
                    concat!(
                        "<div class=\"result-item\">\n",
                        "  <h3><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>\n",
                        "  <p>{}</p>\n",
                        "  <div class=\"meta\"><span>Blogger: <strong>{}</strong></span> | <span>Posted: {}</span></div>\n",
                        "</div>"
                    ),
                    escape_html(link),
                    inline_html(title),
                    inline_html(description),
                    escape_html(blogger_name),
                    escape_html(post_date),
                );
            }
            Node::ChartItem {
                rank,
                title,
                artist,
                image_url,
            } => {
                let _ = writeln!(
                    html,
                    concat!(
                        "<div class=\"chart-item\">\n",
                        "  <span class=\"rank\">{}</span>\n",
                        "  <img src=\"{}\" alt=\"{}\">\n",
                        "  <div class=\"info\"><span class=\"title\">{}</span><span class=\"artist\">{}</span></div>\n",
                        "</div>"
                    ),
                    rank,
                    escape_html(image_url),
                    escape_html(title),
                    escape_html(title),
                    escape_html(artist),
                );
            }
            Node::RankingItem { artist, count, .. } => {
                let _ = writeln!(
                    html,
                    "  <li>{} ({} songs)</li>",
                    escape_html(artist),
                    count
                );
            }
        }
    }

    if in_ranking {
        html.push_str("</ol>\n");
    }
    html
}

/// Render the tree as plain terminal lines.
pub fn to_text(tree: &ViewTree) -> String {
    let mut out = String::new();
    for node in &tree.nodes {
        match node {
            Node::Placeholder(text) => {
                let _ = writeln!(out, "{text}");
            }
            Node::Error(text) => {
                let _ = writeln!(out, "Error: {text}");
            }
            Node::SearchItem {
                title,
                link,
                description,
                blogger_name,
                post_date,
            } => {
                let _ = writeln!(out, "- {}", inline_text(title));
                let _ = writeln!(out, "  {link}");
                let _ = writeln!(out, "  {}", inline_text(description));
                let _ = writeln!(out, "  by {blogger_name} | {post_date}");
            }
            Node::ChartItem {
                rank,
                title,
                artist,
                ..
            } => {
                let _ = writeln!(out, "{rank:>3}. {title} - {artist}");
            }
            Node::RankingItem {
                position,
                artist,
                count,
            } => {
                let _ = writeln!(out, "{position:>2}. {artist}: {count} songs");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_model_text() {
        let tree = ViewTree::new(vec![Node::Placeholder("a < b & \"c\"".into())]);
        let html = to_html(&tree);
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn emphasis_renders_as_bold_with_escaped_content() {
        let runs = vec![
            Inline::Text("x ".into()),
            Inline::Emphasis("<script>".into()),
        ];
        assert_eq!(inline_html(&runs), "x <b>&lt;script&gt;</b>");
    }

    #[test]
    fn search_item_link_opens_isolated_tab() {
        let tree = ViewTree::new(vec![Node::SearchItem {
            title: vec![Inline::Text("post".into())],
            link: "https://blog.example/a?b=1&c=2".into(),
            description: vec![Inline::Text("text".into())],
            blogger_name: "writer".into(),
            post_date: "2024.01.01".into(),
        }]);
        let html = to_html(&tree);
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("href=\"https://blog.example/a?b=1&amp;c=2\""));
    }

    #[test]
    fn ranking_items_group_into_one_ordered_list() {
        let tree = ViewTree::new(vec![
            Node::RankingItem { position: 1, artist: "A".into(), count: 3 },
            Node::RankingItem { position: 2, artist: "B".into(), count: 1 },
        ]);
        let html = to_html(&tree);
        assert_eq!(html.matches("<ol").count(), 1);
        assert_eq!(html.matches("</ol>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn text_adapter_lists_chart_rows() {
        let tree = ViewTree::new(vec![Node::ChartItem {
            rank: 7,
            title: "Song".into(),
            artist: "Artist".into(),
            image_url: "https://img.example/7.jpg".into(),
        }]);
        assert_eq!(to_text(&tree), "  7. Song - Artist\n");
    }

    #[test]
    fn empty_tree_renders_nothing() {
        let tree = ViewTree::default();
        assert!(to_html(&tree).is_empty());
        assert!(to_text(&tree).is_empty());
    }
}
