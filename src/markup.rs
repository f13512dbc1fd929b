use crate::view::Inline;

const OPEN_TAG: &str = "<b>";
const CLOSE_TAG: &str = "</b>";

/// Parse a string carrying `<b>…</b>` emphasis markers into typed inline
/// runs. Only balanced pairs become `Emphasis`; an opener with no closer is
/// kept as literal text, so nothing upstream sends can smuggle raw markup
/// through to an output adapter.
pub fn parse_inline(raw: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut rest = raw;

    while let Some(open) = rest.find(OPEN_TAG) {
        let after_open = &rest[open + OPEN_TAG.len()..];
        match after_open.find(CLOSE_TAG) {
            Some(close) => {
                if open > 0 {
                    runs.push(Inline::Text(rest[..open].to_string()));
                }
                if close > 0 {
                    runs.push(Inline::Emphasis(after_open[..close].to_string()));
                }
                rest = &after_open[close + CLOSE_TAG.len()..];
            }
            None => {
                // Unmatched opener: keep everything from here as plain text.
                runs.push(Inline::Text(rest.to_string()));
                rest = "";
                break;
            }
        }
    }

    if !rest.is_empty() {
        runs.push(Inline::Text(rest.to_string()));
    }

    runs
}

/// Rewrite an 8-digit `YYYYMMDD` date as `YYYY.MM.DD` by fixed-width
/// slicing. Anything not matching that exact shape passes through unchanged.
pub fn format_post_date(raw: &str) -> String {
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}.{}.{}", &raw[0..4], &raw[4..6], &raw[6..8])
    } else {
        raw.to_string()
    }
}
