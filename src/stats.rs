use std::collections::HashMap;

use crate::models::ChartEntry;

/// Occurrence count for one distinct artist. Derived per aggregation call and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCount {
    pub artist: String,
    pub count: u32,
}

/// Count chart entries per distinct artist and sort by count descending.
/// Accumulation preserves first-encounter order and the sort compares counts
/// only, so tied artists stay in the order they first appeared in the chart.
pub fn artist_ranking(entries: &[ChartEntry]) -> Vec<ArtistCount> {
    let mut counts: Vec<ArtistCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match index.get(entry.artist.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(&entry.artist, counts.len());
                counts.push(ArtistCount {
                    artist: entry.artist.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Entries whose artist contains `keyword` as a substring, case-sensitive,
/// in original chart order.
pub fn filter_by_artist<'a>(entries: &'a [ChartEntry], keyword: &str) -> Vec<&'a ChartEntry> {
    entries
        .iter()
        .filter(|entry| entry.artist.contains(keyword))
        .collect()
}
