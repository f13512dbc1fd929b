use tracing::info;

use crate::client::ClientError;
use crate::models::ChartEntry;

/// Memoizes the decoded chart list so the chart view, the artist filter and
/// the ranking share one fetch per invocation. The fetch itself is passed in
/// as a closure; `invalidate` forces the next access to fetch again.
#[derive(Debug, Default)]
pub struct ChartCache {
    entries: Option<Vec<ChartEntry>>,
}

impl ChartCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached chart, fetching it on first access.
    pub fn get_or_fetch<F>(&mut self, fetch: F) -> Result<&[ChartEntry], ClientError>
    where
        F: FnOnce() -> Result<Vec<ChartEntry>, ClientError>,
    {
        if self.entries.is_none() {
            self.entries = Some(fetch()?);
        } else {
            info!(
                action = "hit",
                component = "chart_cache",
                "Serving chart from cache"
            );
        }
        Ok(self.entries.as_deref().unwrap_or_default())
    }

    /// Drop the cached list; the next access fetches fresh data.
    pub fn invalidate(&mut self) {
        self.entries = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ChartEntry> {
        vec![ChartEntry {
            rank: 1,
            title: "song".into(),
            artist: "artist".into(),
            image_url: "https://img.example/1.jpg".into(),
        }]
    }

    #[test]
    fn second_access_does_not_fetch() {
        let mut cache = ChartCache::new();
        let mut fetches = 0;

        for _ in 0..3 {
            let chart = cache
                .get_or_fetch(|| {
                    fetches += 1;
                    Ok(sample())
                })
                .unwrap();
            assert_eq!(chart.len(), 1);
        }
        assert_eq!(fetches, 1);
    }

    #[test]
    fn invalidate_forces_refetch() {
        let mut cache = ChartCache::new();
        let mut fetches = 0;
        let mut fetch = || -> Result<Vec<ChartEntry>, ClientError> {
            fetches += 1;
            Ok(sample())
        };

        cache.get_or_fetch(&mut fetch).unwrap();
        cache.invalidate();
        cache.get_or_fetch(&mut fetch).unwrap();
        assert_eq!(fetches, 2);
    }

    #[test]
    fn failed_fetch_leaves_cache_empty() {
        let mut cache = ChartCache::new();
        let result = cache.get_or_fetch(|| Err(ClientError::MissingItems));
        assert!(result.is_err());

        // A later successful fetch still runs.
        let chart = cache.get_or_fetch(|| Ok(sample())).unwrap();
        assert_eq!(chart.len(), 1);
    }
}
