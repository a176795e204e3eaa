use crate::prelude::*;

/// Like counters, keyed by series title.
///
/// Kept in memory only: likes are lost when the daemon restarts.
#[derive(Default)]
pub struct LikeTable {
    counts: RwLock<HashMap<String, u64>>,
}

impl LikeTable {
    pub fn new() -> LikeTable {
        LikeTable::default()
    }

    /// Records a like and returns the new count for that title.
    pub async fn like(&self, title: &str) -> u64 {
        let mut counts = self.counts.write().await;
        let count = counts.entry(title.to_owned()).or_default();
        *count += 1;
        *count
    }

    #[cfg(test)]
    pub async fn count(&self, title: &str) -> u64 {
        self.counts.read().await.get(title).copied().unwrap_or(0)
    }

    /// Picks the `n` most liked series, keeping catalog order among equally liked ones.
    pub async fn recommend(&self, series: &[SeriesResult], n: usize) -> Vec<SeriesResult> {
        let counts = self.counts.read().await;
        let mut ranked = series.iter().enumerate().collect::<Vec<_>>();
        ranked.sort_by_key(|(i, serie)| (std::cmp::Reverse(counts.get(&serie.title).copied().unwrap_or(0)), *i));
        ranked.into_iter().take(n).map(|(_, serie)| serie.clone()).collect()
    }
}
