use crate::prelude::*;

mod words;
pub use words::*;

/// Words found in a title count this many times in the term frequency of a series.
const TITLE_WEIGHT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct LocalId(usize);

#[derive(Debug, Clone, Copy, Default)]
struct Posting {
    frequency: f32,
    in_title: bool,
}

/// Full text index over the catalog, searched on both titles and descriptions.
///
/// Built once at startup and never mutated, so it is shared behind an `Arc` without locking.
pub struct SeriesIndex {
    series: Vec<SeriesResult>,
    index: HashMap<String, HashMap<LocalId, Posting>>,
}

impl SeriesIndex {
    pub fn new(series: Vec<SeriesResult>) -> SeriesIndex {
        let mut index: HashMap<String, HashMap<LocalId, Posting>> = HashMap::new();

        for (i, serie) in series.iter().enumerate() {
            let lid = LocalId(i);
            let title_words = words(&serie.title).collect::<Vec<_>>();
            let description_words = words(&serie.description).collect::<Vec<_>>();
            let word_count = (title_words.len() + description_words.len()) as f32;

            for word in title_words {
                let posting = index.entry(word).or_default().entry(lid).or_default();
                posting.frequency += TITLE_WEIGHT / word_count;
                posting.in_title = true;
            }
            for word in description_words {
                let posting = index.entry(word).or_default().entry(lid).or_default();
                posting.frequency += 1. / word_count;
            }
        }

        SeriesIndex { series, index }
    }

    pub fn series(&self) -> &[SeriesResult] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.series.iter().any(|serie| serie.title == title)
    }

    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    fn idf(&self, documents_with_word: usize) -> f32 {
        (self.series.len() as f32 / documents_with_word as f32).ln() + 1.0
    }

    /// Scores every series against the words of `query` and returns the best `limit` ones.
    ///
    /// Words are or-ed together. Series with more query words in their title always come first,
    /// the TF-IDF score orders the rest. Series matching no word are left out and ties keep catalog order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<(&SeriesResult, f32)> {
        let mut query_words = words(query).collect::<Vec<_>>();
        query_words.sort();
        query_words.dedup();

        // lid => (query words found in title, score)
        let mut scores: HashMap<LocalId, (usize, f32)> = HashMap::new();
        for word in &query_words {
            let Some(postings) = self.index.get(word) else {continue};
            let idf = self.idf(postings.len());
            for (lid, posting) in postings {
                let (title_hits, score) = scores.entry(*lid).or_default();
                *title_hits += posting.in_title as usize;
                *score += posting.frequency * idf;
            }
        }

        let mut scores = scores.into_iter().filter(|(_, (_, score))| *score > 0.0).collect::<Vec<_>>();
        scores.sort_by(|(lid1, (title_hits1, score1)), (lid2, (title_hits2, score2))| {
            title_hits2.cmp(title_hits1)
                .then(score2.partial_cmp(score1).unwrap_or(Ordering::Equal))
                .then(lid1.cmp(lid2))
        });
        scores.truncate(limit);

        trace!("{} words in {query:?} matched {} series", query_words.len(), scores.len());
        scores.into_iter().map(|(lid, (_, score))| (&self.series[lid.0], score)).collect()
    }
}
