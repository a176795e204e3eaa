use crate::prelude::*;

/// Identifies one rendered like button for the lifetime of the page.
///
/// Titles aren't unique, so liking a card must target its id, never its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub series: SeriesResult,
    pub liked: bool,
}

impl Card {
    pub fn label(&self) -> &'static str {
        match self.liked {
            true => LIKED_LABEL,
            false => LIKE_LABEL,
        }
    }
}

/// What the page has to do after a search answer was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The result list was replaced.
    Replaced,
    /// The daemon refused the query. Nothing changed and the user must be told why.
    Rejected(String),
}

/// Everything the page displays. The view is a pure function of this.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    recommendations: Vec<Card>,
    recommendations_visible: bool,
    cards: Vec<Card>,
    searched: bool,
    status: Option<String>,
    next_card_id: u64,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            recommendations: Vec::new(),
            recommendations_visible: true,
            cards: Vec::new(),
            searched: false,
            status: None,
            next_card_id: 0,
        }
    }
}

impl UiState {
    pub fn new() -> UiState {
        UiState::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn recommendations(&self) -> &[Card] {
        &self.recommendations
    }

    /// The panel is displayed until results of a search replace the catalog.
    pub fn recommendations_visible(&self) -> bool {
        self.recommendations_visible && !self.recommendations.is_empty()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn make_cards(&mut self, series: Vec<SeriesResult>) -> Vec<Card> {
        series.into_iter().map(|series| {
            let id = CardId(self.next_card_id);
            self.next_card_id += 1;
            Card { id, series, liked: false }
        }).collect()
    }

    pub fn set_recommendations(&mut self, series: Vec<SeriesResult>) {
        self.recommendations = self.make_cards(series);
    }

    /// Fills the result list with the whole catalog, unless a search already answered.
    ///
    /// Returns whether the list changed.
    pub fn show_catalog(&mut self, series: Vec<SeriesResult>) -> bool {
        if self.searched {
            return false;
        }
        self.cards = self.make_cards(series);
        true
    }

    /// Applies a `/search` answer.
    ///
    /// Answers are applied in arrival order, so the last one to arrive wins.
    pub fn apply_search_response(&mut self, response: SearchResponse) -> SearchOutcome {
        match response {
            SearchResponse::Error { error } => SearchOutcome::Rejected(error),
            SearchResponse::Results { results } => {
                self.recommendations_visible = false;
                self.searched = true;
                self.status = None;
                self.cards = self.make_cards(results);
                SearchOutcome::Replaced
            }
        }
    }

    /// Records that a search never got an answer. Displayed cards are kept.
    pub fn apply_search_failure(&mut self) {
        self.status = Some(String::from(SEARCH_UNAVAILABLE));
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().chain(self.recommendations.iter()).find(|card| card.id == id)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().chain(self.recommendations.iter_mut()).find(|card| card.id == id)
    }

    /// Title to send to the like endpoint when card `id` is clicked.
    ///
    /// Liked is a terminal state, so clicking a liked card doesn't send anything.
    pub fn like_target(&self, id: CardId) -> Option<String> {
        self.card(id).filter(|card| !card.liked).map(|card| card.series.title.clone())
    }

    /// Applies a `/like` answer to the card that was clicked.
    ///
    /// Returns whether the card changed. Answers for cards a later search removed are dropped.
    pub fn apply_like_response(&mut self, id: CardId, response: LikeResponse) -> bool {
        if !response.success {
            return false;
        }
        match self.card_mut(id) {
            Some(card) if !card.liked => {
                card.liked = true;
                true
            }
            _ => false,
        }
    }
}

/// Non-blocking status shown when the daemon can't be reached for a search.
pub const SEARCH_UNAVAILABLE: &str = "Recherche indisponible pour le moment.";
