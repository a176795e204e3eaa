mod series;
mod bodies;

pub use series::*;
pub use bodies::*;

/// Label of a like button that was never clicked (or whose like failed).
pub const LIKE_LABEL: &str = "J'aime";
/// Label of a like button once the daemon recorded the like.
pub const LIKED_LABEL: &str = "Ajouté aux favoris";
/// Error sent back by the daemon for a blank query.
pub const EMPTY_QUERY_ERROR: &str = "Veuillez entrer un texte pour effectuer la recherche.";
