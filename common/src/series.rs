use serde::{Deserialize, Deserializer, Serialize};

/// A series as the daemon returns it and the web UI renders it.
///
/// `title` is the only key used for liking; nothing enforces its uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
}

/// TMDb leaves overviews and posters as `null` when it has none.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SeriesResult {
    pub fn new(title: impl Into<String>, description: impl Into<String>, image: impl Into<String>) -> Self {
        SeriesResult {
            title: title.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    pub fn image_alt(&self) -> String {
        format!("Image de {}", self.title)
    }
}
