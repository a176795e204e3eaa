/// Splits a text into lowercase words.
///
/// Anything that isn't alphanumeric separates words, so `"Breaking-Bad!"` yields `breaking` and `bad`.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
}
