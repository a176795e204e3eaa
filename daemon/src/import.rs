use crate::prelude::*;

/// Description stored when TMDb has nothing for a series.
pub const MISSING_DESCRIPTION: &str = "Aucune description disponible.";
const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read titles {path:?}: {source}")]
    ReadTitles {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TMDb request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write catalog {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Deserialize)]
struct TmdbSearch {
    #[serde(default)]
    results: Vec<TmdbShow>,
}

#[derive(Deserialize)]
struct TmdbShow {
    overview: Option<String>,
    poster_path: Option<String>,
}

/// Turns titles stored without separators (`BreakingBad`, `the_office`) into searchable ones.
///
/// Only the first letter is kept uppercase, like `Breaking bad` and `The office`.
pub fn normalize_title(title: &str) -> String {
    let mut spaced = String::with_capacity(title.len() + 4);
    let mut previous: Option<char> = None;
    for c in title.chars() {
        match c {
            '_' | '-' | '.' => spaced.push(' '),
            c if c.is_uppercase() && previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) => {
                spaced.push(' ');
                spaced.push(c);
            }
            c => spaced.push(c),
        }
        previous = Some(c);
    }

    let lowercase = spaced.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let mut chars = lowercase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reads a title list: one title per line, blank lines and `#` comments ignored.
pub fn parse_titles(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn fallback(title: String) -> SeriesResult {
    SeriesResult::new(title, MISSING_DESCRIPTION, "")
}

/// Looks a title up on TMDb and keeps the first match.
///
/// A title TMDb doesn't know, or an error answer, gives a placeholder entry instead of failing the import.
pub async fn fetch_series_info(client: &Client, args: &ImportArgs, title: &str) -> Result<SeriesResult, ImportError> {
    let normalized = normalize_title(title);
    let response = client
        .get(format!("{}/search/tv", args.tmdb_url.trim_end_matches('/')))
        .query(&[
            ("api_key", args.tmdb_api_key.as_str()),
            ("query", normalized.as_str()),
            ("language", args.language.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        warn!("TMDb answered {} for {normalized:?}", response.status());
        return Ok(fallback(normalized));
    }
    let text = response.text().await?;
    let search: TmdbSearch = match serde_json::from_str(&text) {
        Ok(search) => search,
        Err(e) => {
            warn!("Unexpected TMDb answer for {normalized:?}: {e}");
            return Ok(fallback(normalized));
        }
    };
    let Some(show) = search.results.into_iter().next() else {
        debug!("No TMDb match for {normalized:?}");
        return Ok(fallback(normalized));
    };

    let description = show.overview
        .filter(|overview| !overview.trim().is_empty())
        .unwrap_or_else(|| String::from(MISSING_DESCRIPTION));
    let image = show.poster_path
        .map(|path| format!("{POSTER_BASE_URL}{path}"))
        .unwrap_or_default();
    Ok(SeriesResult::new(normalized, description, image))
}

pub async fn build_catalog(client: &Client, args: &ImportArgs, titles: &[String]) -> Result<Vec<SeriesResult>, ImportError> {
    let mut catalog = Vec::with_capacity(titles.len());
    for title in titles {
        info!("Processing {title:?}");
        catalog.push(fetch_series_info(client, args, title).await?);
    }
    Ok(catalog)
}

/// Replaces the catalog at `args.output` with one built from the titles at `args.titles`.
///
/// Returns the number of series written.
pub async fn import_catalog(args: &ImportArgs) -> Result<usize, ImportError> {
    let data = tokio::fs::read_to_string(&args.titles).await.map_err(|source| ImportError::ReadTitles {
        path: args.titles.clone(),
        source,
    })?;
    let titles = parse_titles(&data);
    info!("{} titles found in {:?}", titles.len(), args.titles);

    let client = Client::builder()
        .user_agent(concat!("seriefindd/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let catalog = build_catalog(&client, args, &titles).await?;

    let json = serde_json::to_string_pretty(&catalog)?;
    tokio::fs::write(&args.output, json).await.map_err(|source| ImportError::Write {
        path: args.output.clone(),
        source,
    })?;
    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use warp::{Filter, Reply, http::StatusCode};

    fn import_args(tmdb_url: String, dir: &Path) -> ImportArgs {
        ImportArgs {
            titles: dir.join("titles.txt"),
            output: dir.join("series.json"),
            tmdb_api_key: String::from("secret"),
            tmdb_url,
            language: String::from("fr-FR"),
        }
    }

    /// Serves a tiny `/search/tv` that only answers requests carrying the right key and language.
    fn fake_tmdb() -> String {
        let search_tv = warp::path!("search" / "tv")
            .and(warp::query::<HashMap<String, String>>())
            .map(|query: HashMap<String, String>| {
                let get = |key: &str| query.get(key).map(String::as_str);
                if get("api_key") != Some("secret") || get("language") != Some("fr-FR") {
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                let body = match get("query") {
                    Some("Breaking bad") => serde_json::json!({"results": [
                        {"name": "Breaking Bad", "overview": "Un professeur de chimie.", "poster_path": "/bb.jpg"},
                        {"name": "Breaking Bad: Original Minisodes", "overview": "Autre", "poster_path": null}
                    ]}),
                    Some("Dark") => serde_json::json!({"results": [{"name": "Dark", "overview": "", "poster_path": null}]}),
                    Some("Unknown show") => serde_json::json!({"results": []}),
                    _ => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                };
                warp::reply::json(&body).into_response()
            });
        let (addr, server) = warp::serve(search_tv).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        format!("http://{addr}/")
    }

    #[test]
    fn title_normalization() {
        assert_eq!(normalize_title("BreakingBad"), "Breaking bad");
        assert_eq!(normalize_title("the_office"), "The office");
        assert_eq!(normalize_title("  dark  "), "Dark");
        assert_eq!(normalize_title("Brooklyn99"), "Brooklyn99");
        assert_eq!(normalize_title("élite"), "Élite");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn title_list() {
        let titles = parse_titles("BreakingBad\n\n# comment\n  dark \r\n");
        assert_eq!(titles, vec!["BreakingBad", "dark"]);
    }

    #[tokio::test]
    async fn tmdb_lookups_and_fallbacks() {
        let dir = std::env::temp_dir();
        let args = import_args(fake_tmdb(), &dir);
        let client = Client::new();
        let titles = ["BreakingBad", "dark", "unknown_show", "Broken"].map(String::from);

        let catalog = build_catalog(&client, &args, &titles).await.unwrap();
        assert_eq!(catalog, vec![
            SeriesResult::new("Breaking bad", "Un professeur de chimie.", "https://image.tmdb.org/t/p/w500/bb.jpg"),
            SeriesResult::new("Dark", MISSING_DESCRIPTION, ""),
            SeriesResult::new("Unknown show", MISSING_DESCRIPTION, ""),
            SeriesResult::new("Broken", MISSING_DESCRIPTION, ""),
        ]);
    }

    #[tokio::test]
    async fn wrong_key_gives_placeholders() {
        let dir = std::env::temp_dir();
        let mut args = import_args(fake_tmdb(), &dir);
        args.tmdb_api_key = String::from("wrong");

        let info = fetch_series_info(&Client::new(), &args, "BreakingBad").await.unwrap();
        assert_eq!(info, SeriesResult::new("Breaking bad", MISSING_DESCRIPTION, ""));
    }

    #[tokio::test]
    async fn import_writes_a_loadable_catalog() {
        let dir = std::env::temp_dir().join(format!("seriefind-import-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let args = import_args(fake_tmdb(), &dir);
        tokio::fs::write(&args.titles, "BreakingBad\nunknown_show\n").await.unwrap();

        assert_eq!(import_catalog(&args).await.unwrap(), 2);
        let catalog = load_catalog(&args.output).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].title, "Breaking bad");
        assert_eq!(catalog[1].description, MISSING_DESCRIPTION);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn missing_title_list() {
        let dir = std::env::temp_dir().join("seriefind-import-missing");
        let args = import_args(String::from("http://127.0.0.1:9"), &dir);
        assert!(matches!(import_catalog(&args).await, Err(ImportError::ReadTitles { .. })));
    }
}
