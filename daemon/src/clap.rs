use crate::prelude::*;

/// Seriefind search daemon
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address on which the API will listen
    #[arg(long, default_value = "127.0.0.1:3030")]
    pub api_addr: SocketAddr,

    /// JSON file listing the series to index
    #[arg(long, default_value = "series.json")]
    pub catalog: PathBuf,

    /// Directory containing the built web UI, served on every path the API doesn't handle
    #[arg(long)]
    pub webui_dir: Option<PathBuf>,

    /// Maximum number of results returned by a search
    #[arg(long, default_value = "5")]
    pub result_limit: usize,

    /// Number of series shown in the recommendations panel
    #[arg(long, default_value = "5")]
    pub recommendations: usize,

    /// Origins allowed to call the API from another site (scheme://host[:port])
    #[arg(long = "allow-origin", value_parser = parse_origin)]
    pub allow_origins: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Builds the catalog from a list of titles, looking them up on TMDb, then exits
    Import(ImportArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ImportArgs {
    /// Text file with one series title per line
    #[arg(long)]
    pub titles: PathBuf,

    /// Where to write the catalog
    #[arg(long, default_value = "series.json")]
    pub output: PathBuf,

    /// TMDb API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: String,

    /// TMDb API base url
    #[arg(long, default_value = "https://api.themoviedb.org/3")]
    pub tmdb_url: String,

    /// Language of the descriptions fetched from TMDb
    #[arg(long, default_value = "fr-FR")]
    pub language: String,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            command: None,
            api_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            catalog: PathBuf::from("series.json"),
            webui_dir: None,
            result_limit: 5,
            recommendations: 5,
            allow_origins: Vec::new(),
        }
    }
}

/// Accepts `scheme://host[:port]`, which is all a CORS origin can be.
fn parse_origin(origin: &str) -> Result<String, String> {
    let Some((scheme, host)) = origin.split_once("://") else {
        return Err(format!("{origin:?} has no scheme, expected something like http://{origin}"));
    };
    let valid_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return Err(format!("invalid scheme {scheme:?}"));
    }
    if host.is_empty() || host.contains(|c: char| c == '/' || c.is_whitespace()) {
        return Err(format!("invalid host {host:?}, expected scheme://host[:port]"));
    }
    if let Some((_, port)) = host.rsplit_once(':').filter(|_| !host.ends_with(']')) {
        port.parse::<u16>().map_err(|_| format!("invalid port {port:?}"))?;
    }
    Ok(origin.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parser() {
        let parsed = Args::parse_from(["seriefindd"]);
        let default = Args::default();
        assert!(parsed.command.is_none());
        assert_eq!(parsed.api_addr, default.api_addr);
        assert_eq!(parsed.catalog, default.catalog);
        assert_eq!(parsed.result_limit, default.result_limit);
        assert_eq!(parsed.recommendations, default.recommendations);
        assert!(parsed.webui_dir.is_none());
        assert!(parsed.allow_origins.is_empty());
    }

    #[test]
    fn repeated_origins() {
        let parsed = Args::parse_from([
            "seriefindd",
            "--allow-origin", "http://localhost:8080",
            "--allow-origin", "https://example.org",
            "--result-limit", "10",
        ]);
        assert_eq!(parsed.allow_origins, vec!["http://localhost:8080", "https://example.org"]);
        assert_eq!(parsed.result_limit, 10);
    }

    #[test]
    fn origins_without_scheme_are_refused() {
        for origin in ["localhost:8080", "://localhost", "http://", "http://host/path", "1http://host", "http://host:web"] {
            assert!(Args::try_parse_from(["seriefindd", "--allow-origin", origin]).is_err(), "{origin} was accepted");
        }
        assert!(parse_origin("http://127.0.0.1:8080").is_ok());
        assert!(parse_origin("http://[::1]").is_ok());
    }

    #[test]
    fn import_command() {
        let parsed = Args::parse_from([
            "seriefindd", "import",
            "--titles", "titles.txt",
            "--tmdb-api-key", "secret",
        ]);
        let Some(Command::Import(import)) = parsed.command else { panic!("expected import") };
        assert_eq!(import.titles, PathBuf::from("titles.txt"));
        assert_eq!(import.output, PathBuf::from("series.json"));
        assert_eq!(import.tmdb_api_key, "secret");
        assert_eq!(import.language, "fr-FR");
    }
}
