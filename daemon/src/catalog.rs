use crate::prelude::*;
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Parses a catalog: a JSON array of series, in display order.
///
/// Entries without a title can't be liked, so they are dropped.
/// Duplicate titles are kept; they will share their likes.
pub fn parse_catalog(data: &str) -> Result<Vec<SeriesResult>, serde_json::Error> {
    let mut series: Vec<SeriesResult> = serde_json::from_str(data)?;

    series.retain(|serie| {
        let keep = !serie.title.trim().is_empty();
        if !keep {
            warn!("Skipping catalog entry without title");
        }
        keep
    });

    let mut seen = HashSet::new();
    for serie in &series {
        if !seen.insert(serie.title.as_str()) {
            warn!("Duplicate title in catalog: {}", serie.title);
        }
    }

    Ok(series)
}

pub async fn load_catalog(path: &Path) -> Result<Vec<SeriesResult>, CatalogError> {
    let data = tokio::fs::read_to_string(path).await.map_err(|source| CatalogError::Read {
        path: path.to_owned(),
        source,
    })?;
    let series = parse_catalog(&data).map_err(|source| CatalogError::Parse {
        path: path.to_owned(),
        source,
    })?;
    debug!("Read {} series from {path:?}", series.len());
    Ok(series)
}
