//! Data Loader
//!
//! Fetches the CSV resource (local file or HTTP URL) once at startup and
//! parses it into a [`Table`]. There is no retry: a failed load aborts startup.

use std::fmt;
use std::path::PathBuf;

use super::error::{LoadError, LoadResult};
use super::table::{ColumnConfig, Table};

/// Where the CSV comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret `http://` and `https://` strings as URLs, anything else as a path
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::Path(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(p) => write!(f, "{}", p.display()),
            DataSource::Url(u) => write!(f, "{}", u),
        }
    }
}

/// Load the table from the given source
pub async fn load_table(source: &DataSource, columns: &ColumnConfig) -> LoadResult<Table> {
    tracing::info!(source = %source, "Loading happiness data");

    let body = match source {
        DataSource::Url(url) => fetch_url(url).await?,
        DataSource::Path(path) => tokio::fs::read(path).await.map_err(|e| LoadError::Io {
            path: path.clone(),
            source: e,
        })?,
    };

    let table = Table::from_reader(body.as_slice(), columns)?;

    tracing::info!(
        source = %source,
        rows = table.len(),
        columns = table.columns().len(),
        "Happiness data loaded"
    );

    Ok(table)
}

async fn fetch_url(url: &str) -> LoadResult<Vec<u8>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tracing::debug!(url = %url, bytes = bytes.len(), "Fetched remote CSV");
    Ok(bytes.to_vec())
}
