use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request against the catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} answered with status {status}")]
    Status { status: StatusCode, url: String },
    #[error("rate limited by the catalog (retry after {retry_after:?} seconds)")]
    RateLimited { retry_after: Option<u64> },
    #[error("no usable credential: {0}")]
    Credential(String),
}

/// Failure of one step while walking a playlist.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("playlist page unavailable")]
    Page(#[source] CatalogError),
    #[error("albums unavailable")]
    Albums(#[source] CatalogError),
    #[error("features unavailable")]
    Features(#[source] CatalogError),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("trouble loading playlist (page {page}): {cause}")]
    LoadFailed {
        page: usize,
        #[source]
        cause: LookupError,
    },
    #[error("cannot create the new playlist: {0}")]
    CreateFailed(#[source] CatalogError),
    #[error("trouble saving tracks to the playlist (chunk {chunk}, {written} tracks already written)")]
    SaveFailed {
        chunk: usize,
        written: usize,
        #[source]
        source: CatalogError,
    },
    #[error("cannot save the playlist because there are no tracks left after filtering")]
    NothingToSave,
    #[error("no playlist is loaded")]
    NoPlaylistLoaded,
}
