use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the HTTP layer
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP request failed for {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Errors that can occur when loading a podcast feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch feed: {0}")]
    FetchFailed(#[from] HttpError),

    #[error("Failed to parse RSS feed: {0}")]
    ParseFailed(#[from] rss::Error),

    #[error("Feed '{title}' has no episodes")]
    NoEpisodes { title: String },
}

/// Errors that can occur when turning an episode into a playable URL
#[derive(Error, Debug)]
pub enum EnclosureError {
    #[error("Episode '{title}' has no enclosure (audio file)")]
    MissingEnclosure { title: String },

    #[error("Failed to follow redirects: {0}")]
    RedirectFailed(#[from] HttpError),

    #[error("Resolved enclosure URL is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors raised while starting or stopping playback
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Failed to start player '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stop player: {0}")]
    StopFailed(#[source] std::io::Error),

    #[error("Audio service error: {0}")]
    Service(String),
}

/// Errors that can occur when reading the skill settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings JSON in {path}: {source}")]
    JsonParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when mapping an utterance to a configured podcast
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No configured podcast matches the request")]
    NoMatch,
}
