use thiserror::Error;

/// Errors raised while loading wheel content from the site API.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}
