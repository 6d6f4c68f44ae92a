use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(u64),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("No menu item loaded")]
    NotLoaded,
}

pub type Result<T> = std::result::Result<T, OrderError>;
