use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error performing IO")]
    Io(#[from] std::io::Error),

    #[error("Error reading or writing JSON")]
    Json(#[from] serde_json::Error),

    #[error("Error requesting registered image sizes")]
    Http(#[from] reqwest::Error),

    #[error("Media lookup for attachment {attachment_id} returned HTTP {status}")]
    Lookup { status: u16, attachment_id: u64 },

    #[error("Missing required attribute: {name}")]
    MissingAttribute { name: String },
}
