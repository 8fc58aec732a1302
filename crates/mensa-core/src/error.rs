#[derive(Debug, thiserror::Error)]
pub enum MensaError {
    #[error("poster text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("poster has no single page to extract from")]
    NoPosterPage,

    #[error("could not read a validity period from the poster header: {0}")]
    DateRange(String),

    #[error("feed declares restaurant {declared} but restaurant {expected} was requested; the request was routed to the wrong campus")]
    RestaurantMismatch { declared: u32, expected: u32 },

    #[error("unrecognized course logo id {0} in feed")]
    UnknownCourseLogo(u32),

    #[error("invalid feed payload: {0}")]
    Feed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
