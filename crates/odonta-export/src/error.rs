use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("font loading failed: {0}")]
    Font(String),

    #[error("signature image rejected: {0}")]
    Signature(String),
}
