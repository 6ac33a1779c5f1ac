use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot render an icon of size {0}")]
    InvalidSize(u32),

    #[error("Unhandled error while rendering")]
    Unhandled,
}
