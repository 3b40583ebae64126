use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasPackerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Sprites do not fit in a {max_width}x{max_height} atlas (try larger dimensions, fewer sprites, or rotation)")]
    OutOfSpace { max_width: u32, max_height: u32 },
    #[error("Encoding error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, AtlasPackerError>;
