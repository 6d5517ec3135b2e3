use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid viewer config: {0}")]
    InvalidConfig(String),

    #[error("Invalid viewport dimensions: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("No image source given")]
    MissingSource,

    #[error("Size worker error: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, LightboxError>;
