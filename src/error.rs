use std::io;
use std::path::PathBuf;

use thiserror::Error;


pub type BlendResult<T> = Result<T, BlendError>;

#[derive(Debug, Error)]
pub enum RatioError {

    #[error("the input ratio is invalid: `{0}`")]
    Invalid(String),

    #[error("the ratio does not end with '%': `{0}`")]
    MissingPercent(String),
}

#[derive(Debug, Error)]
pub enum BlendError {

    #[error(transparent)]
    Ratio(#[from] RatioError),

    #[error("error opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },

    #[error("error reading BMP file header: {0}")]
    HeaderRead(io::Error),

    #[error("error reading BMP pixel data: {0}")]
    PixelRead(io::Error),

    #[error("error seeking to BMP pixel data: {0}")]
    Seek(io::Error),

    #[error("invalid image dimensions in BMP file: {width} x {height}")]
    InvalidDimensions {
        width: i32,
        height: i32,
    },

    #[error("invalid image size calculation for {width} x {height}")]
    InvalidSize {
        width: i32,
        height: i32,
    },

    #[error("images must have the same dimensions: {width_a} x {height_a} vs {width_b} x {height_b}")]
    DimensionMismatch {
        width_a: i32,
        height_a: i32,
        width_b: i32,
        height_b: i32,
    },

    #[error("error opening {} for writing: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: io::Error,
    },

    #[error("error writing BMP data: {0}")]
    Write(io::Error),

    #[error("error exporting preview: {0}")]
    Preview(#[from] image::ImageError),
}

impl BlendError {

    /// Errors past the decode stage cannot be recovered from by fixing the inputs' contents alone.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DimensionMismatch { .. } |
            Self::Create { .. } |
            Self::Write(_) |
            Self::Preview(_) => true,
            _ => false,
        }
    }
}


#[cfg(test)]
mod test {

    use std::io;

    use super::BlendError;
    use super::RatioError;

    #[test]
    fn test_fatal_classification() {
        assert!(!BlendError::from(RatioError::Invalid("x".to_owned())).is_fatal());
        assert!(!BlendError::HeaderRead(io::Error::from(io::ErrorKind::UnexpectedEof)).is_fatal());
        assert!(!BlendError::InvalidDimensions { width: 0, height: 2 }.is_fatal());
        assert!(BlendError::DimensionMismatch { width_a: 2, height_a: 2, width_b: 3, height_b: 2 }.is_fatal());
        assert!(BlendError::Write(io::Error::from(io::ErrorKind::WriteZero)).is_fatal());
    }

    #[test]
    fn test_mismatch_message() {
        let e = BlendError::DimensionMismatch { width_a: 2, height_a: 2, width_b: 3, height_b: 2 };
        assert_eq!(e.to_string(), "images must have the same dimensions: 2 x 2 vs 3 x 2");
    }
}
