use thiserror::Error;

/// Reasons channel statistics cannot be derived from a decoded raster.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeError {
    #[error("image has no pixels (width={width}, height={height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("channel averages sum to zero (fully black image)")]
    ZeroChannelSum,
}

#[derive(Error, Debug)]
pub enum EstimationError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to compute channel statistics: {0}")]
    Compute(#[from] ComputeError),

    #[error("Failed to write output log: {0}")]
    OutputWriteError(String),
}

impl EstimationError {
    /// True when the input itself could not be turned into a raster.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EstimationError::InputReadError(_) | EstimationError::DecodeError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EstimationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(EstimationError::InputReadError("missing.png".into()).is_invalid_input());
        assert!(EstimationError::DecodeError("bad magic".into()).is_invalid_input());
        assert!(!EstimationError::Compute(ComputeError::ZeroChannelSum).is_invalid_input());
        assert!(!EstimationError::OutputWriteError("output.txt".into()).is_invalid_input());
    }

    #[test]
    fn test_compute_error_messages() {
        let err = EstimationError::from(ComputeError::EmptyImage { width: 0, height: 4 });
        assert_eq!(
            err.to_string(),
            "Failed to compute channel statistics: image has no pixels (width=0, height=4)"
        );
    }
}
