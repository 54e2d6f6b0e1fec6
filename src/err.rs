use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Invalid configuration : {0}")]
    InvalidConfiguration(String),
    #[error("Dimension mismatch : expected {expected} signals, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Couldn't parse topology config : {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for NetworkError {
    fn from(err: serde_yaml::Error) -> Self {
        NetworkError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::Config(err.to_string())
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message() {
        let err = NetworkError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch : expected 2 signals, got 3"
        );
    }

    #[test]
    fn yaml_error_becomes_config() {
        let yaml_err = serde_yaml::from_str::<usize>("[not, a, number]").unwrap_err();
        let err: NetworkError = yaml_err.into();
        assert!(matches!(err, NetworkError::Config(_)));
    }
}
