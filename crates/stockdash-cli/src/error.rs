use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stockdash_core::ValidationError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use stockdash_core::ValidationError;

    use super::*;

    #[test]
    fn every_category_has_a_distinct_exit_code() {
        let validation = CliError::from(ValidationError::ZeroTimeout);
        let io = CliError::from(std::io::Error::other("stdin closed"));
        let serialization = CliError::from(
            serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json"),
        );

        assert_eq!(validation.exit_code(), 2);
        assert_eq!(serialization.exit_code(), 4);
        assert_eq!(io.exit_code(), 10);
        assert_eq!(validation.to_string(), "timeout must be greater than zero");
    }
}
