use std::fmt;

/// Errors raised when a caller hands the network vectors or dimensions that
/// do not match its topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A vector or dimension did not have the size the topology requires.
    ///
    /// `what` names the offending argument (e.g. `"input"`, `"target"`,
    /// `"weights_hidden"`).
    InvalidInput {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl NetworkError {
    pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), NetworkError> {
        if expected == actual {
            Ok(())
        } else {
            Err(NetworkError::InvalidInput { what, expected, actual })
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidInput { what, expected, actual } => write!(
                f,
                "invalid input: `{}` has length {}, expected {}",
                what, actual, expected
            ),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::NetworkError;

    #[test]
    fn check_len_accepts_equal_lengths() {
        assert!(NetworkError::check_len("input", 2, 2).is_ok());
    }

    #[test]
    fn display_names_the_argument() {
        let err = NetworkError::check_len("target", 6, 5).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: `target` has length 5, expected 6");
    }
}
