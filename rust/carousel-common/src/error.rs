use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn allocation_failed(size: usize, reason: impl Into<String>) -> Error {
        Error(
            ErrorKind::AllocationFailed {
                size,
                reason: reason.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("failed to acquire a slot block of {size} bytes: {reason}")]
    AllocationFailed { size: usize, reason: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::invalid_arg("capacity", "capacity > 0");
        assert_eq!(e.to_string(), "invalid argument capacity: capacity > 0");

        let e = Error::allocation_failed(4096, "budget exhausted");
        assert!(e.to_string().contains("4096"));
        assert!(e.to_string().contains("budget exhausted"));
    }

    #[test]
    fn test_error_kind_round_trip() {
        let e = Error::allocation_failed(64, "out of memory");
        assert!(matches!(
            e.kind(),
            ErrorKind::AllocationFailed { size: 64, .. }
        ));
        let kind = e.into_kind();
        let e: Error = kind.into();
        assert!(matches!(
            e.kind(),
            ErrorKind::AllocationFailed { size: 64, .. }
        ));
    }
}
