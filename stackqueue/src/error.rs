use thiserror::Error;

/// Error types for `Stack` and `Queue` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ContainerError {
    /// Element removal or inspection attempted on an empty container
    #[error("Underflow: cannot {operation} on empty {container}")]
    Underflow {
        /// Kind of container, `"stack"` or `"queue"`
        container: &'static str,
        /// Operation that was attempted
        operation: &'static str,
    },
    /// Invalid parameter provided to a constructor
    #[error("Invalid argument: {parameter} = {value}")]
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}

impl ContainerError {
    pub(crate) fn stack_underflow(operation: &'static str) -> Self {
        ContainerError::Underflow {
            container: "stack",
            operation,
        }
    }

    pub(crate) fn queue_underflow(operation: &'static str) -> Self {
        ContainerError::Underflow {
            container: "queue",
            operation,
        }
    }
}
