use heapsort_core_types::RequestId;
use thiserror::Error;

use crate::model::{ArrayId, OwnerId};

/// Result type alias using HeapSortError
pub type Result<T> = std::result::Result<T, HeapSortError>;

/// Result type alias using the canonical ExError
pub type ExResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable by front-ends and tests
/// without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidSize,
    InvalidRange,
    EmptyInput,
    IndexOutOfRange,
    InvalidPosition,
    MissingIndex,

    // Lookup
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidSize => "ERR_INVALID_SIZE",
            ExErrorKind::InvalidRange => "ERR_INVALID_RANGE",
            ExErrorKind::EmptyInput => "ERR_EMPTY_INPUT",
            ExErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            ExErrorKind::InvalidPosition => "ERR_INVALID_POSITION",
            ExErrorKind::MissingIndex => "ERR_MISSING_INDEX",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) plus optional context that the engine
/// fills in as the error crosses layers.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    array_id: Option<ArrayId>,
    owner_id: Option<OwnerId>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            array_id: None,
            owner_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_array_id(mut self, array_id: ArrayId) -> Self {
        self.array_id = Some(array_id);
        self
    }

    pub fn with_owner_id(mut self, owner_id: OwnerId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Stamp the request id; an id set earlier is kept
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        if self.request_id.is_none() {
            self.request_id = Some(request_id);
        }
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn array_id(&self) -> Option<ArrayId> {
        self.array_id
    }

    pub fn owner_id(&self) -> Option<OwnerId> {
        self.owner_id
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(array_id) = self.array_id {
            write!(f, " (array_id: {})", array_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the core operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeapSortError {
    /// Generated or stored array length outside the accepted bounds
    #[error("Array size must be between {min} and {max}, got {size}")]
    InvalidSize { size: i64, min: usize, max: usize },

    /// Generation range with min above max
    #[error("Invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    /// Sort requested on an empty array
    #[error("Array cannot be empty")]
    EmptyInput,

    #[error("Index {index} is out of range for array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Position must be 'start', 'end', or 'after', got '{position}'")]
    InvalidPosition { position: String },

    #[error("Index is required for 'after' position")]
    MissingIndex,

    /// Request shape was not usable (e.g. neither elements nor size given)
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Array not found: {array_id}")]
    ArrayNotFound { array_id: ArrayId },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<HeapSortError> for ExError {
    fn from(err: HeapSortError) -> Self {
        let message = err.to_string();
        match err {
            HeapSortError::InvalidSize { .. } => {
                ExError::new(ExErrorKind::InvalidSize).with_message(message)
            }
            HeapSortError::InvalidRange { .. } => {
                ExError::new(ExErrorKind::InvalidRange).with_message(message)
            }
            HeapSortError::EmptyInput => ExError::new(ExErrorKind::EmptyInput).with_message(message),
            HeapSortError::IndexOutOfRange { .. } => {
                ExError::new(ExErrorKind::IndexOutOfRange).with_message(message)
            }
            HeapSortError::InvalidPosition { .. } => {
                ExError::new(ExErrorKind::InvalidPosition).with_message(message)
            }
            HeapSortError::MissingIndex => {
                ExError::new(ExErrorKind::MissingIndex).with_message(message)
            }
            HeapSortError::InvalidInput { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            HeapSortError::ArrayNotFound { array_id } => ExError::new(ExErrorKind::NotFound)
                .with_array_id(array_id)
                .with_message("Array not found"),
            HeapSortError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            HeapSortError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for HeapSortError {
    fn from(err: serde_json::Error) -> Self {
        HeapSortError::Serialization {
            message: err.to_string(),
        }
    }
}
