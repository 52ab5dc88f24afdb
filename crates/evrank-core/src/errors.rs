use evrank_core_types::RunId;
use thiserror::Error;

/// Result type alias using the structured ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input availability (non-fatal: produce a "no comparison" report)
    /// The current snapshot document could not be found
    MissingInput,
    /// Fewer than two historical snapshots exist
    InsufficientHistory,

    // Document validation (fatal)
    /// A model or manufacturer record is missing a field or carries an out-of-range value
    MalformedEntity,
    /// The snapshot document itself is not UTF-8 JSON, not an object, or lacks `period`
    InvalidSnapshot,
    /// A configuration file could not be parsed or holds an unusable threshold
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingInput => "ERR_MISSING_INPUT",
            ExErrorKind::InsufficientHistory => "ERR_INSUFFICIENT_HISTORY",
            ExErrorKind::MalformedEntity => "ERR_MALFORMED_ENTITY",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind aborts a comparison.
    ///
    /// Missing input and insufficient history end in a "no comparison"
    /// report instead of a failure.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ExErrorKind::MissingInput | ExErrorKind::InsufficientHistory
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, offending entity key, run id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_key: Option<String>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_key: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the identity key of the offending entity
    pub fn with_entity_key(mut self, key: impl Into<String>) -> Self {
        self.entity_key = Some(key.into());
        self
    }

    /// Add run correlation context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the offending entity key, if any
    pub fn entity_key(&self) -> Option<&str> {
        self.entity_key.as_deref()
    }

    /// Get the run id, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(key) = &self.entity_key {
            write!(f, " (entity: {})", key)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Typed domain errors raised while reading snapshots and building reports
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeltaError {
    /// The current snapshot is not available
    #[error("Current rankings not found at {location}")]
    MissingInput { location: String },

    /// Not enough historical snapshots to select a previous one
    #[error("Not enough historical data for comparison: found {found} snapshot(s), need 2")]
    InsufficientHistory { found: usize },

    /// A ranking or totals record is unusable
    #[error("Malformed entity {key}: {reason}")]
    MalformedEntity { key: String, reason: String },

    /// The snapshot document is structurally invalid
    #[error("Invalid snapshot document: {reason}")]
    InvalidSnapshot { reason: String },

    /// Configuration could not be loaded or validated
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<DeltaError> for ExError {
    fn from(err: DeltaError) -> Self {
        match err {
            DeltaError::MissingInput { location } => ExError::new(ExErrorKind::MissingInput)
                .with_op("load_current")
                .with_message(format!("Current rankings not found at {}", location)),

            DeltaError::InsufficientHistory { found } => {
                ExError::new(ExErrorKind::InsufficientHistory)
                    .with_op("load_previous")
                    .with_message(format!(
                        "Not enough historical data for comparison (found {})",
                        found
                    ))
            }

            DeltaError::MalformedEntity { key, reason } => {
                ExError::new(ExErrorKind::MalformedEntity)
                    .with_op("parse_snapshot")
                    .with_entity_key(key)
                    .with_message(reason)
            }

            DeltaError::InvalidSnapshot { reason } => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("parse_snapshot")
                .with_message(reason),

            DeltaError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(reason),

            DeltaError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to DeltaError
impl From<serde_json::Error> for DeltaError {
    fn from(err: serde_json::Error) -> Self {
        DeltaError::Serialization {
            message: err.to_string(),
        }
    }
}
