//! Error types and exit codes for campus navigation
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown location, duplicate location, invalid distance, etc.)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - the request referenced or supplied invalid graph data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campus operations
#[derive(Error, Debug)]
pub enum CampusError {
    // Graph errors (exit code 3)
    #[error("unknown location: {id}")]
    UnknownLocation { id: String },

    #[error("location already exists: {id}")]
    DuplicateLocation { id: String },

    #[error("no walkway between {from} and {to}")]
    UnknownWalkway { from: String, to: String },

    #[error("walkway already exists between {from} and {to}")]
    DuplicateWalkway { from: String, to: String },

    #[error("invalid distance for walkway {from} - {to}: {distance} (must be a finite number >= 0)")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    #[error("a walkway cannot connect {id} to itself")]
    SelfLoop { id: String },

    #[error("invalid location name: {name:?}")]
    InvalidLocation { name: String },

    // Container errors (exit code 3)
    #[error("position {position} is out of range (length {len})")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("task queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("event already exists: {key}")]
    DuplicateEvent { key: String },

    #[error("event not found: {id}")]
    EventNotFound { id: String },

    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl CampusError {
    /// Create an error for a location that is not in the graph
    pub fn unknown_location(id: impl std::fmt::Display) -> Self {
        CampusError::UnknownLocation { id: id.to_string() }
    }

    /// Create an error for a walkway that is not in the graph
    pub fn unknown_walkway(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        CampusError::UnknownWalkway {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CampusError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CampusError::UsageError(_) | CampusError::InvalidValue { .. } => ExitCode::Usage,

            CampusError::UnknownLocation { .. }
            | CampusError::DuplicateLocation { .. }
            | CampusError::UnknownWalkway { .. }
            | CampusError::DuplicateWalkway { .. }
            | CampusError::InvalidDistance { .. }
            | CampusError::SelfLoop { .. }
            | CampusError::InvalidLocation { .. }
            | CampusError::PositionOutOfRange { .. }
            | CampusError::NothingToUndo
            | CampusError::NothingToRedo
            | CampusError::QueueFull { .. }
            | CampusError::DuplicateEvent { .. }
            | CampusError::EventNotFound { .. } => ExitCode::Data,

            CampusError::Io(_)
            | CampusError::Json(_)
            | CampusError::Toml(_)
            | CampusError::Yaml(_)
            | CampusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CampusError::UnknownLocation { .. } => "unknown_location",
            CampusError::DuplicateLocation { .. } => "duplicate_location",
            CampusError::UnknownWalkway { .. } => "unknown_walkway",
            CampusError::DuplicateWalkway { .. } => "duplicate_walkway",
            CampusError::InvalidDistance { .. } => "invalid_distance",
            CampusError::SelfLoop { .. } => "self_loop",
            CampusError::InvalidLocation { .. } => "invalid_location",
            CampusError::PositionOutOfRange { .. } => "position_out_of_range",
            CampusError::NothingToUndo => "nothing_to_undo",
            CampusError::NothingToRedo => "nothing_to_redo",
            CampusError::QueueFull { .. } => "queue_full",
            CampusError::DuplicateEvent { .. } => "duplicate_event",
            CampusError::EventNotFound { .. } => "event_not_found",
            CampusError::UsageError(_) => "usage_error",
            CampusError::InvalidValue { .. } => "invalid_value",
            CampusError::Io(_) => "io_error",
            CampusError::Json(_) => "json_error",
            CampusError::Toml(_) => "toml_error",
            CampusError::Yaml(_) => "yaml_error",
            CampusError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for campus operations
pub type Result<T> = std::result::Result<T, CampusError>;
