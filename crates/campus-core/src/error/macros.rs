//! Error macros for campus-core

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::CampusError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::CampusError::UsageError($msg.to_string()))
    };
}

/// Macro for failing on a location that is not in the graph
#[macro_export]
macro_rules! bail_unknown_location {
    ($id:expr) => {
        return Err($crate::error::CampusError::unknown_location($id))
    };
}
