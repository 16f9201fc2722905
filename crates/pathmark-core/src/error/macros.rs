//! Error macros for pathmark

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathmarkError::invalid_value($context, $value))
    };
}

/// Macro for bailing out of the DOT reader with a syntax error
#[macro_export]
macro_rules! bail_syntax {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::PathmarkError::dot_syntax($line, format!($($arg)*)))
    };
}
