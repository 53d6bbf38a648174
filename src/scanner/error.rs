//! Lexical analysis error type.

/// An error that occurred during scanning.
///
/// `ScanError` carries a human-readable message and the line it occurred
/// on (§7). Scanning always recovers from one of these and keeps going;
/// the driver is responsible for skipping later stages once any are
/// reported.
#[derive(Debug)]
pub struct ScanError {
    pub message: String,
    pub line: usize,
}

impl ScanError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        ScanError {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for ScanError {}
