use std::fmt;

#[derive(Debug)]
pub enum CodegenError {
    IoError(String),
    ConfigError(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodegenError::IoError(msg) => write!(f, "IO error: {}", msg),
            CodegenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CodegenError {}
