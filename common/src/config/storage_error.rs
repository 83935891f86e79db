use std::fmt;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialize(serde_yaml_ng::Error),
    Validation(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Serialize(e) => write!(f, "YAML error: {}", e),
            StorageError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Serialize(e) => Some(e),
            StorageError::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for StorageError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        StorageError::Serialize(e)
    }
}
