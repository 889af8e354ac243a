use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised by the upload and analysis services.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid file type for {file_name:?}: {media_type:?} is not an image")]
    InvalidFileType {
        file_name: String,
        media_type: String,
    },
    #[error("Failed to read upload {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid sampling range: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),
}

/// Lets the webview branch on the failure without parsing the message.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    InvalidFileType,
    Io,
    Config,
    Internal,
}

/// Error payload returned from IPC commands.
#[derive(Debug, Serialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        let kind = match err {
            AnalysisError::InvalidFileType { .. } => ErrorKind::InvalidFileType,
            AnalysisError::Read { .. } => ErrorKind::Io,
            AnalysisError::Config(_) => ErrorKind::Config,
            AnalysisError::Sampling(_) => ErrorKind::Internal,
        };
        AppError::new(kind, err.to_string())
    }
}

#[cfg(feature = "desktop")]
impl From<tauri::Error> for AppError {
    fn from(err: tauri::Error) -> Self {
        AppError::new(ErrorKind::Internal, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_file_type_keeps_kind_and_names_file() {
        let err = AnalysisError::InvalidFileType {
            file_name: "report.pdf".to_string(),
            media_type: "application/pdf".to_string(),
        };
        let app: AppError = err.into();
        assert_eq!(app.kind, ErrorKind::InvalidFileType);
        assert!(app.message.contains("report.pdf"));
        assert!(app.message.contains("application/pdf"));
    }

    #[test]
    fn read_failure_maps_to_io_kind() {
        let err = AnalysisError::Read {
            path: "/tmp/patch.png".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(AppError::from(err).kind, ErrorKind::Io);
    }

    #[test]
    fn app_error_serializes_kind_and_message() {
        let app = AppError::new(ErrorKind::Io, "Selected file is not a local path");
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "io", "message": "Selected file is not a local path" })
        );
        assert_eq!(app.to_string(), "Selected file is not a local path");
    }
}
