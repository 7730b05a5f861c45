use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("TableError: {0}")]
    Table(#[from] TableError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DataError: {0}")]
    Data(#[from] DataError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Misuse of the table's lower-level accessors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Column {id} does not exist")]
    ColumnNotFound { id: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Layout parse error: {message}")]
    LayoutParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Row data parse error: {message}")]
    Parse { message: String },
    #[error("Row {index} is not an object")]
    RowNotObject { index: usize },
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "notice",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            // Bad column lookups are programming errors, not input problems
            AppError::Table(_) => ErrorSeverity::Critical,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Data(_) => ErrorSeverity::Medium,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Storage(StorageError::ConfigParseError { .. }) => Some(
                "Fix or delete the config file, or overwrite it with 'htable config set'"
                    .to_string(),
            ),
            AppError::Storage(StorageError::LayoutParseError { .. }) => Some(
                "A layout needs one [[columns]] table per column with 'id' and 'label'".to_string(),
            ),
            AppError::Storage(StorageError::ConfigDirNotFound) => {
                Some("Pass --config-dir to choose a configuration directory".to_string())
            }
            AppError::Data(DataError::RowNotObject { .. }) => {
                Some("Rows must be a JSON array of objects".to_string())
            }
            AppError::Cli(CliError::InvalidArguments(_)) => {
                Some("Run 'htable --help' to see the expected arguments".to_string())
            }
            _ => None,
        }
    }
}
