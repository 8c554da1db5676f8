use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("folder not found: {0}")]
    FolderNotFound(String),

    #[error("template is invalid: {0}")]
    InvalidTemplate(String),

    #[error("failed to read template: {0}")]
    TemplateRead(String),

    #[error("Excel generation error: {0}")]
    ExcelGeneration(String),

    #[error("photo scan error: {0}")]
    PhotoScan(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
