pub mod console;
pub mod json;
pub mod markdown;

use thiserror::Error;

/// 报告文件写出过程中的错误
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize scan result: {0}")]
    Serialize(#[from] serde_json::Error),
}
