use thiserror::Error;
use std::path::PathBuf;

/// 自定义错误类型
///
/// "未匹配"不是错误：引擎通过 `RewriteResult::matched` 报告，
/// 这里只表示违反前置条件或IO层面的失败。
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Mapping table not found: {0}")]
    MappingNotFound(PathBuf),

    #[error("Scene file not found: {0}")]
    SceneNotFound(PathBuf),

    #[error("Search token is empty after trimming")]
    EmptySearchToken,

    #[error("Malformed mapping table: {0}")]
    MalformedTable(String),

    #[error("Scene file is not valid text: {0}")]
    InvalidEncoding(PathBuf),

    #[error("Failed to write scene file: {0}")]
    WriteFailure(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
