use std::path::Path;

use crate::error::RenameError;

/// 创建场景文件备份
///
/// 备份文件名带时间戳，形如 `MainScene-001.2026-08-31-12-00-00.bak`。
pub fn create_backup(file_path: &Path) -> Result<std::path::PathBuf, RenameError> {
    if !file_path.exists() {
        return Err(RenameError::SceneNotFound(file_path.to_path_buf()));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let backup_path = file_path.with_extension(format!("{}.bak", timestamp));

    std::fs::copy(file_path, &backup_path)?;

    Ok(backup_path)
}
