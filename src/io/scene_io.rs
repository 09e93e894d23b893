/// 场景文件 IO 实现
///
/// 提供基于文件系统的默认场景文件读写实现。
/// 读取使用内存映射（场景文件可能有数百MB），
/// 解码对UTF-8 BOM容错。
use std::path::Path;

use memmap2::Mmap;

use super::traits::{RawSceneText, SceneReader, SceneWriter};
use crate::error::RenameError;

/// 默认的场景文件读取器（memmap2 + encoding_rs）
#[derive(Debug, Clone, Default)]
pub struct DefaultSceneReader;

impl SceneReader for DefaultSceneReader {
    fn read(&self, path: &Path) -> Result<RawSceneText, RenameError> {
        if !path.exists() {
            return Err(RenameError::SceneNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        // SAFETY: 只读映射，映射存活期间本进程不修改该文件
        let mmap = unsafe { Mmap::map(&file)? };

        // encoding_rs 的 decode 会识别并去除BOM
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(&mmap);
        if had_errors {
            return Err(RenameError::InvalidEncoding(path.to_path_buf()));
        }

        Ok(RawSceneText {
            text: text.into_owned(),
        })
    }
}

/// 默认的场景文件写入器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultSceneWriter;

impl SceneWriter for DefaultSceneWriter {
    fn write(&self, doc: &RawSceneText, path: &Path) -> Result<(), RenameError> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| RenameError::WriteFailure(format!("{}: {}", parent.display(), e)))?;
        }

        std::fs::write(path, doc.text.as_bytes())
            .map_err(|e| RenameError::WriteFailure(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}
