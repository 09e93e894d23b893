/// IO 抽象层 - trait 定义
///
/// 该模块定义了场景文件读写的抽象接口，支持依赖注入和测试 mock。

use std::path::Path;

use crate::error::RenameError;

/// 场景文件的全文快照
#[derive(Debug, Clone)]
pub struct RawSceneText {
    /// 解码后的全文内容（行尾原样保留）
    pub text: String,
}

/// 场景文件读取 trait
///
/// # 职责
/// - 读取并解码场景文件的完整文本
/// - 不负责任何重写逻辑，仅负责 IO
pub trait SceneReader {
    /// 读取场景文件
    ///
    /// # 参数
    /// * `path` - 场景文件路径
    fn read(&self, path: &Path) -> Result<RawSceneText, RenameError>;
}

/// 场景文件写入 trait
///
/// # 职责
/// - 将完整文本一次性写入文件系统
/// - 写入是全量覆盖，不存在部分写入的中间状态
pub trait SceneWriter {
    /// 写入场景文件
    ///
    /// # 参数
    /// * `doc` - 要写入的全文快照
    /// * `path` - 目标文件路径
    fn write(&self, doc: &RawSceneText, path: &Path) -> Result<(), RenameError>;
}
