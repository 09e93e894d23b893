/// IO 抽象层模块
///
/// 该模块提供了场景文件读写的抽象接口，遵循依赖倒置原则。
/// 支持依赖注入、测试 mock 和替换 IO 实现（如内存 IO）。
///
/// # 架构设计
///
/// - **traits**: 定义 Reader/Writer trait 接口
/// - **scene_io**: 基于文件系统的默认实现
///
/// # 使用示例
///
/// ```rust,ignore
/// use scene_renamer::io::{DefaultSceneReader, SceneReader};
///
/// let reader = DefaultSceneReader;
/// let doc = reader.read(Path::new("Assets/Scenes/MainScene-001.unity"))?;
/// ```
pub mod traits;
pub mod scene_io;

// === 导出 trait 定义 ===
pub use traits::{RawSceneText, SceneReader, SceneWriter};

// === 导出默认实现 ===
pub use scene_io::{DefaultSceneReader, DefaultSceneWriter};
