/// 批处理会话模块
///
/// 提供有状态的场景重命名接口，遵循"修改-保存分离"原则：
/// 所有修改仅发生在内存缓冲上，需要显式调用保存。
///
/// # 使用示例
///
/// ```rust,ignore
/// use scene_renamer::RenameSession;
/// use scene_renamer::io::{DefaultSceneReader, DefaultSceneWriter, SceneReader};
///
/// let reader = DefaultSceneReader;
/// let doc = reader.read(scene_path)?;
///
/// let mut session = RenameSession::new(doc.text);
/// session.apply_rows(&rows)?;
///
/// if session.is_modified() {
///     session.save(&DefaultSceneWriter, scene_path)?;
/// }
/// ```

use std::path::Path;

use crate::error::RenameError;
use crate::io::{RawSceneText, SceneWriter};
use crate::mapping::MappingRow;
use crate::pattern::rewrite;
use crate::report::{RenameReport, RowOutcome};

/// 重命名会话 - 管理场景缓冲的修改状态
///
/// # 核心特性
/// - **顺序性**: 按映射表原有顺序处理，上一行的输出缓冲是下一行的输入
/// - **可追踪**: 每行的结果都记录到报告中
/// - **隔离性**: 零命中时缓冲保持原样，保存由调用方显式决定
pub struct RenameSession {
    /// 当前文本缓冲（随命中逐步更新）
    buffer: String,
    /// 运行报告
    report: RenameReport,
}

impl RenameSession {
    /// 从场景全文创建会话
    pub fn new(buffer: String) -> Self {
        Self {
            buffer,
            report: RenameReport::new(),
        }
    }

    /// 处理一行映射
    ///
    /// # 返回
    /// 命中返回 Ok(true)，未命中返回 Ok(false)；
    /// 仅在违反引擎前置条件（如空token）时返回错误
    pub fn apply_row(&mut self, row: &MappingRow) -> Result<bool, RenameError> {
        let result = rewrite(&self.buffer, &row.search_token, &row.replacement_token)?;

        self.report.record(RowOutcome {
            search_token: row.search_token.trim().to_string(),
            replacement_token: row.replacement_token.clone(),
            line: result.line,
            matched: result.matched,
        });

        if result.matched {
            self.buffer = result.buffer;
        }

        Ok(result.matched)
    }

    /// 按表序处理全部映射行
    ///
    /// # 返回
    /// 返回命中的行数
    pub fn apply_rows(&mut self, rows: &[MappingRow]) -> Result<usize, RenameError> {
        let mut applied = 0;
        for row in rows {
            if self.apply_row(row)? {
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// 是否至少有一行命中
    pub fn is_modified(&self) -> bool {
        self.report.is_success()
    }

    /// 当前缓冲内容
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// 运行报告
    pub fn report(&self) -> &RenameReport {
        &self.report
    }

    /// 保存当前缓冲到文件（需要显式调用）
    ///
    /// # 参数
    /// * `writer` - 场景文件写入器
    /// * `path` - 目标文件路径
    pub fn save(&self, writer: &dyn SceneWriter, path: &Path) -> Result<(), RenameError> {
        let doc = RawSceneText {
            text: self.buffer.clone(),
        };
        writer.write(&doc, path)
    }

    /// 结束会话，取出缓冲与报告
    pub fn into_parts(self) -> (String, RenameReport) {
        (self.buffer, self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(search: &str, replacement: &str) -> MappingRow {
        MappingRow {
            building: String::new(),
            floor: String::new(),
            room: String::new(),
            name: String::new(),
            search_token: search.to_string(),
            replacement_token: replacement.to_string(),
        }
    }

    const SCENE: &str = "\
GameObject:
  m_Name: HVAC
GameObject:
  m_Name: 'Room A '
GameObject:
  m_Name: Fan
";

    #[test]
    fn test_batch_two_of_three() {
        let mut session = RenameSession::new(SCENE.to_string());
        let rows = vec![
            row("HVAC", "id-hvac"),
            row("Elevator", "id-missing"),
            row("Room A", "id-room"),
        ];

        let applied = session.apply_rows(&rows).unwrap();
        assert_eq!(applied, 2);
        assert!(session.is_modified());
        assert_eq!(session.report().summary(), "2/3");

        assert!(session.buffer().contains("  m_Name: id-hvac\n"));
        assert!(session.buffer().contains("  m_Name: 'id-room '\n"));
        // 未命中的行不影响缓冲
        assert!(session.buffer().contains("  m_Name: Fan\n"));
    }

    #[test]
    fn test_buffer_threads_between_rows() {
        // 第二行要查找的是第一行写入的标识符，验证缓冲在行间传递
        let mut session = RenameSession::new("  m_Name: HVAC\n".to_string());
        session.apply_row(&row("HVAC", "Stage1")).unwrap();
        let matched = session.apply_row(&row("Stage1", "Stage2")).unwrap();

        assert!(matched);
        assert_eq!(session.buffer(), "  m_Name: Stage2\n");
    }

    #[test]
    fn test_zero_match_keeps_buffer() {
        let mut session = RenameSession::new(SCENE.to_string());
        let applied = session.apply_rows(&[row("Elevator", "id-1")]).unwrap();

        assert_eq!(applied, 0);
        assert!(!session.is_modified());
        assert_eq!(session.buffer(), SCENE);
    }

    #[test]
    fn test_empty_token_propagates_error() {
        let mut session = RenameSession::new(SCENE.to_string());
        let result = session.apply_row(&row("  ", "id-1"));
        assert!(matches!(result, Err(RenameError::EmptySearchToken)));
    }

    #[test]
    fn test_report_records_lines() {
        let mut session = RenameSession::new(SCENE.to_string());
        session.apply_rows(&[row("Room A", "id-room")]).unwrap();

        let outcomes = session.report().outcomes();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].line, Some(4));
        assert!(outcomes[0].matched);
    }
}
