/// 重命名报告模块
///
/// 引擎与批处理会话不直接打印任何内容；所有结果以报告对象返回，
/// 由展示层（CLI或调用方）决定如何呈现。

use serde::Serialize;
use std::fmt;

/// 单行映射的处理结果
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowOutcome {
    /// 查找的对象名（已修剪）
    pub search_token: String,
    /// 替换写入的标识符
    pub replacement_token: String,
    /// 首个匹配所在的行号（1起始），未匹配时为 None
    pub line: Option<usize>,
    /// 是否命中
    pub matched: bool,
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(
                f,
                "[line {}] \"{}\" -> \"{}\"",
                self.line.unwrap_or(0),
                truncate(&self.search_token),
                truncate(&self.replacement_token)
            )
        } else {
            write!(f, "\"{}\" 未找到", truncate(&self.search_token))
        }
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > 40 {
        format!("{}...", text.chars().take(40).collect::<String>())
    } else {
        text.to_string()
    }
}

/// 一次批处理运行的完整报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    outcomes: Vec<RowOutcome>,
}

impl RenameReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条处理结果
    pub fn record(&mut self, outcome: RowOutcome) {
        self.outcomes.push(outcome);
    }

    /// 已处理的映射行总数
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// 命中并完成替换的行数
    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.matched).count()
    }

    /// 整体是否成功（至少一行命中）
    pub fn is_success(&self) -> bool {
        self.applied() > 0
    }

    pub fn outcomes(&self) -> &[RowOutcome] {
        &self.outcomes
    }

    /// 生成"2/3"形式的摘要
    pub fn summary(&self) -> String {
        format!("{}/{}", self.applied(), self.total())
    }
}
