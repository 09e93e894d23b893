/// 映射表加载模块
///
/// 读取CSV格式的重命名映射表。表头必须包含 `Type`（查找token）与
/// `Entity ID`（替换token）两列；`Building`、`Floor`、`Room`、`Name`
/// 为可选的描述性元数据，引擎不使用。
/// 也支持等价的JSON数组输入（字段名见 `MappingRow`）。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RenameError;

/// 表头中必须出现的列名
const COLUMN_SEARCH: &str = "Type";
const COLUMN_REPLACEMENT: &str = "Entity ID";

/// 一行重命名映射
///
/// 加载后不可变，引擎只读取 `search_token` 与 `replacement_token`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingRow {
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub room: String,
    /// 显示名称（仅用于报告展示）
    #[serde(default)]
    pub name: String,
    /// 场景中要查找的对象名
    pub search_token: String,
    /// 替换后的标识符
    pub replacement_token: String,
}

/// 从CSV文件加载映射表
pub fn load_mapping_csv(path: &Path) -> Result<Vec<MappingRow>, RenameError> {
    if !path.exists() {
        return Err(RenameError::MappingNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_mapping_csv(&content)
}

/// 从JSON文件加载映射表（`MappingRow` 数组）
pub fn load_mapping_json(path: &Path) -> Result<Vec<MappingRow>, RenameError> {
    if !path.exists() {
        return Err(RenameError::MappingNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let rows: Vec<MappingRow> = serde_json::from_str(&content)?;
    Ok(rows)
}

/// 解析CSV文本
///
/// # 行为
/// - 第一行为表头，据此定位各列；缺少必需列直接报错
/// - 完全为空的数据行跳过
/// - 缺少任一必需字段（修剪后为空）的行跳过，不视为错误
pub fn parse_mapping_csv(content: &str) -> Result<Vec<MappingRow>, RenameError> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| RenameError::MalformedTable("映射表为空".to_string()))?;

    let columns = parse_csv_record(header)?;
    let index = HeaderIndex::from_columns(&columns)?;

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_csv_record(line)?;
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        if let Some(row) = index.build_row(&fields) {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// 表头各列的位置索引
struct HeaderIndex {
    building: Option<usize>,
    floor: Option<usize>,
    room: Option<usize>,
    name: Option<usize>,
    search: usize,
    replacement: usize,
}

impl HeaderIndex {
    fn from_columns(columns: &[String]) -> Result<Self, RenameError> {
        let find = |name: &str| columns.iter().position(|c| c.trim() == name);

        let search = find(COLUMN_SEARCH).ok_or_else(|| {
            RenameError::MalformedTable(format!("表头缺少必需列: {}", COLUMN_SEARCH))
        })?;
        let replacement = find(COLUMN_REPLACEMENT).ok_or_else(|| {
            RenameError::MalformedTable(format!("表头缺少必需列: {}", COLUMN_REPLACEMENT))
        })?;

        Ok(Self {
            building: find("Building"),
            floor: find("Floor"),
            room: find("Room"),
            name: find("Name"),
            search,
            replacement,
        })
    }

    /// 由一条数据记录构造映射行；缺少必需字段时返回 None（该行被跳过）
    fn build_row(&self, fields: &[String]) -> Option<MappingRow> {
        let get = |idx: usize| fields.get(idx).map(|f| f.trim().to_string()).unwrap_or_default();
        let get_opt = |idx: Option<usize>| idx.map(&get).unwrap_or_default();

        let search_token = get(self.search);
        let replacement_token = get(self.replacement);
        if search_token.is_empty() || replacement_token.is_empty() {
            return None;
        }

        Some(MappingRow {
            building: get_opt(self.building),
            floor: get_opt(self.floor),
            room: get_opt(self.room),
            name: get_opt(self.name),
            search_token,
            replacement_token,
        })
    }
}

/// 解析一条CSV记录（支持双引号包裹的字段与 `""` 转义）
fn parse_csv_record(line: &str) -> Result<Vec<String>, RenameError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }

    if in_quotes {
        return Err(RenameError::MalformedTable(format!("未闭合的引号: {}", line)));
    }

    fields.push(current);
    Ok(fields)
}
