pub mod error;
pub mod mapping;
pub mod pattern;
pub mod report;
pub mod session;
pub mod io;
pub mod utils;

// 重新导出主要结构
pub use error::RenameError;
pub use mapping::{load_mapping_csv, load_mapping_json, MappingRow};
pub use pattern::{rewrite, LineEnding, NamePattern, QuoteStyle, RewriteResult, NAME_KEY};
pub use report::{RenameReport, RowOutcome};
pub use session::RenameSession;

// 常量定义
pub const SUPPORTED_EXTENSIONS: &[&str] = &["unity", "prefab", "asset"];
