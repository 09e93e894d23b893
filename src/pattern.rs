/// 名称重写引擎模块
///
/// Unity场景文件中对象名称行（`m_Name`）的序列化存在多种字面变体：
/// 不带引号、单引号（闭合引号前带/不带一个空格）、双引号，
/// 并且同一文件内可能混用 `\n` 与 `\r\n` 两种行尾。
/// 本模块把这些变体建模为固定顺序的候选模式列表，按顺序做字面子串匹配，
/// 命中第一个候选后替换该候选的**全部**出现，不再尝试后续候选。

use crate::error::RenameError;

/// 名称行的键前缀（Unity序列化固定为两空格缩进）
pub const NAME_KEY: &str = "  m_Name: ";

/// 行尾风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// 名称值的引号风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `m_Name: HVAC`
    Unquoted,
    /// `m_Name: 'Room A '` （闭合引号前保留一个空格）
    SingleQuotedPadded,
    /// `m_Name: 'Room A'`
    SingleQuoted,
    /// `m_Name: "Room A"`
    DoubleQuoted,
}

/// 一个候选模式 = 引号风格 × 行尾风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePattern {
    pub quote: QuoteStyle,
    pub ending: LineEnding,
}

impl NamePattern {
    /// 全部候选模式，顺序即匹配优先级：
    /// 每种引号风格先试CRLF再试LF，引号风格按 不带引号 → 单引号带空格
    /// → 单引号 → 双引号 排列
    pub const CANDIDATES: [NamePattern; 8] = [
        NamePattern { quote: QuoteStyle::Unquoted, ending: LineEnding::Crlf },
        NamePattern { quote: QuoteStyle::Unquoted, ending: LineEnding::Lf },
        NamePattern { quote: QuoteStyle::SingleQuotedPadded, ending: LineEnding::Crlf },
        NamePattern { quote: QuoteStyle::SingleQuotedPadded, ending: LineEnding::Lf },
        NamePattern { quote: QuoteStyle::SingleQuoted, ending: LineEnding::Crlf },
        NamePattern { quote: QuoteStyle::SingleQuoted, ending: LineEnding::Lf },
        NamePattern { quote: QuoteStyle::DoubleQuoted, ending: LineEnding::Crlf },
        NamePattern { quote: QuoteStyle::DoubleQuoted, ending: LineEnding::Lf },
    ];

    /// 将token渲染为该模式下的完整字面行（含键前缀与行尾）
    pub fn render(&self, token: &str) -> String {
        let value = match self.quote {
            QuoteStyle::Unquoted => token.to_string(),
            QuoteStyle::SingleQuotedPadded => format!("'{} '", token),
            QuoteStyle::SingleQuoted => format!("'{}'", token),
            QuoteStyle::DoubleQuoted => format!("\"{}\"", token),
        };
        format!("{}{}{}", NAME_KEY, value, self.ending.as_str())
    }
}

/// 单次重写的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// 重写后的完整文本（未匹配时与输入相同）
    pub buffer: String,
    /// 是否有候选模式命中
    pub matched: bool,
    /// 首个匹配所在的行号（1起始），未匹配时为 None
    pub line: Option<usize>,
}

/// 对整个文本缓冲执行一次名称重写
///
/// # 行为
/// - `old_token` 先做首尾空白修剪；修剪后为空视为前置条件违反，快速失败
/// - 按 `NamePattern::CANDIDATES` 的顺序做字面子串匹配，
///   命中后替换该候选串的全部出现（保持原有引号风格与行尾），
///   并停止尝试后续候选
/// - `new_token` 原样插入，不做任何转义
///
/// # 已知局限
/// 匹配是字面子串而非整行token比对：若某token是更长token的前缀/子串，
/// 可能命中更长的那一个。
pub fn rewrite(
    buffer: &str,
    old_token: &str,
    new_token: &str,
) -> Result<RewriteResult, RenameError> {
    let old_token = old_token.trim();
    if old_token.is_empty() {
        return Err(RenameError::EmptySearchToken);
    }

    for pattern in NamePattern::CANDIDATES {
        let needle = pattern.render(old_token);
        if let Some(offset) = buffer.find(&needle) {
            let replacement = pattern.render(new_token);
            // 行号 = 匹配点之前的换行符个数 + 1
            let line = buffer[..offset].matches('\n').count() + 1;
            return Ok(RewriteResult {
                buffer: buffer.replace(&needle, &replacement),
                matched: true,
                line: Some(line),
            });
        }
    }

    Ok(RewriteResult {
        buffer: buffer.to_string(),
        matched: false,
        line: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = "\
GameObject:
  m_Name: HVAC
  m_Layer: 0
GameObject:
  m_Name: 'Room A '
  m_Layer: 0
";

    #[test]
    fn test_rewrite_unquoted() {
        let result = rewrite(SCENE, "HVAC", "8ee01920-1073-11f0-94c5-01236d0e69c4").unwrap();
        assert!(result.matched);
        assert_eq!(result.line, Some(2));
        assert!(result.buffer.contains("  m_Name: 8ee01920-1073-11f0-94c5-01236d0e69c4\n"));
        assert!(!result.buffer.contains("  m_Name: HVAC\n"));
    }

    #[test]
    fn test_rewrite_single_quoted_padded() {
        let result = rewrite(SCENE, "Room A", "Room-42").unwrap();
        assert!(result.matched);
        assert_eq!(result.line, Some(5));
        assert!(result.buffer.contains("  m_Name: 'Room-42 '\n"));
    }

    #[test]
    fn test_rewrite_not_found_returns_input_unchanged() {
        let result = rewrite(SCENE, "Elevator", "E-1").unwrap();
        assert!(!result.matched);
        assert_eq!(result.line, None);
        assert_eq!(result.buffer, SCENE);
    }

    #[test]
    fn test_rewrite_absent_is_idempotent() {
        let first = rewrite(SCENE, "HVAC", "X-1").unwrap();
        assert!(first.matched);

        // 重命名完成后再次用旧名称查找应当不命中
        let second = rewrite(&first.buffer, "HVAC", "X-1").unwrap();
        assert!(!second.matched);
        assert_eq!(second.buffer, first.buffer);
    }

    #[test]
    fn test_rewrite_preserves_crlf() {
        let scene = "GameObject:\r\n  m_Name: 'Room A '\r\n  m_Layer: 0\r\n";
        let result = rewrite(scene, "Room A", "Room-42").unwrap();
        assert!(result.matched);
        assert_eq!(result.line, Some(2));
        assert_eq!(result.buffer, "GameObject:\r\n  m_Name: 'Room-42 '\r\n  m_Layer: 0\r\n");
    }

    #[test]
    fn test_rewrite_double_quoted() {
        let scene = "  m_Name: \"Pump Station\"\n";
        let result = rewrite(scene, "Pump Station", "PS-7").unwrap();
        assert!(result.matched);
        assert_eq!(result.buffer, "  m_Name: \"PS-7\"\n");
    }

    #[test]
    fn test_rewrite_replaces_all_occurrences_of_first_variant() {
        let scene = "  m_Name: Door\n  m_Layer: 0\n  m_Name: Door\n";
        let result = rewrite(scene, "Door", "D-1").unwrap();
        assert!(result.matched);
        // 首个命中的候选串的所有出现都被替换
        assert_eq!(result.buffer, "  m_Name: D-1\n  m_Layer: 0\n  m_Name: D-1\n");
        assert_eq!(result.line, Some(1));
    }

    #[test]
    fn test_rewrite_trims_search_token() {
        let result = rewrite(SCENE, "  HVAC  ", "X-1").unwrap();
        assert!(result.matched);
    }

    #[test]
    fn test_rewrite_rejects_empty_token() {
        assert!(rewrite(SCENE, "", "X-1").is_err());
        assert!(rewrite(SCENE, "   ", "X-1").is_err());
    }

    #[test]
    fn test_rewrite_other_content_untouched() {
        let result = rewrite(SCENE, "HVAC", "X-1").unwrap();
        // 除命中行外应与输入逐字节一致
        let expected = SCENE.replace("  m_Name: HVAC\n", "  m_Name: X-1\n");
        assert_eq!(result.buffer, expected);
    }

    #[test]
    fn test_candidate_order_prefers_unquoted() {
        // 同一token同时以不带引号和单引号形式出现时，先命中不带引号的候选
        let scene = "  m_Name: Door\n  m_Name: 'Door'\n";
        let result = rewrite(scene, "Door", "D-1").unwrap();
        assert_eq!(result.buffer, "  m_Name: D-1\n  m_Name: 'Door'\n");
    }

    #[test]
    fn test_render_variants() {
        let lf = LineEnding::Lf;
        assert_eq!(
            NamePattern { quote: QuoteStyle::Unquoted, ending: lf }.render("HVAC"),
            "  m_Name: HVAC\n"
        );
        assert_eq!(
            NamePattern { quote: QuoteStyle::SingleQuotedPadded, ending: LineEnding::Crlf }
                .render("Room A"),
            "  m_Name: 'Room A '\r\n"
        );
        assert_eq!(
            NamePattern { quote: QuoteStyle::DoubleQuoted, ending: lf }.render("x"),
            "  m_Name: \"x\"\n"
        );
    }
}
