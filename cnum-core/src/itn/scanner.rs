//! Scanner - 中文数字片段扫描
//!
//! 在任意文本中找出连续的中文数字字符片段，交给转换器处理后拼回原位

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CnumError, CnumResult};
use crate::itn::lexicon;
use crate::itn::ChineseNumberConverter;

static NUMERAL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(&lexicon::numeral_class_pattern()));

/// 一段连续的中文数字字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralRun {
    /// 在原始文本中的字节范围
    pub span: Range<usize>,
    /// 片段内容
    pub content: String,
}

impl NumeralRun {
    /// 转换后的文本
    pub fn converted(&self) -> String {
        ChineseNumberConverter::convert(&self.content)
    }
}

/// 中文数字片段扫描器
pub struct NumeralScanner;

impl NumeralScanner {
    fn pattern() -> CnumResult<&'static Regex> {
        match &*NUMERAL_RE {
            Ok(re) => Ok(re),
            Err(e) => Err(CnumError::Pattern(e.to_string())),
        }
    }

    /// 找出所有最长的连续中文数字片段
    pub fn find_runs(text: &str) -> CnumResult<Vec<NumeralRun>> {
        let re = Self::pattern()?;

        Ok(re
            .find_iter(text)
            .map(|m| NumeralRun {
                span: m.range(),
                content: m.as_str().to_string(),
            })
            .collect())
    }

    /// 替换文本中的所有中文数字片段，其余字符保持不变
    pub fn replace_all(text: &str) -> CnumResult<String> {
        let re = Self::pattern()?;

        Ok(re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                ChineseNumberConverter::convert(&caps[0])
            })
            .into_owned())
    }
}
