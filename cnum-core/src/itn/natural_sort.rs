//! 自然排序
//!
//! 先把中文数字转换为阿拉伯数字，再按 "数字段按数值、文字段按字符" 排序，
//! 使 "第十章" 排在 "第二章" 之后。

use std::cmp::Ordering;

use crate::config::SortConfig;
use crate::itn::NumeralScanner;

/// 排序键中的一段
#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk {
    /// 去掉前导零的数字串
    Number(String),
    Text(String),
}

impl Ord for Chunk {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // 位数多的数值大，位数相同时逐位比较，避免溢出
            (Chunk::Number(a), Chunk::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Chunk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 自然排序键
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Chunk>);

/// 生成自然排序键
pub fn natural_key(text: &str, ignore_case: bool) -> NaturalKey {
    let normalized = match NumeralScanner::replace_all(text) {
        Ok(converted) => converted,
        Err(e) => {
            tracing::warn!("排序键生成时中文数字转换失败: {}", e);
            text.to_string()
        }
    };
    let normalized = if ignore_case {
        normalized.to_lowercase()
    } else {
        normalized
    };

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    for ch in normalized.chars() {
        let is_digit = ch.is_ascii_digit();
        if !current.is_empty() && is_digit != in_digits {
            chunks.push(make_chunk(std::mem::take(&mut current), in_digits));
        }
        in_digits = is_digit;
        current.push(ch);
    }
    if !current.is_empty() {
        chunks.push(make_chunk(current, in_digits));
    }

    NaturalKey(chunks)
}

fn make_chunk(text: String, digits: bool) -> Chunk {
    if !digits {
        return Chunk::Text(text);
    }

    let trimmed = text.trim_start_matches('0');
    if trimmed.is_empty() {
        Chunk::Number("0".to_string())
    } else {
        Chunk::Number(trimmed.to_string())
    }
}

/// 自然排序器
#[derive(Debug, Clone, Default)]
pub struct NaturalSorter {
    config: SortConfig,
}

impl NaturalSorter {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// 比较两个字符串
    ///
    /// 键相同时按原文比较，保证全序
    pub fn cmp(&self, a: &str, b: &str) -> Ordering {
        natural_key(a, self.config.ignore_case)
            .cmp(&natural_key(b, self.config.ignore_case))
            .then_with(|| a.cmp(b))
    }

    /// 原地排序，顺序与 [`NaturalSorter::cmp`] 一致
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by_cached_key(|item| {
            let text = item.as_ref();
            (natural_key(text, self.config.ignore_case), text.to_string())
        });
    }
}

/// 使用默认配置比较
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalSorter::default().cmp(a, b)
}

/// 使用默认配置排序
pub fn sort_naturally<S: AsRef<str>>(items: &mut [S]) {
    NaturalSorter::default().sort(items);
}
