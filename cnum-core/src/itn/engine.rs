//! ITN Engine - 主管道
//!
//! 扫描文本中的中文数字片段，逐段转换并记录变更

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::config::ItnConfig;
use crate::error::CnumResult;
use crate::itn::NumeralScanner;

/// ITN 模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ITNMode {
    /// 自动模式 - 转换全部中文数字
    #[default]
    Auto,
    /// 原始模式 - 跳过全部 ITN
    Raw,
}

/// ITN 变更记录（用于回滚）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ITNChange {
    /// 原始文本范围
    pub original_span: Range<usize>,
    /// 原始文本
    pub original_text: String,
    /// 规范化后的文本
    pub normalized_text: String,
}

/// ITN 处理结果
#[derive(Debug, Clone)]
pub struct ITNResult {
    /// 规范化后的文本
    pub text: String,
    /// 变更记录列表（按原文位置排序）
    pub changes: Vec<ITNChange>,
}

impl ITNResult {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            changes: Vec::new(),
        }
    }

    /// 撤销第 `index` 条变更，返回撤销后的文本
    ///
    /// 索引越界时返回 None
    pub fn rollback(&self, index: usize) -> Option<String> {
        let change = self.changes.get(index)?;

        // 换算到规范化文本中的位置：前面每条变更都改变了长度
        let shift: isize = self.changes[..index]
            .iter()
            .map(|c| c.normalized_text.len() as isize - c.original_text.len() as isize)
            .sum();
        let start = (change.original_span.start as isize + shift) as usize;
        let end = start + change.normalized_text.len();

        let mut text = String::with_capacity(self.text.len());
        text.push_str(self.text.get(..start)?);
        text.push_str(&change.original_text);
        text.push_str(self.text.get(end..)?);
        Some(text)
    }
}

/// ITN 引擎
pub struct ITNEngine {
    mode: ITNMode,
    record_changes: bool,
}

impl Default for ITNEngine {
    fn default() -> Self {
        Self::new(ITNMode::Auto)
    }
}

impl ITNEngine {
    /// 创建新的 ITN 引擎
    pub fn new(mode: ITNMode) -> Self {
        Self {
            mode,
            record_changes: true,
        }
    }

    /// 从配置创建
    pub fn from_config(config: &ItnConfig) -> Self {
        Self {
            mode: config.mode,
            record_changes: config.record_changes,
        }
    }

    pub fn mode(&self) -> ITNMode {
        self.mode
    }

    /// 处理文本
    ///
    /// 内部出错时返回未修改的原文
    pub fn process(&self, text: &str) -> ITNResult {
        // 原始模式：直接返回
        if self.mode == ITNMode::Raw {
            return ITNResult::unchanged(text);
        }

        match self.try_process(text) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("ITN 处理失败，保留原文: {}", e);
                ITNResult::unchanged(text)
            }
        }
    }

    fn try_process(&self, text: &str) -> CnumResult<ITNResult> {
        let runs = NumeralScanner::find_runs(text)?;
        if runs.is_empty() {
            return Ok(ITNResult::unchanged(text));
        }

        let mut merged = String::with_capacity(text.len());
        let mut changes = Vec::new();
        let mut cursor = 0;

        for run in runs {
            merged.push_str(&text[cursor..run.span.start]);

            let converted = run.converted();
            merged.push_str(&converted);
            cursor = run.span.end;

            if self.record_changes && converted != run.content {
                changes.push(ITNChange {
                    original_span: run.span,
                    original_text: run.content,
                    normalized_text: converted,
                });
            }
        }
        merged.push_str(&text[cursor..]);

        tracing::debug!("ITN: {} → {} ({} 处变更)", text, merged, changes.len());

        Ok(ITNResult {
            text: merged,
            changes,
        })
    }
}
