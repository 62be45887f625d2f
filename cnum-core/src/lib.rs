//! cnum Core
//!
//! 中文数字文本转换核心：把文本中的 "二千零三十五"、"卅五" 等中文数字
//! 转换为阿拉伯数字，其余文本保持不变。

#![warn(rust_2018_idioms)]

pub mod itn;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{CnumError, CnumResult};
pub use config::CnumConfig;
pub use itn::{ChineseNumberConverter, ITNEngine, ITNMode, ITNResult, NumeralScanner};

/// 转换一段连续的中文数字字符
///
/// 无法得出数值时原样返回。
pub fn convert_numeral_run(text: &str) -> String {
    ChineseNumberConverter::convert(text)
}

/// 转换文本中的所有中文数字片段
///
/// 没有中文数字或内部出错时返回原文。
pub fn convert_numerals_in_text(text: &str) -> String {
    match NumeralScanner::replace_all(text) {
        Ok(converted) => converted,
        Err(e) => {
            tracing::warn!("中文数字转换失败，保留原文: {}", e);
            text.to_string()
        }
    }
}

/// 初始化日志系统
///
/// 调试模式 (--features debug-logs): 按 CNUM_LOG 过滤输出，默认 warn
/// 生产模式: 静默运行
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("CNUM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
