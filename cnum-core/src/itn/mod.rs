//! ITN (Inverse Text Normalization) 模块
//!
//! 将文本中的中文数字转换为阿拉伯数字

pub mod lexicon;
pub mod chinese_number;
pub mod scanner;
pub mod engine;
pub mod natural_sort;

// 导出核心类型
pub use chinese_number::{ChineseNumberConverter, Token};
pub use scanner::{NumeralRun, NumeralScanner};
pub use engine::{ITNEngine, ITNMode, ITNChange, ITNResult};
pub use natural_sort::{natural_cmp, natural_key, sort_naturally, NaturalKey, NaturalSorter};
