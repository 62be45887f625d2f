//! 中文数字转换模块
//!
//! 将一段连续的中文数字字符（例如 "二千零三十五"、"卅五"）转换为阿拉伯数字。
//!
//! 两遍处理：
//! 1. 从左到右生成 Token 序列（数字 / 单位 / 零）
//! 2. 从右到左按万级分块累加

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::itn::lexicon;

/// 解析过程中的临时单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// 等待乘以单位的数字
    Number(BigUint),
    /// 单位倍数（可能由多个单位字符相乘，如 "十万"）
    Rank(BigUint),
    /// 显式的零，表示跳过了某一位
    Zero,
}

/// 中文数字转换器
pub struct ChineseNumberConverter;

impl ChineseNumberConverter {
    /// 将中文数字串转换为阿拉伯数字串
    ///
    /// 输入应为一段完整的中文数字字符。无法得出数值时原样返回，不会失败。
    ///
    /// # 示例
    /// ```
    /// # use cnum_core::itn::chinese_number::ChineseNumberConverter;
    /// assert_eq!(ChineseNumberConverter::convert("二千零三十五"), "2035");
    /// assert_eq!(ChineseNumberConverter::convert("卅五"), "35");
    /// ```
    pub fn convert(text: &str) -> String {
        // 单独的零没有单位可乘，通用流程会丢掉它
        if text == "零" || text == "〇" {
            return "0".to_string();
        }

        match Self::parse(text) {
            Some(value) => value.to_string(),
            None => {
                tracing::debug!("中文数字保持原文: {}", text);
                text.to_string()
            }
        }
    }

    /// 解析为整数
    ///
    /// 没有可用的数字内容时返回 None。
    pub fn parse(text: &str) -> Option<BigUint> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return None;
        }

        Self::reduce(&tokens)
    }

    /// 从左到右生成 Token 序列
    pub fn tokenize(text: &str) -> Vec<Token> {
        let ten = BigUint::from(10u32);
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut tokens = Vec::with_capacity(len + 2);

        // 单位开头时补一个隐含的 "一"："十五" = "一十五"
        if chars
            .first()
            .is_some_and(|&ch| lexicon::rank_multiplier(ch).is_some())
        {
            tokens.push(Token::Number(BigUint::one()));
        }

        for (i, &ch) in chars.iter().enumerate() {
            if let Some(value) = lexicon::digit_value(ch) {
                // 两个数字相邻：为前一个数字补上它所在的位
                if let Some(Token::Number(_)) = tokens.last() {
                    tokens.push(Token::Rank(num_traits::pow(ten.clone(), len - i)));
                }

                match value {
                    0 => tokens.push(Token::Zero),
                    // 廿卅卌等合体字：十位数字 + 十
                    v if v >= 10 => {
                        tokens.push(Token::Number(BigUint::from(v / 10)));
                        tokens.push(Token::Rank(ten.clone()));
                    }
                    v => tokens.push(Token::Number(BigUint::from(v))),
                }
            } else if let Some(rank) = lexicon::rank_multiplier(ch) {
                let rank = BigUint::from(rank);
                let n = tokens.len();
                let zero_then_ten = n >= 2
                    && tokens[n - 2] == Token::Zero
                    && tokens[n - 1] == Token::Rank(ten.clone());

                if zero_then_ten {
                    // "零十" 后接单位：这里的十是数字十，单位重新开始
                    tokens[n - 1] = Token::Number(ten.clone());
                    tokens.push(Token::Rank(rank));
                } else if let Some(Token::Rank(prev)) = tokens.last_mut() {
                    // 复合单位，如 "十万"、"千亿"
                    *prev *= rank;
                } else {
                    tokens.push(Token::Rank(rank));
                }
            }
        }

        // 末位数字没有单位："十五" 的五在十的下一位
        let trailing_rank = match tokens.as_slice() {
            [.., Token::Rank(rank), Token::Number(_)] => Some(rank / 10u32),
            _ => None,
        };
        if let Some(rank) = trailing_rank {
            tokens.push(Token::Rank(rank));
        }

        tokens
    }

    /// 从右到左累加 Token 序列
    ///
    /// 从最小的位开始：数字乘以当前倍数计入当前块；单位大于本级倍数时开启
    /// 更高一级，否则在本级内细分。全部 Token 都不产生块时返回 None。
    pub fn reduce(tokens: &[Token]) -> Option<BigUint> {
        let mut level_rank = BigUint::one();
        let mut current_rank = BigUint::one();
        // 已封闭块之和；None 表示还没有开过块
        let mut sealed: Option<BigUint> = None;
        let mut block = BigUint::zero();

        for token in tokens.iter().rev() {
            match token {
                Token::Number(value) => {
                    sealed.get_or_insert_with(BigUint::zero);
                    block += value * &current_rank;
                }
                Token::Rank(rank) => {
                    if sealed.is_none() {
                        level_rank = rank.clone();
                        current_rank = rank.clone();
                        sealed = Some(BigUint::zero());
                        continue;
                    }

                    if let Some(total) = sealed.as_mut() {
                        *total += std::mem::take(&mut block);
                    }

                    if *rank > level_rank {
                        level_rank = rank.clone();
                        current_rank = rank.clone();
                    } else {
                        current_rank = rank * &level_rank;
                    }
                }
                // 零只影响 Token 生成，不贡献数值
                Token::Zero => {}
            }
        }

        sealed.map(|total| total + block)
    }

    /// 检查文本是否全部由中文数字字符组成
    pub fn is_chinese_number(text: &str) -> bool {
        !text.is_empty() && text.chars().all(lexicon::is_numeral_char)
    }
}
