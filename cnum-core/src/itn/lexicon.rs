//! 数字字符表
//!
//! 数字字符 → 数值，单位字符 → 倍数。纯静态数据，无初始化，可跨线程共享。

/// 数字字符（含大写数字与廿卅卌等合体字）
pub const DIGIT_CHARS: &str = "零〇两一二三四五六七八九壹贰叁肆伍陆柒捌玖貳廿卅卌圩圆进枯枠";

/// 单位字符
pub const RANK_CHARS: &str = "十百千万亿拾佰仟兆";

/// 数字字符的数值
///
/// 合体字（廿、卅、卌、圩、圆、进、枯、枠）的数值本身已包含十位，
/// 例如 廿 → 20。
pub fn digit_value(ch: char) -> Option<u32> {
    let value = match ch {
        '零' | '〇' => 0,
        '一' | '壹' => 1,
        '二' | '两' | '贰' | '貳' => 2,
        '三' | '叁' => 3,
        '四' | '肆' => 4,
        '五' | '伍' => 5,
        '六' | '陆' => 6,
        '七' | '柒' => 7,
        '八' | '捌' => 8,
        '九' | '玖' => 9,
        '廿' => 20,
        '卅' => 30,
        '卌' => 40,
        '圩' => 50,
        '圆' => 60,
        '进' => 70,
        '枯' => 80,
        '枠' => 90,
        _ => return None,
    };
    Some(value)
}

/// 单位字符的倍数
pub fn rank_multiplier(ch: char) -> Option<u128> {
    let multiplier = match ch {
        '十' | '拾' => 10,
        '百' | '佰' => 100,
        '千' | '仟' => 1_000,
        '万' => 10_000,
        '亿' => 100_000_000,
        '兆' => 10_000_000_000_000_000,
        _ => return None,
    };
    Some(multiplier)
}

/// 是否为零（零、〇）
pub fn is_zero_char(ch: char) -> bool {
    digit_value(ch) == Some(0)
}

/// 是否为数字或单位字符
pub fn is_numeral_char(ch: char) -> bool {
    digit_value(ch).is_some() || rank_multiplier(ch).is_some()
}

/// 扫描用的正则字符类：`[数字字符单位字符]+`
pub fn numeral_class_pattern() -> String {
    format!("[{}{}]+", DIGIT_CHARS, RANK_CHARS)
}
