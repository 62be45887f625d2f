//! ITN 集成测试
//!
//! 通过公开接口测试完整的转换管道

use cnum_core::itn::{natural_cmp, ITNEngine, ITNMode};
use cnum_core::{convert_numeral_run, convert_numerals_in_text, CnumConfig};
use std::cmp::Ordering;

#[test]
fn test_numeral_run_examples() {
    assert_eq!(convert_numeral_run("零"), "0");
    assert_eq!(convert_numeral_run("〇"), "0");
    assert_eq!(convert_numeral_run("十"), "10");
    assert_eq!(convert_numeral_run("二十五"), "25");
    assert_eq!(convert_numeral_run("一百零五"), "105");
    assert_eq!(convert_numeral_run("二千零三十五"), "2035");
    assert_eq!(convert_numeral_run("一万零五"), "10005");
    assert_eq!(convert_numeral_run("廿五"), "25");
}

#[test]
fn test_text_without_numerals_is_untouched() {
    for text in ["", "hello", "123 abc", "你好，世界！", "第章节", "🙂 emoji"] {
        assert_eq!(convert_numerals_in_text(text), text);
    }
}

#[test]
fn test_multiple_runs() {
    assert_eq!(convert_numerals_in_text("第三章第二节"), "第3章第2节");
    assert_eq!(
        convert_numerals_in_text("共有两千零三十五人，分成廿组"),
        "共有2035人，分成20组"
    );
    assert_eq!(
        convert_numerals_in_text("合计：壹万贰仟叁佰元整"),
        "合计：12300元整"
    );
}

#[test]
fn test_second_pass_is_noop() {
    for text in ["第三章第二节", "一亿零十万", "零零", "三万五千 and 廿五", "兆兆兆年"] {
        let once = convert_numerals_in_text(text);
        assert_eq!(convert_numerals_in_text(&once), once);
    }
}

#[test]
fn test_unparseable_runs_pass_through() {
    assert_eq!(convert_numerals_in_text("代号零零"), "代号零零");
}

#[test]
fn test_arbitrarily_large_values() {
    assert_eq!(
        convert_numerals_in_text("兆兆兆年"),
        format!("1{}年", "0".repeat(48))
    );
    let run = "九".repeat(45);
    assert_eq!(convert_numeral_run(&run), "9".repeat(45));
}

#[test]
fn test_engine_matches_entry_point() {
    let engine = ITNEngine::new(ITNMode::Auto);
    for text in ["第三章第二节", "一百零五个", "none"] {
        assert_eq!(engine.process(text).text, convert_numerals_in_text(text));
    }
}

#[test]
fn test_engine_rollback() {
    let engine = ITNEngine::new(ITNMode::Auto);
    let result = engine.process("三月五日");
    assert_eq!(result.text, "3月5日");
    assert_eq!(result.changes.len(), 2);
    assert_eq!(result.rollback(0).unwrap(), "三月5日");
}

#[test]
fn test_engine_from_config() {
    let mut config = CnumConfig::default();
    config.itn.mode = ITNMode::Raw;
    let engine = ITNEngine::from_config(&config.itn);
    assert_eq!(engine.process("一千").text, "一千");
}

#[test]
fn test_natural_order() {
    assert_eq!(natural_cmp("第二章", "第十章"), Ordering::Less);
    assert_eq!(natural_cmp("第一百章", "第99章"), Ordering::Greater);
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| convert_numerals_in_text("第二千零三十五号")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "第2035号");
    }
}
