//! 编解码集成测试
//!
//! 覆盖公开接口：大写 → 数字、数字 → 大写、大写 ↔ 小写

use proptest::prelude::*;
use rust_decimal_macros::dec;
use rmbconvert_core::{
    decode_simplified_to_number, decode_to_normal, decode_to_number, encode_from_number,
    encode_from_number_to_normal, AlphabetTables, RmbAmount, RmbConverter, RmbError,
};

/// 初始化日志（忽略重复初始化错误）
fn init_log() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

#[test]
fn test_decode_reference_amounts() {
    init_log();

    assert_eq!(
        decode_to_number("伍佰叁拾玖万零贰拾壹元叁角伍分").unwrap().to_decimal(),
        dec!(5390021.35)
    );
    assert_eq!(
        decode_to_number("柒仟陆佰零捌万玖仟贰佰叁拾壹元零贰分").unwrap().to_decimal(),
        dec!(76089231.02)
    );
    assert_eq!(
        decode_to_number("叁拾贰万伍仟玖佰玖拾壹元整").unwrap().to_decimal(),
        dec!(325991)
    );
    assert_eq!(
        decode_to_number("壹仟零壹拾万壹仟零壹拾元陆角柒分").unwrap().to_decimal(),
        dec!(10101010.67)
    );
    assert_eq!(
        decode_to_number("壹仟壹佰壹拾壹万壹仟壹佰壹拾壹元壹角壹分").unwrap().to_decimal(),
        dec!(11111111.11)
    );
}

#[test]
fn test_decode_billions() {
    let amount = decode_to_number("叁拾贰亿伍仟零捌拾万壹仟叁佰玖拾元整").unwrap();
    assert_eq!(amount.yuan(), 3_250_801_390);
    assert!(amount.is_whole());
}

#[test]
fn test_zero_handling() {
    assert_eq!(decode_to_number("零元整").unwrap(), RmbAmount::ZERO);
    assert_eq!(encode_from_number(0).unwrap(), "零元整");
    assert_eq!(encode_from_number(0.0).unwrap(), "零元整");
}

#[test]
fn test_encode_reference_amounts() {
    assert_eq!(
        encode_from_number(10_101_010.67).unwrap(),
        "壹仟零壹拾万壹仟零壹拾元陆角柒分"
    );
    assert_eq!(
        encode_from_number(dec!(5390021.35)).unwrap(),
        "伍佰叁拾玖万零贰拾壹元叁角伍分"
    );
    assert_eq!(
        encode_from_number(325_991u64).unwrap(),
        "叁拾贰万伍仟玖佰玖拾壹元整"
    );
    assert_eq!(
        encode_from_number("76089231.02".parse::<RmbAmount>().unwrap()).unwrap(),
        "柒仟陆佰零捌万玖仟贰佰叁拾壹元零贰分"
    );
}

#[test]
fn test_encode_truncates_extra_fraction_digits() {
    assert_eq!(encode_from_number(dec!(12.349)).unwrap(), "壹拾贰元叁角肆分");
}

#[test]
fn test_encode_rejects_unsupported_amounts() {
    assert!(matches!(
        encode_from_number(-1),
        Err(RmbError::NegativeAmount(_))
    ));
    assert!(matches!(
        encode_from_number(f64::NAN),
        Err(RmbError::UnsupportedAmount { .. })
    ));
    assert!(matches!(
        encode_from_number(10_000_000_000_000u64),
        Err(RmbError::UnsupportedAmount { .. })
    ));
    assert!(encode_from_number(1_000_000_000_000u64).is_ok());
}

#[test]
fn test_decode_rejects_unknown_characters() {
    assert!(matches!(
        decode_to_number("伍佰叁拾玖万零贰拾壹圆"),
        Err(RmbError::InvalidToken(_))
    ));
    assert!(matches!(
        decode_to_number("一百元整"),
        Err(RmbError::InvalidToken(_))
    ));
}

#[test]
fn test_normal_forms() {
    assert_eq!(
        decode_to_normal("伍佰叁拾玖万零贰拾壹元叁角伍分"),
        "五百三十九万零二十一元三角五分"
    );
    assert_eq!(
        encode_from_number_to_normal(76_089_231.02).unwrap(),
        "七千六百零八万九千二百三十一元零二分"
    );
    assert_eq!(
        decode_simplified_to_number("五百三十九万零二十一元三角五分").unwrap(),
        decode_to_number("伍佰叁拾玖万零贰拾壹元叁角伍分").unwrap()
    );
}

#[test]
fn test_custom_tables() {
    let toml = r#"
[formal]
digits = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"]
carries = [
    { symbol = "拾", magnitude = 10 },
    { symbol = "佰", magnitude = 100 },
    { symbol = "仟", magnitude = 1000 },
    { symbol = "萬", magnitude = 10000 },
    { symbol = "億", magnitude = 100000000 },
]

[simplified]
digits = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"]
carries = [
    { symbol = "十", magnitude = 10 },
    { symbol = "百", magnitude = 100 },
    { symbol = "千", magnitude = 1000 },
    { symbol = "万", magnitude = 10000 },
    { symbol = "亿", magnitude = 100000000 },
]

[markers]
yuan = "圆"
jiao = "角"
fen = "分"
whole = "整"
"#;

    let tables = AlphabetTables::from_toml_str(toml).unwrap();
    let converter = RmbConverter::new(&tables);

    let formal = converter.encode_from_number(100_050_000u64).unwrap();
    assert_eq!(formal, "壹億零伍萬圆整");
    assert_eq!(converter.decode_to_normal(&formal), "一亿〇五万圆整");
    assert_eq!(converter.decode_to_number(&formal).unwrap().yuan(), 100_050_000);
}

proptest! {
    #[test]
    fn round_trip_property(cents in 0u64..1_000_000_000_000_000) {
        let amount = RmbAmount::from_cents(cents);
        let formal = encode_from_number(amount).unwrap();
        prop_assert_eq!(decode_to_number(&formal).unwrap(), amount, "formal: {}", formal);
    }

    #[test]
    fn simplified_round_trip_property(cents in 0u64..1_000_000_000_000_000) {
        let amount = RmbAmount::from_cents(cents);
        let simplified = encode_from_number_to_normal(amount).unwrap();
        prop_assert_eq!(decode_simplified_to_number(&simplified).unwrap(), amount);
    }

    #[test]
    fn normalization_involution_property(cents in 0u64..1_000_000_000_000_000) {
        let converter = RmbConverter::builtin();
        let formal = converter.encode_from_number(RmbAmount::from_cents(cents)).unwrap();
        let simplified = converter.decode_to_normal(&formal);
        prop_assert_eq!(converter.normal_to_formal(&simplified), formal);
    }
}
