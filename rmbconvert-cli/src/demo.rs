//! 示例输出：大写转小写、大写转数字，以及数字转大写

use rmbconvert_core::{RmbAmount, RmbConverter, RmbResult};

const UPPER_VALUES: &[&str] = &[
    "伍佰叁拾玖万零贰拾壹元叁角伍分",
    "柒仟陆佰零捌万玖仟贰佰叁拾壹元零贰分",
    "叁拾贰万伍仟玖佰玖拾壹元整",
    "壹仟零壹拾万壹仟零壹拾元陆角柒分",
    "壹仟壹佰壹拾壹万壹仟壹佰壹拾壹元壹角壹分",
];

const NUMBER_VALUES: &[&str] = &[
    "5390021.35",
    "76089231.02",
    "325991",
    "10101010.67",
    "3250801390",
];

/// 生成示例输出的全部行
pub fn render(converter: &RmbConverter<'_>) -> RmbResult<Vec<String>> {
    let line = "*".repeat(30);
    let mut lines = vec![format!("{line} 大写转小写 {line}")];

    for value in UPPER_VALUES {
        let normal = converter.decode_to_normal(value);
        let number = converter.decode_to_number(value)?;
        lines.push(format!(
            "原始金额: {:<25} to normal: {:<25} to number: {:<20}",
            value,
            normal,
            number.to_string()
        ));
    }

    lines.push(String::new());
    lines.push(format!("{line} 小写转大写 {line}"));

    for value in NUMBER_VALUES {
        let amount: RmbAmount = value.parse()?;
        let formal = converter.encode_from_number(amount)?;
        let normal = converter.encode_from_number_to_normal(amount)?;
        lines.push(format!(
            "原始金额: {:<20} to upper: {:<30} to normal: {:<30}",
            value, formal, normal
        ));
    }

    Ok(lines)
}
