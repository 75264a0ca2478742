use rmbconvert_core::{decode_to_normal, decode_to_number, encode_from_number};

fn main() {
    rmbconvert_core::init_logging();

    let test_cases = vec![
        ("伍佰叁拾玖万零贰拾壹元叁角伍分", "5390021.35"),
        ("柒仟陆佰零捌万玖仟贰佰叁拾壹元零贰分", "76089231.02"),
        ("叁拾贰万伍仟玖佰玖拾壹元整", "325991"),
        ("壹仟零壹拾万壹仟零壹拾元陆角柒分", "10101010.67"),
        ("壹仟壹佰壹拾壹万壹仟壹佰壹拾壹元壹角壹分", "11111111.11"),
        ("叁拾贰亿伍仟零捌拾万壹仟叁佰玖拾元整", "3250801390"),
    ];

    println!("Testing RMB decode:");
    println!("{}", "=".repeat(60));

    for (input, expected) in &test_cases {
        let got = match decode_to_number(input) {
            Ok(amount) => amount.to_string(),
            Err(e) => format!("error: {}", e),
        };
        let status = if got == *expected { "✓" } else { "✗" };
        println!("{} Input:    {}", status, input);
        println!("  Normal:   {}", decode_to_normal(input));
        println!("  Expected: {}", expected);
        println!("  Got:      {}", got);
        println!();
    }

    println!("Testing RMB encode:");
    println!("{}", "=".repeat(60));

    for (expected, input) in &test_cases {
        let got = match input.parse::<rmbconvert_core::RmbAmount>() {
            Ok(amount) => encode_from_number(amount).unwrap_or_else(|e| format!("error: {}", e)),
            Err(e) => format!("error: {}", e),
        };
        let status = if got == *expected { "✓" } else { "✗" };
        println!("{} Input:    {}", status, input);
        println!("  Expected: {}", expected);
        println!("  Got:      {}", got);
        println!();
    }
}
