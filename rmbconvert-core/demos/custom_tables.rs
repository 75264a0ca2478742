//! 自定义字符表示例
//!
//! 无参数时打印内置字符表的 TOML；传入 TOML 文件路径时用该表转换几个金额。

use std::path::PathBuf;

use rmbconvert_core::{AlphabetTables, RmbConverter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    rmbconvert_core::init_logging();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        print!("{}", AlphabetTables::builtin().to_toml_string()?);
        return Ok(());
    };

    let tables = AlphabetTables::load(&path)?;
    let converter = RmbConverter::new(&tables);

    println!("Tables: {}", path.display());
    println!("Max yuan: {}", tables.max_encodable_yuan());
    println!("{}", "=".repeat(60));

    for amount in ["0", "12.3", "100050000", "5390021.35"] {
        let formal = converter.encode_from_number(amount.parse::<rmbconvert_core::RmbAmount>()?)?;
        let back = converter.decode_to_number(&formal)?;
        let status = if back.to_string() == amount { "✓" } else { "✗" };
        println!("{} {:<12} → {} → {}", status, amount, formal, back);
        println!("  Normal: {}", converter.decode_to_normal(&formal));
    }

    Ok(())
}
