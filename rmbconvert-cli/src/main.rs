//! rmbconvert 命令行工具
//!
//! 大写金额、小写金额与数字金额互相转换：
//! - decode: 大写/小写 → 数字
//! - encode: 数字 → 大写/小写
//! - normalize: 大写 ↔ 小写

mod cli;
mod demo;

use anyhow::Context;
use rmbconvert_core::{AlphabetTables, OutputScript, RmbAmount, RmbConfig, RmbConverter};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // 日志输出到 stderr，避免混入转换结果
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("rmbconvert v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => RmbConfig::load_from(path)
            .with_context(|| format!("无法加载配置文件 {}", path.display()))?,
        None => RmbConfig::load().context("无法加载配置文件")?,
    };

    let tables = match &cli.tables {
        Some(path) => AlphabetTables::load(path)
            .with_context(|| format!("无法加载字符表 {}", path.display()))?,
        None => config.resolve_tables().context("无法加载配置中的字符表")?,
    };

    for line in run(&cli.command, &config, &tables)? {
        println!("{line}");
    }

    Ok(())
}

/// 执行子命令，返回要输出的行
fn run(command: &Command, config: &RmbConfig, tables: &AlphabetTables) -> anyhow::Result<Vec<String>> {
    let converter = RmbConverter::new(tables).with_whole_marker(config.output.whole_marker);

    match command {
        Command::Decode { text, simplified } => {
            let text = text.trim();
            let amount = if *simplified || !converter.is_formal_amount(text) {
                tracing::info!("按小写金额解析: {}", text);
                converter.decode_simplified_to_number(text)
            } else {
                converter.decode_to_number(text)
            }
            .with_context(|| format!("无法解析金额 {text}"))?;

            Ok(vec![amount.to_string()])
        }

        Command::Encode {
            amount,
            script,
            no_whole_marker,
        } => {
            let converter = if *no_whole_marker {
                converter.with_whole_marker(false)
            } else {
                converter
            };
            let value: RmbAmount = amount
                .parse()
                .with_context(|| format!("无效的数字金额 {amount}"))?;

            let script = script.map(OutputScript::from).unwrap_or(config.output.script);
            let text = match script {
                OutputScript::Formal => converter.encode_from_number(value),
                OutputScript::Simplified => converter.encode_from_number_to_normal(value),
            }
            .with_context(|| format!("无法转换金额 {amount}"))?;

            Ok(vec![text])
        }

        Command::Normalize { text, to_formal } => {
            let text = if *to_formal {
                converter.normal_to_formal(text)
            } else {
                converter.decode_to_normal(text)
            };
            Ok(vec![text])
        }

        Command::Demo => Ok(demo::render(&converter)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ScriptArg;

    fn run_builtin(command: Command) -> Vec<String> {
        run(&command, &RmbConfig::default(), AlphabetTables::builtin()).unwrap()
    }

    #[test]
    fn test_decode_command() {
        let out = run_builtin(Command::Decode {
            text: "伍佰叁拾玖万零贰拾壹元叁角伍分".to_string(),
            simplified: false,
        });
        assert_eq!(out, vec!["5390021.35"]);
    }

    #[test]
    fn test_decode_command_detects_simplified_input() {
        let out = run_builtin(Command::Decode {
            text: "三十二万五千九百九十一元整".to_string(),
            simplified: false,
        });
        assert_eq!(out, vec!["325991"]);
    }

    #[test]
    fn test_encode_command() {
        let out = run_builtin(Command::Encode {
            amount: "10101010.67".to_string(),
            script: None,
            no_whole_marker: false,
        });
        assert_eq!(out, vec!["壹仟零壹拾万壹仟零壹拾元陆角柒分"]);

        let out = run_builtin(Command::Encode {
            amount: "300".to_string(),
            script: Some(ScriptArg::Simplified),
            no_whole_marker: true,
        });
        assert_eq!(out, vec!["三百元"]);
    }

    #[test]
    fn test_encode_command_rejects_bad_amount() {
        let command = Command::Encode {
            amount: "abc".to_string(),
            script: None,
            no_whole_marker: false,
        };
        assert!(run(&command, &RmbConfig::default(), AlphabetTables::builtin()).is_err());
    }

    #[test]
    fn test_normalize_command() {
        let out = run_builtin(Command::Normalize {
            text: "叁佰元整".to_string(),
            to_formal: false,
        });
        assert_eq!(out, vec!["三百元整"]);

        let out = run_builtin(Command::Normalize {
            text: "三百元整".to_string(),
            to_formal: true,
        });
        assert_eq!(out, vec!["叁佰元整"]);
    }
}
