//! 命令行参数解析

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rmbconvert_core::OutputScript;

/// 人民币大写金额转换工具
#[derive(Parser, Debug, Clone)]
#[command(name = "rmbconvert")]
#[command(about = "人民币大写金额 ↔ 数字金额转换")]
#[command(version)]
pub struct Cli {
    /// 配置文件路径（默认 ~/.config/rmbconvert/config.toml）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 字符表文件（TOML），优先于配置文件中的 tables
    #[arg(long, global = true)]
    pub tables: Option<PathBuf>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 大写金额 → 数字（非大写输入按小写处理）
    Decode {
        /// 金额文本，例如 伍佰叁拾玖万零贰拾壹元叁角伍分
        text: String,

        /// 强制按小写金额解析
        #[arg(long)]
        simplified: bool,
    },

    /// 数字 → 大写金额
    Encode {
        /// 数字金额，例如 5390021.35
        amount: String,

        /// 输出写法，默认取配置文件中的 output.script
        #[arg(long, value_enum)]
        script: Option<ScriptArg>,

        /// 整数金额不追加 "整"
        #[arg(long)]
        no_whole_marker: bool,
    },

    /// 大写 ↔ 小写
    Normalize {
        /// 金额文本
        text: String,

        /// 小写 → 大写（默认大写 → 小写）
        #[arg(long)]
        to_formal: bool,
    },

    /// 打印示例金额的双向转换结果
    Demo,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptArg {
    Formal,
    Simplified,
}

impl From<ScriptArg> for OutputScript {
    fn from(arg: ScriptArg) -> Self {
        match arg {
            ScriptArg::Formal => OutputScript::Formal,
            ScriptArg::Simplified => OutputScript::Simplified,
        }
    }
}

impl Cli {
    /// 解析命令行参数
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
