//! rmbconvert 核心库
//!
//! 人民币大写金额（"伍佰叁拾玖万零贰拾壹元叁角伍分"）、小写金额
//! （"五百三十九万零二十一元三角五分"）与数字金额（5390021.35）之间的双向转换
//!
//! ```
//! use rmbconvert_core::{decode_to_number, encode_from_number};
//!
//! let amount = decode_to_number("柒仟陆佰零捌万玖仟贰佰叁拾壹元零贰分").unwrap();
//! assert_eq!(amount.to_string(), "76089231.02");
//! assert_eq!(
//!     encode_from_number(amount).unwrap(),
//!     "柒仟陆佰零捌万玖仟贰佰叁拾壹元零贰分"
//! );
//! ```

#![warn(rust_2018_idioms)]

pub mod amount;
pub mod codec;
pub mod config;
pub mod error;
pub mod tables;

// Re-export key types
pub use amount::RmbAmount;
pub use codec::RmbConverter;
pub use config::{OutputScript, RmbConfig};
pub use error::{RmbError, RmbResult};
pub use tables::AlphabetTables;

/// 大写金额 → 数字金额
///
/// 任一字符不在大写字符表（含元角分整）中时返回 [`RmbError::InvalidToken`]
pub fn decode_to_number(formal: &str) -> RmbResult<RmbAmount> {
    RmbConverter::builtin().decode_to_number(formal)
}

/// 小写金额 → 数字金额
pub fn decode_simplified_to_number(simplified: &str) -> RmbResult<RmbAmount> {
    RmbConverter::builtin().decode_simplified_to_number(simplified)
}

/// 大写金额 → 小写金额
pub fn decode_to_normal(formal: &str) -> String {
    RmbConverter::builtin().decode_to_normal(formal)
}

/// 数字金额 → 大写金额
///
/// 接受 `u64`/`u32`/`i64`/`i32`/`f64`/`Decimal`/[`RmbAmount`]，小数第三位起截断
pub fn encode_from_number<A>(amount: A) -> RmbResult<String>
where
    A: TryInto<RmbAmount>,
    RmbError: From<A::Error>,
{
    RmbConverter::builtin().encode_from_number(amount)
}

/// 数字金额 → 小写金额
pub fn encode_from_number_to_normal<A>(amount: A) -> RmbResult<String>
where
    A: TryInto<RmbAmount>,
    RmbError: From<A::Error>,
{
    RmbConverter::builtin().encode_from_number_to_normal(amount)
}

/// 检查文本是否为大写金额
pub fn is_formal_amount(text: &str) -> bool {
    RmbConverter::builtin().is_formal_amount(text)
}

/// 初始化日志系统
///
/// 仅在 `debug-logs` feature 下安装 subscriber，级别由 RMBCONVERT_LOG 控制（默认 warn）。
/// 可以安全地多次调用。
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("RMBCONVERT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 已经初始化过时 try_init 返回错误，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
