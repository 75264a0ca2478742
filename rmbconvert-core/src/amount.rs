//! 数字金额
//!
//! 以 "分" 为单位的定点整数，避免浮点累加误差。
//! 小数只保留角、分两位，多余位数直接截断。

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{RmbError, RmbResult};

/// 非负人民币金额（单位：分）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RmbAmount {
    cents: u64,
}

impl RmbAmount {
    pub const ZERO: RmbAmount = RmbAmount { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn from_yuan(yuan: u64) -> RmbResult<Self> {
        Self::from_parts(yuan, 0, 0)
    }

    /// 由元、角、分构造
    pub fn from_parts(yuan: u64, jiao: u8, fen: u8) -> RmbResult<Self> {
        if jiao > 9 || fen > 9 {
            return Err(RmbError::InvalidAmount(format!("{yuan}元{jiao}角{fen}分")));
        }

        yuan.checked_mul(100)
            .and_then(|c| c.checked_add(u64::from(jiao) * 10 + u64::from(fen)))
            .map(Self::from_cents)
            .ok_or_else(|| RmbError::UnsupportedAmount {
                amount: yuan.to_string(),
                reason: "exceeds the representable range".to_string(),
            })
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn yuan(&self) -> u64 {
        self.cents / 100
    }

    pub fn jiao(&self) -> u8 {
        ((self.cents / 10) % 10) as u8
    }

    pub fn fen(&self) -> u8 {
        (self.cents % 10) as u8
    }

    /// 没有角分
    pub fn is_whole(&self) -> bool {
        self.cents % 100 == 0
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.cents), 2)
    }
}

impl fmt::Display for RmbAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.yuan())?;
        if !self.is_whole() {
            write!(f, ".{}", self.jiao())?;
            if self.fen() != 0 {
                write!(f, "{}", self.fen())?;
            }
        }
        Ok(())
    }
}

impl FromStr for RmbAmount {
    type Err = RmbError;

    /// 解析 "123"、"123.4"、"123.45"；第三位及以后的小数被截断
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.starts_with('-') {
            return Err(RmbError::NegativeAmount(text.to_string()));
        }

        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (text, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
            return Err(RmbError::InvalidAmount(s.to_string()));
        }

        let yuan: u64 = integer.parse().map_err(|_| RmbError::UnsupportedAmount {
            amount: text.to_string(),
            reason: "exceeds the representable range".to_string(),
        })?;

        let mut digits = fraction.bytes().map(|b| b - b'0');
        let jiao = digits.next().unwrap_or(0);
        let fen = digits.next().unwrap_or(0);

        Self::from_parts(yuan, jiao, fen)
    }
}

impl TryFrom<f64> for RmbAmount {
    type Error = RmbError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(RmbError::UnsupportedAmount {
                amount: value.to_string(),
                reason: "not a finite number".to_string(),
            });
        }
        if value < 0.0 {
            return Err(RmbError::NegativeAmount(value.to_string()));
        }
        // f64 的 Display 是最短可还原的十进制表示，按字符串截断避免 0.29 * 100 之类的误差
        format!("{}", value.abs()).parse()
    }
}

impl TryFrom<Decimal> for RmbAmount {
    type Error = RmbError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(RmbError::NegativeAmount(value.to_string()));
        }
        value.abs().to_string().parse()
    }
}

macro_rules! impl_try_from_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for RmbAmount {
                type Error = RmbError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    let yuan = u64::try_from(value)
                        .map_err(|_| RmbError::NegativeAmount(value.to_string()))?;
                    Self::from_yuan(yuan)
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, i64, u32, u64, usize);
