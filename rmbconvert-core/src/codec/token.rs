//! 单字符 Token
//!
//! 把一个大写字符分类为数字或进位。进位之间可以比较数量级。

use std::cmp::Ordering;
use std::fmt;

use crate::error::{RmbError, RmbResult};
use crate::tables::Script;

/// 数字或进位字符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// 数字 0-9
    Digit { symbol: char, value: u8 },
    /// 进位：拾、佰、仟、万、亿
    Carry { symbol: char, magnitude: u64 },
}

impl Token {
    /// 从恰好一个字符的字符串构造 Token
    ///
    /// ```
    /// # use rmbconvert_core::codec::Token;
    /// # use rmbconvert_core::tables::AlphabetTables;
    /// let script = &AlphabetTables::builtin().formal;
    /// let token = Token::classify("佰", script).unwrap();
    /// assert_eq!(token.value(), 100);
    /// assert!(Token::classify("佰仟", script).is_err());
    /// ```
    pub fn classify(text: &str, script: &Script) -> RmbResult<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch, script),
            _ => Err(RmbError::InvalidToken(text.to_string())),
        }
    }

    pub fn from_char(ch: char, script: &Script) -> RmbResult<Self> {
        if let Some(value) = script.digit_value(ch) {
            return Ok(Token::Digit { symbol: ch, value });
        }
        if let Some(magnitude) = script.carry_magnitude(ch) {
            return Ok(Token::Carry {
                symbol: ch,
                magnitude,
            });
        }
        Err(RmbError::InvalidToken(ch.to_string()))
    }

    pub fn symbol(&self) -> char {
        match *self {
            Token::Digit { symbol, .. } | Token::Carry { symbol, .. } => symbol,
        }
    }

    /// 数字的值或进位的数量级
    pub fn value(&self) -> u64 {
        match *self {
            Token::Digit { value, .. } => u64::from(value),
            Token::Carry { magnitude, .. } => magnitude,
        }
    }

    pub fn is_carry(&self) -> bool {
        matches!(self, Token::Carry { .. })
    }

    pub fn is_digit(&self) -> bool {
        matches!(self, Token::Digit { .. })
    }

    /// 比较两个进位的数量级；只要有一方是数字就返回 `None`
    pub fn compare_magnitude(&self, other: &Token) -> Option<Ordering> {
        match (self, other) {
            (Token::Carry { magnitude: a, .. }, Token::Carry { magnitude: b, .. }) => {
                Some(a.cmp(b))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::AlphabetTables;

    fn formal() -> &'static Script {
        &AlphabetTables::builtin().formal
    }

    #[test]
    fn test_classify_digit_and_carry() {
        assert_eq!(
            Token::classify("叁", formal()).unwrap(),
            Token::Digit { symbol: '叁', value: 3 }
        );
        assert_eq!(
            Token::classify("万", formal()).unwrap(),
            Token::Carry { symbol: '万', magnitude: 10_000 }
        );
        assert!(Token::classify("零", formal()).unwrap().is_digit());
    }

    #[test]
    fn test_classify_rejects_invalid_input() {
        assert!(matches!(
            Token::classify("", formal()),
            Err(RmbError::InvalidToken(_))
        ));
        assert!(Token::classify("壹贰", formal()).is_err());
        assert!(Token::classify("元", formal()).is_err());
        assert!(Token::classify("三", formal()).is_err());
    }

    #[test]
    fn test_carry_ordering() {
        let bai = Token::from_char('佰', formal()).unwrap();
        let qian = Token::from_char('仟', formal()).unwrap();
        let yi = Token::from_char('亿', formal()).unwrap();

        assert_eq!(bai.compare_magnitude(&qian), Some(Ordering::Less));
        assert_eq!(yi.compare_magnitude(&qian), Some(Ordering::Greater));
        assert_eq!(bai.compare_magnitude(&bai), Some(Ordering::Equal));
    }

    #[test]
    fn test_digit_comparison_is_undefined() {
        let wu = Token::from_char('伍', formal()).unwrap();
        let bai = Token::from_char('佰', formal()).unwrap();

        assert_eq!(wu.compare_magnitude(&bai), None);
        assert_eq!(bai.compare_magnitude(&wu), None);
        assert_eq!(wu.compare_magnitude(&wu), None);
    }

    #[test]
    fn test_equality_is_symbol_identity() {
        let a = Token::from_char('伍', formal()).unwrap();
        let b = Token::from_char('伍', formal()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "伍");
    }
}
