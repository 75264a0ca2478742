//! 大写金额解码
//!
//! 将大写金额（例如 "伍佰叁拾玖万零贰拾壹元叁角伍分"）转换为数字金额
//!
//! 整数部分的处理方式：
//! ```text
//! 叁拾贰亿伍仟零捌拾万壹仟叁佰玖拾
//! → (叁 拾) (贰) (亿) (伍 仟) (捌 拾) (万) (壹 仟) (叁 佰) (玖 拾)
//! → [30, 2, 100000000, 5000, 80, 10000, 1000, 300, 90]
//! → (30 + 2) * 100000000 + (5000 + 80) * 10000 + 1000 + 300 + 90
//! → 3250801390
//! ```

use std::cmp::Ordering;

use crate::amount::RmbAmount;
use crate::codec::token::Token;
use crate::error::{RmbError, RmbResult};
use crate::tables::AlphabetTables;

/// 位值分组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceValueGroup {
    /// 单个数字或单个进位（例如独立的 "万"）
    Single(Token),
    /// 数字 + 进位（例如 "叁拾" = 30）
    Pair(Token, Token),
}

impl PlaceValueGroup {
    fn is_full(&self) -> bool {
        matches!(self, PlaceValueGroup::Pair(..))
    }

    fn first(&self) -> Token {
        match *self {
            PlaceValueGroup::Single(t) | PlaceValueGroup::Pair(t, _) => t,
        }
    }

    fn last(&self) -> Token {
        match *self {
            PlaceValueGroup::Single(t) | PlaceValueGroup::Pair(_, t) => t,
        }
    }

    fn push(self, token: Token) -> Self {
        match self {
            PlaceValueGroup::Single(first) => PlaceValueGroup::Pair(first, token),
            full @ PlaceValueGroup::Pair(..) => full,
        }
    }

    /// 单个 Token 取其值，两个 Token 取乘积
    pub fn value(&self) -> Option<u64> {
        match *self {
            PlaceValueGroup::Single(t) => Some(t.value()),
            PlaceValueGroup::Pair(a, b) => a.value().checked_mul(b.value()),
        }
    }
}

/// 大写金额解码器
pub struct Decoder<'t> {
    tables: &'t AlphabetTables,
}

impl<'t> Decoder<'t> {
    pub fn new(tables: &'t AlphabetTables) -> Self {
        Self { tables }
    }

    /// 解码大写金额
    ///
    /// 只校验单个字符是否属于字符表；结构不合法的串会得到一个确定但无意义的结果。
    ///
    /// ```
    /// # use rmbconvert_core::codec::Decoder;
    /// # use rmbconvert_core::tables::AlphabetTables;
    /// let decoder = Decoder::new(AlphabetTables::builtin());
    /// let amount = decoder.decode("叁拾贰万伍仟玖佰玖拾壹元整").unwrap();
    /// assert_eq!(amount.to_string(), "325991");
    /// ```
    pub fn decode(&self, text: &str) -> RmbResult<RmbAmount> {
        let (integer_part, fraction_part) = match text.split_once(self.tables.markers.yuan) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        let tokens = self.tokenize_integer(integer_part)?;
        let groups = Self::group(&tokens);
        let place_values = groups
            .iter()
            .map(|g| g.value())
            .collect::<Option<Vec<u64>>>()
            .ok_or_else(|| RmbError::Overflow(text.to_string()))?;
        tracing::debug!("位值分组: {:?}", place_values);

        let integer = Self::reduce(&place_values)
            .ok_or_else(|| RmbError::Overflow(text.to_string()))?;
        let fraction = match fraction_part {
            Some(fraction) => self.decode_fraction(fraction)?,
            None => 0,
        };

        integer
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(RmbAmount::from_cents)
            .ok_or_else(|| RmbError::Overflow(text.to_string()))
    }

    /// 检查文本是否为可解码的大写金额
    ///
    /// 元之前只能是大写数字和进位；角、分、整只能出现在元之后。
    pub fn is_formal_amount(&self, text: &str) -> bool {
        let formal = &self.tables.formal;
        let markers = self.tables.markers;

        let (integer_part, fraction_part) = match text.split_once(markers.yuan) {
            Some((integer, fraction)) => (integer, fraction),
            None => (text, ""),
        };
        if integer_part.is_empty() && fraction_part.is_empty() {
            return false;
        }

        integer_part.chars().all(|ch| formal.contains(ch))
            && fraction_part.chars().all(|ch| {
                formal.digit_value(ch).is_some()
                    || ch == markers.jiao
                    || ch == markers.fen
                    || ch == markers.whole
            })
    }

    /// 去掉占位的 "零"，其余字符逐个分类
    fn tokenize_integer(&self, text: &str) -> RmbResult<Vec<Token>> {
        let formal = &self.tables.formal;
        let zero = formal.zero();

        text.chars()
            .filter(|&ch| ch != zero)
            .map(|ch| Token::from_char(ch, formal))
            .collect()
    }

    /// 分组
    ///
    /// - 当前组已满（两个 Token）时新开一组
    /// - 进位：与 *上一组* 末尾的进位比较，上一组更大（或无可比较）则并入当前组，
    ///   上一组更小则单独成组（万、亿作为整体乘数）
    /// - 数字：当前组以进位开头时新开一组，否则并入当前组
    pub fn group(tokens: &[Token]) -> Vec<PlaceValueGroup> {
        let mut groups: Vec<PlaceValueGroup> = Vec::with_capacity(tokens.len());

        for &token in tokens {
            let current = match groups.last() {
                Some(current) if !current.is_full() => *current,
                _ => {
                    groups.push(PlaceValueGroup::Single(token));
                    continue;
                }
            };

            let join = if token.is_carry() {
                let previous = groups
                    .len()
                    .checked_sub(2)
                    .map(|index| groups[index].last());

                match previous.and_then(|p| p.compare_magnitude(&token)) {
                    None | Some(Ordering::Greater) => true,
                    Some(Ordering::Less) => false,
                    Some(Ordering::Equal) => {
                        // 连续相同单位（例如 "万...万"）不合规，单独成组
                        tracing::warn!("连续出现相同数量级的进位: {}", token);
                        false
                    }
                }
            } else {
                !current.first().is_carry()
            };

            if join {
                if let Some(last) = groups.last_mut() {
                    *last = current.push(token);
                }
            } else {
                groups.push(PlaceValueGroup::Single(token));
            }
        }

        groups
    }

    /// 以最大位值为锚点做乘法
    ///
    /// 从起点开始找剩余部分第一个最大值，它之前的位值之和乘以它；
    /// 之前没有位值时直接取它本身。然后从锚点之后继续，直到结束。
    pub fn reduce(place_values: &[u64]) -> Option<u64> {
        let mut total = 0u64;
        let mut start = 0;

        while start < place_values.len() {
            let rest = &place_values[start..];
            let anchor = *rest.iter().max()?;
            let offset = rest.iter().position(|&v| v == anchor)?;

            let prefix = rest[..offset]
                .iter()
                .try_fold(0u64, |acc, &v| acc.checked_add(v))?;
            let product = if prefix != 0 {
                prefix.checked_mul(anchor)?
            } else {
                anchor
            };

            total = total.checked_add(product)?;
            start += offset + 1;
        }

        Some(total)
    }

    /// 角分部分，返回 "分" 数
    fn decode_fraction(&self, text: &str) -> RmbResult<u64> {
        let markers = self.tables.markers;
        let mut cents = 0u64;
        let mut pending: Option<u64> = None;

        for ch in text.chars() {
            let unit = if let Some(value) = self.tables.formal.digit_value(ch) {
                pending = Some(u64::from(value));
                continue;
            } else if ch == markers.jiao {
                10
            } else if ch == markers.fen {
                1
            } else if ch == markers.whole {
                continue;
            } else {
                return Err(RmbError::InvalidToken(ch.to_string()));
            };

            // 单位前没有数字时不计数
            let digit = pending.take().unwrap_or(0);
            cents = cents
                .checked_add(digit * unit)
                .ok_or_else(|| RmbError::Overflow(text.to_string()))?;
        }

        Ok(cents)
    }
}
