//! 大写金额编码
//!
//! 数字金额 → 大写金额，例如 10101010.67 → "壹仟零壹拾万壹仟零壹拾元陆角柒分"
//!
//! 按 LENGTH 阈值表递归拆分整数的十进制位：取不超过剩余位数的最大阈值，
//! 高位部分递归编码后接单位字符，低位部分去掉前导零（补一个 "零"）后继续递归。

use crate::amount::RmbAmount;
use crate::error::{RmbError, RmbResult};
use crate::tables::{AlphabetTables, LengthTable};

/// 大写金额编码器
pub struct Encoder<'t> {
    tables: &'t AlphabetTables,
    lengths: LengthTable,
    whole_marker: bool,
}

impl<'t> Encoder<'t> {
    pub fn new(tables: &'t AlphabetTables) -> Self {
        Self {
            tables,
            lengths: tables.length_units(),
            whole_marker: true,
        }
    }

    /// 整数金额是否追加 "整"（默认追加）
    pub fn with_whole_marker(mut self, enabled: bool) -> Self {
        self.whole_marker = enabled;
        self
    }

    /// 编码数字金额
    ///
    /// ```
    /// # use rmbconvert_core::amount::RmbAmount;
    /// # use rmbconvert_core::codec::Encoder;
    /// # use rmbconvert_core::tables::AlphabetTables;
    /// let encoder = Encoder::new(AlphabetTables::builtin());
    /// let text = encoder.encode(RmbAmount::from_cents(539_002_135)).unwrap();
    /// assert_eq!(text, "伍佰叁拾玖万零贰拾壹元叁角伍分");
    /// ```
    pub fn encode(&self, amount: RmbAmount) -> RmbResult<String> {
        let limit = self.tables.max_encodable_yuan();
        if amount.yuan() >= limit {
            return Err(RmbError::UnsupportedAmount {
                amount: amount.to_string(),
                reason: format!("yuan must be below {limit}"),
            });
        }

        let mut out = String::new();
        if amount.yuan() == 0 {
            out.push(self.tables.formal.zero());
        } else {
            let digits: Vec<u8> = amount
                .yuan()
                .to_string()
                .bytes()
                .map(|b| b - b'0')
                .collect();
            self.render(&digits, &mut out);
        }
        out.push(self.tables.markers.yuan);
        self.push_fraction(amount, &mut out);

        tracing::debug!("编码: {} → {}", amount, out);
        Ok(out)
    }

    /// 递归编码一段没有前导零的十进制位
    fn render(&self, digits: &[u8], out: &mut String) {
        let formal = &self.tables.formal;
        let (length, unit) = self.lengths.unit_for(digits.len());
        let (head, tail) = digits.split_at(digits.len() + 1 - length);

        if let [digit] = head {
            out.push(formal.digit_symbol(*digit));
            if length > 1 && *digit != 0 {
                out.push(unit);
            }
        } else {
            self.render(head, out);
            out.push(unit);
        }

        // 低位全为零时到此为止
        let Some(first_non_zero) = tail.iter().position(|&d| d != 0) else {
            return;
        };
        if first_non_zero > 0 {
            out.push(formal.zero());
        }
        self.render(&tail[first_non_zero..], out);
    }

    fn push_fraction(&self, amount: RmbAmount, out: &mut String) {
        let formal = &self.tables.formal;
        let markers = self.tables.markers;

        if amount.is_whole() {
            if self.whole_marker {
                out.push(markers.whole);
            }
            return;
        }

        if amount.jiao() == 0 {
            out.push(formal.zero());
        } else {
            out.push(formal.digit_symbol(amount.jiao()));
            out.push(markers.jiao);
        }

        if amount.fen() != 0 {
            out.push(formal.digit_symbol(amount.fen()));
            out.push(markers.fen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(cents: u64) -> String {
        Encoder::new(AlphabetTables::builtin())
            .encode(RmbAmount::from_cents(cents))
            .unwrap()
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0), "零元整");
        assert_eq!(encode(35), "零元叁角伍分");
    }

    #[test]
    fn test_encode_small_numbers() {
        assert_eq!(encode(100), "壹元整");
        assert_eq!(encode(1000), "壹拾元整");
        assert_eq!(encode(1500), "壹拾伍元整");
        assert_eq!(encode(10_500), "壹佰零伍元整");
        assert_eq!(encode(100_000), "壹仟元整");
    }

    #[test]
    fn test_encode_reference_amounts() {
        assert_eq!(encode(539_002_135), "伍佰叁拾玖万零贰拾壹元叁角伍分");
        assert_eq!(encode(7_608_923_102), "柒仟陆佰零捌万玖仟贰佰叁拾壹元零贰分");
        assert_eq!(encode(32_599_100), "叁拾贰万伍仟玖佰玖拾壹元整");
        assert_eq!(encode(1_010_101_067), "壹仟零壹拾万壹仟零壹拾元陆角柒分");
        assert_eq!(encode(1_111_111_111), "壹仟壹佰壹拾壹万壹仟壹佰壹拾壹元壹角壹分");
    }

    #[test]
    fn test_encode_large_amounts() {
        assert_eq!(encode(325_080_139_000), "叁拾贰亿伍仟零捌拾万壹仟叁佰玖拾元整");
        assert_eq!(encode(10_005_000_000), "壹亿零伍万元整");
        assert_eq!(encode(100_000_000_000_000), "壹万亿元整");
        assert_eq!(encode(100_000_000_000), "壹拾亿元整");
    }

    #[test]
    fn test_encode_fraction_forms() {
        assert_eq!(encode(150), "壹元伍角");
        assert_eq!(encode(105), "壹元零伍分");
        assert_eq!(encode(199), "壹元玖角玖分");
    }

    #[test]
    fn test_encode_without_whole_marker() {
        let encoder = Encoder::new(AlphabetTables::builtin()).with_whole_marker(false);
        assert_eq!(encoder.encode(RmbAmount::from_cents(10_000)).unwrap(), "壹佰元");
        assert_eq!(encoder.encode(RmbAmount::from_cents(10_050)).unwrap(), "壹佰元伍角");
    }

    #[test]
    fn test_encode_out_of_range() {
        let encoder = Encoder::new(AlphabetTables::builtin());
        let too_large = RmbAmount::from_yuan(10_000_000_000_000).unwrap();
        assert!(matches!(
            encoder.encode(too_large),
            Err(RmbError::UnsupportedAmount { .. })
        ));

        let largest = RmbAmount::from_cents(999_999_999_999_999);
        assert_eq!(
            encoder.encode(largest).unwrap(),
            "玖万玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖元玖角玖分"
        );
    }
}
