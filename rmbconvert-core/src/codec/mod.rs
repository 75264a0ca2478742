//! 编解码模块
//!
//! 大写金额 ↔ 数字金额，大写 ↔ 小写

pub mod token;
pub mod decoder;
pub mod encoder;
pub mod normalizer;

use std::sync::LazyLock;

// 导出核心类型
pub use token::Token;
pub use decoder::{Decoder, PlaceValueGroup};
pub use encoder::Encoder;
pub use normalizer::Normalizer;

use crate::amount::RmbAmount;
use crate::error::{RmbError, RmbResult};
use crate::tables::AlphabetTables;

static BUILTIN_CONVERTER: LazyLock<RmbConverter<'static>> =
    LazyLock::new(|| RmbConverter::new(AlphabetTables::builtin()));

/// 绑定到一套字符表的转换器
pub struct RmbConverter<'t> {
    tables: &'t AlphabetTables,
    decoder: Decoder<'t>,
    encoder: Encoder<'t>,
    normalizer: Normalizer,
}

impl<'t> RmbConverter<'t> {
    pub fn new(tables: &'t AlphabetTables) -> Self {
        Self {
            tables,
            decoder: Decoder::new(tables),
            encoder: Encoder::new(tables),
            normalizer: Normalizer::new(tables),
        }
    }

    /// 使用内置字符表的共享转换器
    pub fn builtin() -> &'static RmbConverter<'static> {
        &BUILTIN_CONVERTER
    }

    /// 整数金额是否追加 "整"
    pub fn with_whole_marker(mut self, enabled: bool) -> Self {
        self.encoder = self.encoder.with_whole_marker(enabled);
        self
    }

    pub fn tables(&self) -> &'t AlphabetTables {
        self.tables
    }

    /// 大写金额 → 数字金额
    pub fn decode_to_number(&self, formal: &str) -> RmbResult<RmbAmount> {
        self.decoder.decode(formal)
    }

    /// 小写金额 → 数字金额（先转成大写再解码）
    pub fn decode_simplified_to_number(&self, simplified: &str) -> RmbResult<RmbAmount> {
        let formal = self.normalizer.to_formal(simplified);
        tracing::debug!("小写转大写: {} → {}", simplified, formal);
        self.decoder.decode(&formal)
    }

    /// 大写金额 → 小写金额
    pub fn decode_to_normal(&self, formal: &str) -> String {
        self.normalizer.to_simplified(formal)
    }

    /// 小写金额 → 大写金额
    pub fn normal_to_formal(&self, simplified: &str) -> String {
        self.normalizer.to_formal(simplified)
    }

    /// 数字金额 → 大写金额
    pub fn encode_from_number<A>(&self, amount: A) -> RmbResult<String>
    where
        A: TryInto<RmbAmount>,
        RmbError: From<A::Error>,
    {
        self.encoder.encode(amount.try_into()?)
    }

    /// 数字金额 → 小写金额
    pub fn encode_from_number_to_normal<A>(&self, amount: A) -> RmbResult<String>
    where
        A: TryInto<RmbAmount>,
        RmbError: From<A::Error>,
    {
        let formal = self.encode_from_number(amount)?;
        Ok(self.normalizer.to_simplified(&formal))
    }

    /// 文本是否全部由大写数字、进位和元角分整组成
    pub fn is_formal_amount(&self, text: &str) -> bool {
        self.decoder.is_formal_amount(text)
    }
}
