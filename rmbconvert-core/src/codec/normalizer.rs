//! 大写 ↔ 小写转换
//!
//! 按数值顺序把大写字符表与小写字符表一一对应，逐字符替换。
//! 不在表中的字符（元、角、分、整等）原样保留。

use std::collections::HashMap;

use crate::tables::AlphabetTables;

/// 大写/小写字符替换表
#[derive(Debug, Clone)]
pub struct Normalizer {
    to_simplified: HashMap<char, char>,
    to_formal: HashMap<char, char>,
}

impl Normalizer {
    pub fn new(tables: &AlphabetTables) -> Self {
        let pairs: Vec<(char, char)> = tables
            .formal
            .ordered_symbols()
            .zip(tables.simplified.ordered_symbols())
            .collect();

        Self {
            to_simplified: pairs.iter().copied().collect(),
            to_formal: pairs.iter().map(|&(formal, simple)| (simple, formal)).collect(),
        }
    }

    /// 大写 → 小写
    ///
    /// ```
    /// # use rmbconvert_core::codec::Normalizer;
    /// # use rmbconvert_core::tables::AlphabetTables;
    /// let normalizer = Normalizer::new(AlphabetTables::builtin());
    /// assert_eq!(normalizer.to_simplified("壹佰零伍元整"), "一百零五元整");
    /// ```
    pub fn to_simplified(&self, text: &str) -> String {
        Self::translate(&self.to_simplified, text)
    }

    /// 小写 → 大写
    pub fn to_formal(&self, text: &str) -> String {
        Self::translate(&self.to_formal, text)
    }

    fn translate(table: &HashMap<char, char>, text: &str) -> String {
        text.chars()
            .map(|ch| table.get(&ch).copied().unwrap_or(ch))
            .collect()
    }
}
