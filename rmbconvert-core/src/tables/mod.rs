//! 字符表模块
//!
//! 大写（防伪）与小写两套数字/进位字符表，元角分整标记，
//! 以及由进位表推导出的 "位数 → 单位" 阈值表。
//!
//! 内置字符表为进程级只读常量；也可以从 TOML 文件加载替换表。

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{RmbError, RmbResult};

static BUILTIN: LazyLock<AlphabetTables> = LazyLock::new(AlphabetTables::chinese_yuan);

/// 进位字符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryEntry {
    /// 字符（例如 '佰'）
    pub symbol: char,
    /// 数量级（例如 100）
    pub magnitude: u64,
}

impl CarryEntry {
    pub const fn new(symbol: char, magnitude: u64) -> Self {
        Self { symbol, magnitude }
    }

    /// 该进位在数字串中对应的位数（拾 → 2，万 → 5）
    pub fn place_length(&self) -> usize {
        let mut length = 1;
        let mut m = self.magnitude;
        while m >= 10 {
            m /= 10;
            length += 1;
        }
        length
    }
}

/// 一套数字写法（大写或小写）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// 0-9 对应的字符，下标即数值
    pub digits: [char; 10],
    /// 进位字符，按数量级升序
    pub carries: Vec<CarryEntry>,
}

impl Script {
    /// 数字字符的值
    pub fn digit_value(&self, ch: char) -> Option<u8> {
        self.digits
            .iter()
            .position(|&d| d == ch)
            .and_then(|pos| u8::try_from(pos).ok())
    }

    /// 进位字符的数量级
    pub fn carry_magnitude(&self, ch: char) -> Option<u64> {
        self.carries
            .iter()
            .find(|c| c.symbol == ch)
            .map(|c| c.magnitude)
    }

    /// 数值对应的数字字符，`value` 必须是 0-9
    pub fn digit_symbol(&self, value: u8) -> char {
        self.digits[usize::from(value % 10)]
    }

    /// 零（占位符）
    pub fn zero(&self) -> char {
        self.digits[0]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.digit_value(ch).is_some() || self.carry_magnitude(ch).is_some()
    }

    /// 按语义数值升序排列的全部字符：先 0-9，再各进位
    pub fn ordered_symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.digits
            .iter()
            .copied()
            .chain(self.carries.iter().map(|c| c.symbol))
    }

    fn validate(&mut self, name: &str) -> RmbResult<()> {
        let mut seen = HashSet::new();
        for ch in self.ordered_symbols() {
            if !seen.insert(ch) {
                return Err(RmbError::InvalidTables(format!(
                    "{name}: duplicate symbol {ch:?}"
                )));
            }
        }

        for carry in &self.carries {
            if !is_power_of_ten(carry.magnitude) {
                return Err(RmbError::InvalidTables(format!(
                    "{name}: carry {:?} has magnitude {} which is not a power of ten above 1",
                    carry.symbol, carry.magnitude
                )));
            }
        }

        self.carries.sort_by_key(|c| c.magnitude);
        if self.carries.windows(2).any(|w| w[0].magnitude == w[1].magnitude) {
            return Err(RmbError::InvalidTables(format!(
                "{name}: repeated carry magnitude"
            )));
        }

        Ok(())
    }
}

/// 元、角、分、整
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub yuan: char,
    pub jiao: char,
    pub fen: char,
    pub whole: char,
}

impl Markers {
    fn symbols(&self) -> [char; 4] {
        [self.yuan, self.jiao, self.fen, self.whole]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.symbols().contains(&ch)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            yuan: '元',
            jiao: '角',
            fen: '分',
            whole: '整',
        }
    }
}

/// 位数阈值表
///
/// 位数 1 对应元，其余位数对应 `place_length` 相同的进位字符。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthTable {
    /// (位数, 单位字符)，按位数升序
    entries: Vec<(usize, char)>,
}

impl LengthTable {
    /// 不超过 `length` 的最大阈值及其单位字符
    pub fn unit_for(&self, length: usize) -> (usize, char) {
        self.entries
            .iter()
            .rev()
            .find(|(threshold, _)| *threshold <= length)
            .copied()
            .unwrap_or(self.entries[0])
    }

    pub fn entries(&self) -> &[(usize, char)] {
        &self.entries
    }
}

/// 完整字符表配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetTables {
    /// 大写（DIGIT_UPPER / UNIT_UPPER）
    pub formal: Script,
    /// 小写（DIGIT_NORMAL / UNIT_NORMAL）
    pub simplified: Script,
    #[serde(default)]
    pub markers: Markers,
}

impl AlphabetTables {
    /// 进程内共享的内置字符表
    pub fn builtin() -> &'static AlphabetTables {
        &BUILTIN
    }

    /// 标准人民币大写/小写字符表
    pub fn chinese_yuan() -> Self {
        Self {
            formal: Script {
                digits: ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'],
                carries: vec![
                    CarryEntry::new('拾', 10),
                    CarryEntry::new('佰', 100),
                    CarryEntry::new('仟', 1_000),
                    CarryEntry::new('万', 10_000),
                    CarryEntry::new('亿', 100_000_000),
                ],
            },
            simplified: Script {
                digits: ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
                carries: vec![
                    CarryEntry::new('十', 10),
                    CarryEntry::new('百', 100),
                    CarryEntry::new('千', 1_000),
                    CarryEntry::new('万', 10_000),
                    CarryEntry::new('亿', 100_000_000),
                ],
            },
            markers: Markers::default(),
        }
    }

    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(content: &str) -> RmbResult<Self> {
        let tables: Self = toml::from_str(content)
            .map_err(|e| RmbError::InvalidTables(e.to_string()))?;
        tables.validated()
    }

    /// 从 TOML 文件加载
    pub fn load(path: &Path) -> RmbResult<Self> {
        if !path.exists() {
            return Err(RmbError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let tables: Self = toml::from_str(&content).map_err(|e| RmbError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let tables = tables.validated()?;
        tracing::info!("加载字符表: {:?}", path);
        Ok(tables)
    }

    pub fn to_toml_string(&self) -> RmbResult<String> {
        toml::to_string_pretty(self).map_err(|e| RmbError::InvalidTables(e.to_string()))
    }

    /// 校验字符表，并把进位按数量级排序
    pub fn validated(mut self) -> RmbResult<Self> {
        self.formal.validate("formal")?;
        self.simplified.validate("simplified")?;

        let formal: Vec<u64> = self.formal.carries.iter().map(|c| c.magnitude).collect();
        let simplified: Vec<u64> = self.simplified.carries.iter().map(|c| c.magnitude).collect();
        if formal != simplified {
            return Err(RmbError::InvalidTables(format!(
                "carry magnitudes differ: formal {formal:?}, simplified {simplified:?}"
            )));
        }

        Self::validate_ladder(&formal)?;

        let markers = self.markers.symbols();
        let distinct: HashSet<char> = markers.iter().copied().collect();
        if distinct.len() != markers.len() {
            return Err(RmbError::InvalidTables("markers must be distinct".to_string()));
        }
        if let Some(ch) = markers
            .iter()
            .find(|&&m| self.formal.contains(m) || self.simplified.contains(m))
        {
            return Err(RmbError::InvalidTables(format!(
                "marker {ch:?} collides with a numeral symbol"
            )));
        }

        Ok(self)
    }

    /// 进位阶梯校验（`magnitudes` 已升序）
    ///
    /// 最大进位之下必须是 10、100、1000… 连续的阶梯，
    /// 最大进位不超过阶梯顶端的平方（亿 = 万 × 万）。
    /// 只有一个进位时它必须是 10。
    fn validate_ladder(magnitudes: &[u64]) -> RmbResult<()> {
        let exponents: Vec<u32> = magnitudes.iter().map(|m| m.ilog10()).collect();
        let Some((&largest, ladder)) = exponents.split_last() else {
            return Err(RmbError::InvalidTables(
                "a carry of magnitude 10 is required".to_string(),
            ));
        };

        if let Some(index) = ladder
            .iter()
            .zip(1u32..)
            .position(|(&exponent, expected)| exponent != expected)
        {
            return Err(RmbError::InvalidTables(format!(
                "carry ladder has a gap before magnitude {}",
                magnitudes[index]
            )));
        }

        match ladder.last() {
            None if largest != 1 => Err(RmbError::InvalidTables(
                "a carry of magnitude 10 is required".to_string(),
            )),
            Some(&top) if largest > top * 2 => Err(RmbError::InvalidTables(format!(
                "largest carry {} exceeds the square of {}",
                magnitudes[ladder.len()],
                magnitudes[ladder.len() - 1]
            ))),
            _ => Ok(()),
        }
    }

    /// LENGTH 表：1 → 元，2 → 拾，3 → 佰，4 → 仟，5 → 万，9 → 亿
    pub fn length_units(&self) -> LengthTable {
        let mut entries = vec![(1, self.markers.yuan)];
        entries.extend(
            self.formal
                .carries
                .iter()
                .map(|c| (c.place_length(), c.symbol)),
        );
        entries.sort_by_key(|(length, _)| *length);
        LengthTable { entries }
    }

    /// 编码器能表达的元的上限（不含）
    ///
    /// 最大单位之前的部分最多只能带一个次大单位，
    /// 内置表即 亿 × 万 × 10 = 10^13。
    pub fn max_encodable_yuan(&self) -> u64 {
        let mut magnitudes = self.formal.carries.iter().rev().map(|c| c.magnitude);
        let largest = magnitudes.next().unwrap_or(1);
        let second = magnitudes.next().unwrap_or(1);
        largest
            .checked_mul(second)
            .and_then(|m| m.checked_mul(10))
            .unwrap_or(u64::MAX)
    }
}

impl Default for AlphabetTables {
    fn default() -> Self {
        Self::chinese_yuan()
    }
}

fn is_power_of_ten(mut value: u64) -> bool {
    if value < 10 {
        return false;
    }
    while value % 10 == 0 {
        value /= 10;
    }
    value == 1
}
