//! `KeyMap`：数字键 -> 有序字符集。
//!
//! 约定：
//! - 按键次数从 1 开始；第 n 次按键对应下标 `(n - 1) % len`（循环解析）
//! - 字符进表时统一转大写（仅当大写形式是单个字符时）
//! - 地区变体只追加，不去重
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::region::Region;

/// 标准 T9 键位。
const DEFAULT_LAYOUT: [(char, &str); 10] = [
    ('0', " "),
    ('1', "&'("),
    ('2', "ABC"),
    ('3', "DEF"),
    ('4', "GHI"),
    ('5', "JKL"),
    ('6', "MNO"),
    ('7', "PQRS"),
    ('8', "TUV"),
    ('9', "WXYZ"),
];

/// 键位表（解码器通过构造参数持有，不存在全局表）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    keys: BTreeMap<char, Vec<char>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let keys = DEFAULT_LAYOUT
            .iter()
            .map(|&(digit, chars)| (digit, chars.chars().map(normalize).collect()))
            .collect();
        Self { keys }
    }
}

impl KeyMap {
    /// 用自定义条目建表；键必须是 `0`-`9`，字符集不能为空。
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let mut keys = BTreeMap::new();
        for (digit, chars) in entries {
            if !digit.is_ascii_digit() {
                return Err(Error::InvalidDigit(digit));
            }
            let set: Vec<char> = chars.chars().map(normalize).collect();
            if set.is_empty() {
                return Err(Error::EmptyCharacterSet(digit));
            }
            keys.insert(digit, set);
        }
        Ok(Self { keys })
    }

    /// 替换单个键的字符集（配置覆盖用）。
    pub fn set(&mut self, digit: char, chars: &str) -> Result<()> {
        if !digit.is_ascii_digit() {
            return Err(Error::InvalidDigit(digit));
        }
        let set: Vec<char> = chars.chars().map(normalize).collect();
        if set.is_empty() {
            return Err(Error::EmptyCharacterSet(digit));
        }
        self.keys.insert(digit, set);
        Ok(())
    }

    /// 解析一次按键序列：未映射的键或 0 次按键返回 None，其余循环取字符。
    pub fn resolve(&self, digit: char, press_count: usize) -> Option<char> {
        let set = self.keys.get(&digit)?;
        if press_count == 0 || set.is_empty() {
            return None;
        }
        set.get((press_count - 1) % set.len()).copied()
    }

    pub fn is_valid_digit(&self, digit: char) -> bool {
        self.keys.contains_key(&digit)
    }

    /// 字符集大小；未映射的键为 0。
    pub fn character_set_size(&self, digit: char) -> usize {
        self.keys.get(&digit).map_or(0, Vec::len)
    }

    pub fn available_characters(&self, digit: char) -> Option<&[char]> {
        self.keys.get(&digit).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// 在某个键的字符集末尾追加字符；未映射的键会被新建，但不能建成空集。
    pub fn append(&mut self, digit: char, chars: &str) -> Result<()> {
        if !digit.is_ascii_digit() {
            return Err(Error::InvalidDigit(digit));
        }
        if chars.is_empty() && !self.keys.contains_key(&digit) {
            return Err(Error::EmptyCharacterSet(digit));
        }
        self.keys
            .entry(digit)
            .or_default()
            .extend(chars.chars().map(normalize));
        Ok(())
    }

    /// 按地区标签追加字符（整张表生效，持续到表被丢弃）；未知标签不做任何事。
    pub fn mutate(&mut self, region_tag: &str) {
        let Some(region) = Region::from_tag(region_tag) else {
            debug!(region_tag, "unknown region tag, keymap unchanged");
            return;
        };
        let (digit, extra) = region.shift();
        debug!(?region, %digit, extra, "applying regional shift");
        if let Err(e) = self.append(digit, extra) {
            warn!(?region, error = %e, "regional shift rejected");
        }
    }
}

fn normalize(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    if upper.len() == 1 {
        upper.next().unwrap_or(ch)
    } else {
        ch
    }
}
