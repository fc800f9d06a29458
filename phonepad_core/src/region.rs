//! 地区变体：给某个数字键追加本地字符。
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// 天城文长元音
    India,
    /// 荷兰语 IJ
    Holland,
    Thailand,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::India, Region::Holland, Region::Thailand];

    /// 标签匹配忽略 ASCII 大小写。
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.tag().eq_ignore_ascii_case(tag.trim()))
    }

    pub fn tag(self) -> &'static str {
        match self {
            Region::India => "India",
            Region::Holland => "Holland",
            Region::Thailand => "Thailand",
        }
    }

    /// (数字键, 追加的字符)
    pub fn shift(self) -> (char, &'static str) {
        match self {
            Region::India => ('2', "आ"),
            Region::Holland => ('6', "IJ"),
            Region::Thailand => ('8', "ท"),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 给配置/命令行用的 `FromStr`；`KeyMap::mutate` 走 `from_tag`，未知标签直接忽略。
impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown region {0:?} (expected one of India, Holland, Thailand)")]
pub struct UnknownRegion(pub String);
