//! 构造期错误：解码本身永不失败，只有“组装”阶段可能出错。
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 键位不是 `0`-`9`
    #[error("invalid keypad digit: {0:?}")]
    InvalidDigit(char),

    /// 某个数字键没有任何字符
    #[error("digit {0:?} has an empty character set")]
    EmptyCharacterSet(char),

    /// 交给 `Decoder` 的键位表为空
    #[error("keymap has no mapped digits")]
    EmptyKeymap,
}

pub type Result<T> = std::result::Result<T, Error>;
