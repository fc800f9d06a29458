//! `phonepad_core`：纯逻辑层，不做任何 I/O。
//!
//! 把老式手机键盘的按键串（数字、空格停顿、`*` 退格、`#` 发送）解码为文本。
//!
//! 设计要点：
//! - **键位表注入**：`KeyMap` 由调用方构造后交给 `Decoder`，可同时存在多个地区变体
//! - **分层清晰**：decoder -> 保留输入 -> key_event -> processor 链 -> context
//! - **解析策略**：按键次数超出字符集时循环取字符；`*` 先结算当前序列再删除；没有 `#` 的输入返回空串
pub mod context;
pub mod decoder;
pub mod error;
pub mod history;
pub mod key_event;
pub mod keymap;
pub mod processor;
pub mod region;
pub mod reserved;

pub use decoder::{Decoder, decode};
pub use error::{Error, Result};
pub use keymap::KeyMap;
pub use region::Region;
pub use reserved::ReservedTable;
