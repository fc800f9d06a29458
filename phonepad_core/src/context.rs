//! `Context`：processor 链共享的解码状态。
//!
//! 约定：
//! - `run`：当前未结算的按键序列（`Idle` 表示没有）
//! - `buffer`：已结算的字符；退格只删最后一个
//! - 结算（flush）= 用 `KeyMap` 解析 run 并追加到 buffer，随后回到 `Idle`
use tracing::trace;

use crate::keymap::KeyMap;

/// 按键序列状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    /// 正在同一个数字键上连按
    Accumulating { digit: char, presses: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    pub run: RunState,
    pub buffer: Vec<char>,
}

impl Context {
    /// 清空状态（等价于重新开始一次解码）。
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 数字键：同键则计数，否则先结算旧序列再开新序列。
    pub fn press(&mut self, keymap: &KeyMap, digit: char) {
        if let RunState::Accumulating { digit: current, presses } = &mut self.run {
            if *current == digit {
                *presses += 1;
                return;
            }
        }
        self.flush(keymap);
        self.run = RunState::Accumulating { digit, presses: 1 };
    }

    /// 结算当前序列；解析不到字符时静默丢弃。
    pub fn flush(&mut self, keymap: &KeyMap) {
        if let RunState::Accumulating { digit, presses } = std::mem::take(&mut self.run) {
            match keymap.resolve(digit, presses) {
                Some(ch) => {
                    trace!(%digit, presses, %ch, "run resolved");
                    self.buffer.push(ch);
                }
                None => trace!(%digit, presses, "run dropped"),
            }
        }
    }

    /// 退格：先结算当前序列，再删掉最后一个字符（buffer 为空时什么也不做）。
    pub fn backspace(&mut self, keymap: &KeyMap) {
        self.flush(keymap);
        self.buffer.pop();
    }

    /// 发送：结算并取走结果，状态回到初始。
    pub fn commit(&mut self, keymap: &KeyMap) -> String {
        self.flush(keymap);
        let text = self.buffer.iter().collect();
        self.reset();
        text
    }
}
