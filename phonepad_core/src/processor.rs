//! `processor`：按键事件处理链。
//!
//! 每个 Processor 按顺序处理 `KeyEvent`，修改 `Context`，必要时产生 `Action`。
//!
//! 默认链路（`Decoder::new` 组装）：
//! - `RunProcessor`：数字键，累计/结算按键序列
//! - `PauseProcessor`：空格，结算并回到 Idle
//! - `BackspaceProcessor`：`*`，先结算再删最后一个字符
//! - `SendProcessor`：`#`，结算并 Commit
//!
//! 不被任何 processor 消费的事件（`Ignored`）直接丢弃。

use crate::{
    context::Context,
    key_event::{Action, KeyEvent},
    keymap::KeyMap,
};

/// Processor 执行结果：是否“消费”了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

pub trait Processor: Send + Sync {
    fn process(
        &mut self,
        keymap: &KeyMap,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

/// 数字键。
pub struct RunProcessor;

impl Processor for RunProcessor {
    fn process(
        &mut self,
        keymap: &KeyMap,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *key_event {
            KeyEvent::Digit(digit) => {
                context.press(keymap, digit);
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

/// 停顿；连续多个停顿等价于一个。
pub struct PauseProcessor;

impl Processor for PauseProcessor {
    fn process(
        &mut self,
        keymap: &KeyMap,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *key_event {
            KeyEvent::Pause => {
                context.flush(keymap);
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct BackspaceProcessor;

impl Processor for BackspaceProcessor {
    fn process(
        &mut self,
        keymap: &KeyMap,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *key_event {
            KeyEvent::Backspace => {
                context.backspace(keymap);
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct SendProcessor;

impl Processor for SendProcessor {
    fn process(
        &mut self,
        keymap: &KeyMap,
        context: &mut Context,
        key_event: &KeyEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *key_event {
            KeyEvent::Send => (
                ProcessStatus::Consume,
                vec![Action::Commit(context.commit(keymap))],
            ),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

/// 默认 processor 链。
pub fn default_chain() -> Vec<Box<dyn Processor>> {
    vec![
        Box::new(RunProcessor),
        Box::new(PauseProcessor),
        Box::new(BackspaceProcessor),
        Box::new(SendProcessor),
    ]
}
