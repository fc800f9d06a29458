//! `Decoder`：对上层提供的解码入口。
//!
//! `Decoder` 自身不做逐键判断，而是：
//! - 持有 `KeyMap`（构造时注入）、保留表和历史
//! - 先查保留输入（预测触发串，再是语录），命中则直接返回
//! - 否则把每个字符转成 `KeyEvent`，依次交给 processors，直到某个 processor 消费
//! - 收到 `Action::Commit` 即停止；没有 `#` 的输入视为无效消息，返回空串
use tracing::debug;

use crate::{
    context::Context,
    error::{Error, Result},
    history::History,
    key_event::{Action, KeyEvent},
    keymap::KeyMap,
    processor::{ProcessStatus, Processor, default_chain},
    reserved::{ReservedTable, predict_message},
};

pub struct Decoder {
    keymap: KeyMap,
    reserved: ReservedTable,
    history: History,
    ctx: Context,
    processors: Vec<Box<dyn Processor>>,
}

impl Decoder {
    /// 创建解码器并组装默认 processors 链；空键位表直接报错。
    pub fn new(keymap: KeyMap) -> Result<Self> {
        if keymap.is_empty() {
            return Err(Error::EmptyKeymap);
        }
        Ok(Self {
            keymap,
            reserved: ReservedTable::default(),
            history: History::default(),
            ctx: Context::default(),
            processors: default_chain(),
        })
    }

    pub fn with_reserved(mut self, reserved: ReservedTable) -> Self {
        self.reserved = reserved;
        self
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// 解码一串原始输入；永不失败。
    pub fn decode(&mut self, raw_input: &str) -> String {
        if raw_input.is_empty() {
            return String::new();
        }

        // 预测触发串优先于语录，即使语录表里有同名条目
        if self.reserved.is_predict_trigger(raw_input) {
            debug!(
                trigger = self.reserved.predict_trigger(),
                history = self.history.len(),
                "predict trigger"
            );
            return predict_message(self.history.last());
        }

        if let Some(response) = self.reserved.literal(raw_input) {
            debug!(raw_input, "reserved literal");
            let response = response.to_string();
            self.history.push(raw_input);
            return response;
        }

        match self.run(raw_input) {
            Some(text) => {
                debug!(raw_input, decoded = %text, "decoded");
                self.history.push(text.as_str());
                text
            }
            None => {
                debug!(raw_input, "no terminator, message discarded");
                String::new()
            }
        }
    }

    fn run(&mut self, raw_input: &str) -> Option<String> {
        self.ctx.reset();
        for ev in raw_input.chars().map(KeyEvent::from) {
            for p in &mut self.processors {
                let (status, actions) = p.process(&self.keymap, &mut self.ctx, &ev);
                if let Some(Action::Commit(text)) = actions.into_iter().next() {
                    return Some(text);
                }
                if status == ProcessStatus::Consume {
                    break;
                }
            }
        }
        self.ctx.reset();
        None
    }
}

/// 用默认键位和默认保留表解码一次。
pub fn decode(raw_input: &str) -> String {
    match Decoder::new(KeyMap::default()) {
        Ok(mut decoder) => decoder.decode(raw_input),
        Err(_) => String::new(),
    }
}
