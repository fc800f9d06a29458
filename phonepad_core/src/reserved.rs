//! 保留输入：整串精确匹配，命中时跳过状态机。
use std::collections::BTreeMap;

/// 默认的“哲学语录”。
const DEFAULT_LITERALS: [(&str, &str); 3] = [
    ("777#", "Camus: the absurd persists in endless cycles"),
    ("666#", "Dostoevsky: freedom's burden shapes your path"),
    ("999#", "Nietzsche: will to power fuels your growth"),
];

pub const DEFAULT_PREDICT_TRIGGER: &str = "AI#";

/// 保留表：语录 + 预测触发串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedTable {
    literals: BTreeMap<String, String>,
    predict_trigger: String,
}

impl Default for ReservedTable {
    fn default() -> Self {
        Self {
            literals: DEFAULT_LITERALS
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            predict_trigger: DEFAULT_PREDICT_TRIGGER.to_string(),
        }
    }
}

impl ReservedTable {
    /// 不含任何语录的表（预测触发串仍是默认值）。
    pub fn empty() -> Self {
        Self {
            literals: BTreeMap::new(),
            predict_trigger: DEFAULT_PREDICT_TRIGGER.to_string(),
        }
    }

    pub fn with_literal(mut self, input: impl Into<String>, response: impl Into<String>) -> Self {
        self.insert(input, response);
        self
    }

    pub fn with_predict_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.predict_trigger = trigger.into();
        self
    }

    pub fn insert(&mut self, input: impl Into<String>, response: impl Into<String>) {
        self.literals.insert(input.into(), response.into());
    }

    pub fn literal(&self, input: &str) -> Option<&str> {
        self.literals.get(input).map(String::as_str)
    }

    pub fn is_predict_trigger(&self, input: &str) -> bool {
        !self.predict_trigger.is_empty() && input == self.predict_trigger
    }

    pub fn predict_trigger(&self) -> &str {
        &self.predict_trigger
    }

    pub fn literals(&self) -> impl Iterator<Item = (&str, &str)> {
        self.literals.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// 预测回复：有历史时引用最近一次，否则给默认话术。
pub fn predict_message(last: Option<&str>) -> String {
    match last {
        Some(last) => format!("Kage predicts: the last input decoded was {last}"),
        None => "Kage predicts: move".to_string(),
    }
}
