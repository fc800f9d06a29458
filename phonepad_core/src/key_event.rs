/// 键盘事件（由原始输入的单个字符转换而来）。
///
/// 说明：
/// - processor 链只关心语义事件，不关心原始字符
/// - 不认识的字符变成 `Ignored`，不影响任何状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// 按下一个数字键（`0`-`9`）
    Digit(char),
    /// 停顿（空格），用来分隔同一个键的两次输入
    Pause,
    /// 退格（`*`）
    Backspace,
    /// 发送（`#`），之后的输入全部忽略
    Send,
    Ignored(char),
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        match ch {
            '0'..='9' => KeyEvent::Digit(ch),
            ' ' => KeyEvent::Pause,
            '*' => KeyEvent::Backspace,
            '#' => KeyEvent::Send,
            other => KeyEvent::Ignored(other),
        }
    }
}

/// processor 链的输出动作。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 提交解码结果
    Commit(String),
}
