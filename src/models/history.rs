//! 编辑历史（线性快照栈）
//!
//! 每次修改前记录修改前的完整快照：
//! - 容量有上限，超出后丢弃最旧的快照
//! - `index` 之前的快照可以 Undo，之后的可以 Redo
//! - Undo 之后再记录新快照会丢弃所有可 Redo 的快照

use std::collections::VecDeque;

/// 最多保留的可撤销步数
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    index: usize,
    limit: usize,
}

impl<T: Clone> History<T> {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            index: 0,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 记录修改前的状态
    pub fn record(&mut self, before: T) {
        self.entries.truncate(self.index);
        self.entries.push_back(before);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.index = self.entries.len();
    }

    /// Undo：传入当前状态，返回要恢复的状态
    pub fn undo(&mut self, current: &T) -> Option<T> {
        if self.index == 0 {
            return None;
        }

        // 栈顶的当前状态还没有快照，先保存下来供 Redo 使用
        if self.index == self.entries.len() {
            self.entries.push_back(current.clone());
        }

        self.index -= 1;
        self.entries.get(self.index).cloned()
    }

    pub fn redo(&mut self) -> Option<T> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }

        self.index += 1;
        self.entries.get(self.index).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// 可以 Undo 的步数
    pub fn undo_depth(&self) -> usize {
        self.index
    }

    pub fn redo_depth(&self) -> usize {
        self.entries.len().saturating_sub(self.index + 1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/history.rs"]
mod tests;
