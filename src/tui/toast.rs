//! 短暂显示的提示

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::kernel::services::ports::Notice;

pub const TOAST_TTL: Duration = Duration::from_secs(3);
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.items.push_back(Toast {
            notice,
            expires_at: now + TOAST_TTL,
        });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
    }

    /// 丢掉过期的提示，返回是否有变化
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at > now);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/toast.rs"]
mod tests;
