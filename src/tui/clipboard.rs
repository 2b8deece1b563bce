//! 通过 OSC 52 转义序列写系统剪贴板（终端转发，ssh 下也可用）

use std::io::{self, Write};

use crate::error::{FormError, Result};

/// 终端通常只接受有限长度的 OSC 52 负载
pub const MAX_PAYLOAD_BYTES: usize = 100 * 1024;

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipboardTarget {
    /// tmux 需要 DCS passthrough 包一层
    pub tmux: bool,
}

impl ClipboardTarget {
    pub fn detect() -> Self {
        Self {
            tmux: std::env::var_os("TMUX").is_some(),
        }
    }

    pub fn sequence(self, text: &str) -> Result<String> {
        let bytes = text.as_bytes();
        if bytes.len() > MAX_PAYLOAD_BYTES {
            return Err(FormError::ExportFailure(format!(
                "{} KB is too large for the terminal clipboard (limit {} KB)",
                bytes.len() / 1024,
                MAX_PAYLOAD_BYTES / 1024
            )));
        }
        let payload = base64(bytes);
        Ok(if self.tmux {
            format!("\x1bPtmux;\x1b\x1b]52;c;{payload}\x07\x1b\\")
        } else {
            format!("\x1b]52;c;{payload}\x07")
        })
    }

    pub fn write_to<W: Write>(self, mut out: W, text: &str) -> Result<()> {
        let seq = self.sequence(text)?;
        out.write_all(seq.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| FormError::ExportFailure(format!("clipboard unavailable: {e}")))
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    ClipboardTarget::detect().write_to(io::stdout(), text)
}

fn base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let n = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, b)| acc | (u32::from(*b) << (16 - 8 * i)));
        for i in 0..4 {
            if i <= chunk.len() {
                out.push(BASE64[((n >> (18 - 6 * i)) & 0x3f) as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tui/clipboard.rs"]
mod tests;
