//! 终端生命周期：进入/恢复原始模式，信号退出时也恢复

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermOps;

impl TerminalOps for CrosstermOps {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::EnableBracketedPaste;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
        use crossterm::{cursor, execute};

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::Hide
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::event::DisableBracketedPaste;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
        use crossterm::{cursor, execute};

        // 每一步都要尝试，返回第一个错误
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableBracketedPaste,
            cursor::Show
        );
        raw.and(screen)
    }
}

/// 可以跨线程共享的恢复句柄，只会真正恢复一次
#[derive(Clone)]
pub struct Restorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl Restorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }
}

/// 持有期间终端处于 TUI 模式，drop 时恢复
pub struct TerminalSession {
    restorer: Restorer,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: Restorer {
                done: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> Restorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Interrupt,
    Terminate,
}

impl ExitSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            ExitSignal::Interrupt => 130,
            ExitSignal::Terminate => 143,
        }
    }
}

/// SIGINT/SIGTERM 转发给主循环；主循环卡住时两秒后强制恢复并退出
#[cfg(unix)]
pub fn watch_exit_signals(
    restorer: Restorer,
    tx: std::sync::mpsc::Sender<ExitSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        if let Some(raw) = signals.forever().next() {
            let signal = if raw == SIGINT {
                ExitSignal::Interrupt
            } else {
                ExitSignal::Terminate
            };
            tracing::info!(?signal, "exit signal received");
            let _ = tx.send(signal);
            std::thread::sleep(Duration::from_secs(2));
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal.rs"]
mod tests;
