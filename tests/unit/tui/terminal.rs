use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        Ok(())
    }
}

struct FailingEnter;

impl TerminalOps for FailingEnter {
    fn enter(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
    }

    fn leave(&self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn session_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _session = TerminalSession::with_ops(ops.clone()).unwrap();
    }
    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn restorer_is_idempotent() {
    let ops = Arc::new(MockOps::default());
    let session = TerminalSession::with_ops(ops.clone()).unwrap();
    let restorer = session.restorer();

    restorer.restore().unwrap();
    restorer.clone().restore().unwrap();
    drop(session);

    assert_eq!(&*ops.calls.lock().unwrap(), &["enter", "leave"]);
}

#[test]
fn failed_enter_returns_error() {
    assert!(TerminalSession::with_ops(Arc::new(FailingEnter)).is_err());
}

#[test]
fn exit_codes_follow_shell_convention() {
    assert_eq!(ExitSignal::Interrupt.exit_code(), 130);
    assert_eq!(ExitSignal::Terminate.exit_code(), 143);
}
