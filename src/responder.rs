use std::io::Write;
use tracing::debug;

const BELL: &[u8] = b"\x07";

/// Lifecycle of the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponderState {
    Running,
    /// Entered only through `on_quit`. No further events are handled.
    Terminated,
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep waiting for signals.
    Continue,
    /// Quit was handled; exit with status 0.
    Exit,
}

/// Beep counter driven by interrupt and quit events.
///
/// Owns the writer it reports to (stdout in production). Write and flush
/// failures are logged at debug level and otherwise ignored: they never stop
/// the count or the process.
pub struct Responder<W: Write> {
    out: W,
    label: String,
    count: u64,
    state: ResponderState,
}

impl<W: Write> Responder<W> {
    pub fn new(out: W, label: impl Into<String>) -> Self {
        Self {
            out,
            label: label.into(),
            count: 0,
            state: ResponderState::Running,
        }
    }

    /// Beep, flush, and count one interrupt.
    pub fn on_interrupt(&mut self) -> Action {
        if self.state == ResponderState::Terminated {
            return Action::Exit;
        }

        if let Err(e) = self.out.write_all(BELL).and_then(|_| self.out.flush()) {
            debug!(error = %e, "failed to write bell");
        }
        self.count += 1;
        debug!(count = self.count, "interrupt");
        Action::Continue
    }

    /// Report the count and move to `Terminated`.
    pub fn on_quit(&mut self) -> Action {
        if self.state == ResponderState::Terminated {
            return Action::Exit;
        }

        let line = format!("\n{}: {}\n", self.label, self.count);
        if let Err(e) = self
            .out
            .write_all(line.as_bytes())
            .and_then(|_| self.out.flush())
        {
            debug!(error = %e, "failed to write count");
        }
        self.state = ResponderState::Terminated;
        Action::Exit
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    #[cfg(test)]
    fn state(&self) -> ResponderState {
        self.state
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}
