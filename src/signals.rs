/// Signal handling for the beep counter.
///
/// SIGINT (Ctrl-C): beep and count.
/// SIGQUIT (Ctrl-\): print the count and exit.
/// Every other signal keeps its default disposition.
use crate::responder::{Action, Responder};
use std::io::Write;
use tokio::signal::unix::{signal, Signal, SignalKind};
use tracing::info;

/// A signal the responder reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEvent {
    Interrupt,
    Quit,
}

impl SignalEvent {
    pub fn name(self) -> &'static str {
        match self {
            SignalEvent::Interrupt => "SIGINT",
            SignalEvent::Quit => "SIGQUIT",
        }
    }

    fn kind(self) -> SignalKind {
        match self {
            SignalEvent::Interrupt => SignalKind::interrupt(),
            SignalEvent::Quit => SignalKind::quit(),
        }
    }
}

/// Errors that can occur while installing signal handlers.
#[derive(Debug)]
pub enum SignalError {
    Register {
        signal: &'static str,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SignalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalError::Register { signal, source } => {
                write!(f, "failed to register {} handler: {}", signal, source)
            }
        }
    }
}

impl std::error::Error for SignalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SignalError::Register { source, .. } => Some(source),
        }
    }
}

pub struct SignalHandler {
    interrupt: Signal,
    quit: Signal,
}

impl SignalHandler {
    /// Register SIGINT and SIGQUIT with the runtime. Must be called inside a tokio runtime.
    ///
    /// Once this returns, neither signal terminates the process by default.
    pub fn install() -> Result<SignalHandler, SignalError> {
        Ok(SignalHandler {
            interrupt: register(SignalEvent::Interrupt)?,
            quit: register(SignalEvent::Quit)?,
        })
    }

    /// Suspend until the next SIGINT or SIGQUIT.
    ///
    /// Deliveries of one kind that arrive before this is polled again coalesce.
    /// A pending interrupt is always returned before a pending quit, matching
    /// the kernel's lowest-signal-first delivery order.
    pub async fn recv(&mut self) -> SignalEvent {
        loop {
            tokio::select! {
                biased;
                Some(()) = self.interrupt.recv() => return SignalEvent::Interrupt,
                Some(()) = self.quit.recv() => return SignalEvent::Quit,
                else => {
                    // Both streams closed; only happens if the driver shuts down.
                    std::future::pending::<()>().await;
                }
            }
        }
    }

    /// Dispatch signals to `responder` until quit is handled.
    pub async fn run<W: Write>(&mut self, responder: &mut Responder<W>) {
        loop {
            let event = self.recv().await;
            let action = match event {
                SignalEvent::Interrupt => responder.on_interrupt(),
                SignalEvent::Quit => responder.on_quit(),
            };
            if action == Action::Exit {
                info!(count = responder.count(), "received {}, exiting", event.name());
                return;
            }
        }
    }
}

fn register(event: SignalEvent) -> Result<Signal, SignalError> {
    signal(event.kind()).map_err(|e| SignalError::Register {
        signal: event.name(),
        source: e,
    })
}
