//! DevServerNotifier implementations

use std::io::Write;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::domain::ports::{DevServerMessage, DevServerNotifier};

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl DevServerNotifier for NoopNotifier {
    fn content_changed(&self) {}

    fn errors(&self, _messages: &[String]) {}
}

/// Prints each message as one NDJSON line on stdout
///
/// A dev server running routegen as a child process forwards these lines to
/// its sockets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

impl StdoutNotifier {
    fn emit(&self, message: &DevServerMessage) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", message.to_json()).and_then(|_| stdout.flush()) {
            warn!(error = %e, "failed to write dev server message");
        }
    }
}

impl DevServerNotifier for StdoutNotifier {
    fn content_changed(&self) {
        self.emit(&DevServerMessage::ContentChanged);
    }

    fn errors(&self, messages: &[String]) {
        self.emit(&DevServerMessage::Errors(messages.to_vec()));
    }
}

/// Forwards messages into an mpsc channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<DevServerMessage>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<DevServerMessage>) -> Self {
        Self { tx }
    }

    fn send(&self, message: DevServerMessage) {
        if self.tx.send(message).is_err() {
            debug!("dev server channel closed, dropping message");
        }
    }
}

impl DevServerNotifier for ChannelNotifier {
    fn content_changed(&self) {
        self.send(DevServerMessage::ContentChanged);
    }

    fn errors(&self, messages: &[String]) {
        self.send(DevServerMessage::Errors(messages.to_vec()));
    }
}

/// Keeps every message in order; clones share the log
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<DevServerMessage>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<DevServerMessage> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    fn push(&self, message: DevServerMessage) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message),
            Err(e) => e.into_inner().push(message),
        }
    }
}

impl DevServerNotifier for RecordingNotifier {
    fn content_changed(&self) {
        self.push(DevServerMessage::ContentChanged);
    }

    fn errors(&self, messages: &[String]) {
        self.push(DevServerMessage::Errors(messages.to_vec()));
    }
}
