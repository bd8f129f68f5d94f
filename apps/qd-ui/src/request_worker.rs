//! Worker threads backing the submit flows.
//!
//! Each submit spawns one worker that performs a single blocking call and
//! sends exactly one completion message. The update loop polls the channel;
//! nothing here touches UI state.

use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};

use qd_client::ClientError;
use tracing::debug;

/// The one message a worker sends back.
#[derive(Debug)]
pub enum FlowMessage<T> {
    Done(T),
    Failed { message: String },
}

pub struct RequestWorker<T> {
    result_rx: Receiver<FlowMessage<T>>,
    _handle: JoinHandle<()>,
}

impl<T: Send + 'static> RequestWorker<T> {
    pub fn spawn<F>(label: &'static str, job: F) -> Self
    where
        F: FnOnce() -> Result<T, ClientError> + Send + 'static,
    {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            debug!(label, "request worker started");
            let message = match job() {
                Ok(payload) => FlowMessage::Done(payload),
                Err(err) => FlowMessage::Failed {
                    message: err.to_string(),
                },
            };
            debug!(label, "request worker finished");
            // The receiver may be gone if the app shut down mid-flight.
            let _ = tx.send(message);
        });

        Self {
            result_rx: rx,
            _handle: handle,
        }
    }

    /// Non-blocking poll for the completion message.
    pub fn try_take(&self) -> Option<FlowMessage<T>> {
        self.result_rx.try_recv().ok()
    }
}
