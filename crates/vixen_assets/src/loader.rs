use flume::{Receiver, Sender, TryRecvError};

pub const DEFAULT_DRACO_DECODER_PATH: &str = "/draco/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Where a Draco decoder would be looked up. Only reported in diagnostics,
    /// the glTF backend does not decode Draco-compressed primitives.
    pub draco_decoder_path: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            draco_decoder_path: DEFAULT_DRACO_DECODER_PATH.to_string(),
        }
    }
}

/// One-shot completion of a background load.
///
/// [`poll`](Self::poll) hands out the value at most once. A load that fails
/// drops its sender without sending, so the handle stays pending forever.
#[derive(Debug)]
pub struct LoadHandle<T> {
    rx: Receiver<T>,
    delivered: bool,
}

impl<T> LoadHandle<T> {
    #[must_use]
    pub fn channel() -> (Sender<T>, Self) {
        let (tx, rx) = flume::bounded(1);
        (tx, Self { rx, delivered: false })
    }

    /// A handle that completes on its first poll.
    #[must_use]
    pub fn ready(value: T) -> Self {
        let (tx, handle) = Self::channel();
        // The receiver is alive and the channel is empty.
        let _ = tx.send(value);
        handle
    }

    pub fn poll(&mut self) -> Option<T> {
        if self.delivered {
            return None;
        }
        match self.rx.try_recv() {
            Ok(value) => {
                self.delivered = true;
                Some(value)
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }
}
