//! Background writer - keeps store writes off the game loop.
//!
//! Writes are queued on a channel and applied in order by a worker thread;
//! failures are logged there and never reach the caller. Reads go straight to
//! the wrapped store, so a read may not see a write that is still queued.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::error::PersistenceError;
use crate::kv::KeyValueStore;

enum WriteOp {
    Set { key: String, value: String },
    Remove { key: String },
    Flush(mpsc::Sender<()>),
}

pub struct BackgroundStore<S> {
    reader: S,
    tx: Option<mpsc::Sender<WriteOp>>,
    worker: Option<JoinHandle<()>>,
}

impl<S> BackgroundStore<S>
where
    S: KeyValueStore + Clone + Send + 'static,
{
    /// Start the worker thread. The worker owns a clone of `store`.
    pub fn spawn(store: S) -> Result<Self, PersistenceError> {
        let (tx, rx) = mpsc::channel::<WriteOp>();
        let mut writer = store.clone();

        let worker = thread::Builder::new()
            .name("memory-match-store".into())
            .spawn(move || {
                for op in rx {
                    let (key, result) = match op {
                        WriteOp::Set { key, value } => {
                            let result = writer.set(&key, &value);
                            (key, result)
                        }
                        WriteOp::Remove { key } => {
                            let result = writer.remove(&key);
                            (key, result)
                        }
                        WriteOp::Flush(ack) => {
                            let _ = ack.send(());
                            continue;
                        }
                    };
                    if let Err(e) = result {
                        warn!(key = %key, error = %e, "background store write failed");
                    }
                }
                debug!("background store writer stopped");
            })
            .map_err(|e| PersistenceError::io("<writer>", e))?;

        Ok(Self {
            reader: store,
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Block until every write queued so far has been applied.
    pub fn flush(&self) -> Result<(), PersistenceError> {
        let (ack_tx, ack_rx) = mpsc::channel();
        self.send(WriteOp::Flush(ack_tx))?;
        ack_rx.recv().map_err(|_| PersistenceError::WriterClosed)
    }

    fn send(&self, op: WriteOp) -> Result<(), PersistenceError> {
        self.tx
            .as_ref()
            .ok_or(PersistenceError::WriterClosed)?
            .send(op)
            .map_err(|_| PersistenceError::WriterClosed)
    }
}

impl<S> KeyValueStore for BackgroundStore<S>
where
    S: KeyValueStore + Clone + Send + 'static,
{
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.reader.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.send(WriteOp::Set {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.send(WriteOp::Remove {
            key: key.to_string(),
        })
    }
}

impl<S> Drop for BackgroundStore<S> {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain the queue and exit.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
