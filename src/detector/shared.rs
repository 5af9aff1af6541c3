//! Snapshot-and-swap sharing of a trained detector.
//!
//! Detection workers take an [`Arc`] snapshot and run against it without
//! holding any lock. A retrained detector is published with
//! [`SharedDetector::swap`]; workers holding the old snapshot finish on it.
//! Writers are serialized: a retrain never starts from a detector that
//! another writer is about to replace.

use std::sync::Arc;

use log::info;
use parking_lot::{Mutex, RwLock};

use crate::detector::MweDetector;

/// A detector shared between readers and a single retraining writer.
#[derive(Debug)]
pub struct SharedDetector {
    current: RwLock<Arc<MweDetector>>,
    writer: Mutex<()>,
}

impl SharedDetector {
    /// Share a trained detector.
    pub fn new(detector: MweDetector) -> Self {
        SharedDetector {
            current: RwLock::new(Arc::new(detector)),
            writer: Mutex::new(()),
        }
    }

    /// The detector currently published.
    pub fn snapshot(&self) -> Arc<MweDetector> {
        self.current.read().clone()
    }

    /// Publish a new detector, returning the previous one.
    pub fn swap(&self, detector: MweDetector) -> Arc<MweDetector> {
        let _writer = self.writer.lock();
        self.publish(detector)
    }

    fn publish(&self, detector: MweDetector) -> Arc<MweDetector> {
        let detector = Arc::new(detector);
        let mut guard = self.current.write();
        info!("Publishing lexicon with {} entries", detector.lexicon().len());
        std::mem::replace(&mut *guard, detector)
    }

    /// Retrain from a copy of the current detector and publish the result.
    ///
    /// Readers keep using the current snapshot until the swap. Concurrent
    /// retrains run one after another, each starting from the detector the
    /// previous one published.
    pub fn retrain<F>(&self, train: F) -> Arc<MweDetector>
    where
        F: FnOnce(&mut MweDetector),
    {
        let _writer = self.writer.lock();
        let mut next = MweDetector::clone(&self.snapshot());
        train(&mut next);
        self.publish(next)
    }
}
