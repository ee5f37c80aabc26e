use crossbeam_channel::{Receiver, Sender};

use crate::engine::LifecycleEngine;
use crate::host::WindowHost;
use crate::model::{EngineEvent, EngineFlow};
use crate::presentation::PresentationSink;

/// Single serialized queue feeding the engine.
///
/// Producers push; the engine side drains strictly in arrival
/// order, one event at a time.
pub struct EventQueue {
    tx: Sender<EngineEvent>,
    rx: Receiver<EngineEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    pub fn push(&self, event: EngineEvent) {
        // The receiver lives as long as `self`, so this cannot disconnect.
        let _ = self.tx.send(event);
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Hands every queued event to `engine`. Stops at the first `Exit`;
    /// anything queued behind it is discarded.
    pub fn dispatch<H, S>(&self, engine: &mut LifecycleEngine<H, S>) -> EngineFlow
    where
        H: WindowHost,
        S: PresentationSink,
    {
        while let Ok(event) = self.rx.try_recv() {
            if engine.handle(event) == EngineFlow::Exit {
                while self.rx.try_recv().is_ok() {}
                return EngineFlow::Exit;
            }
        }
        EngineFlow::Continue
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
