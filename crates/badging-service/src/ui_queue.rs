//! Marshalling work onto the UI thread
//!
//! Bind requests can originate on IO or worker threads, but the badge service
//! may only be entered on the UI thread. Off-thread code posts a task through
//! a `UiTaskSender`; the UI thread runs queued tasks with
//! `UiTaskQueue::run_pending`, handing each one the target it owns.

use crate::binding::{bind_frame_receiver, FrameBindRequest};
use crate::factory::BadgeServiceResolver;
use badging_core::{BadgeError, Result, UiThread};
use std::fmt;
use tokio::sync::mpsc;

/// A unit of work that runs on the UI thread against `S`.
pub type UiTask<S> = Box<dyn FnOnce(&mut S) + Send + 'static>;

/// Create a task queue owned by the calling thread.
pub fn ui_task_queue<S>() -> (UiTaskSender<S>, UiTaskQueue<S>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        UiTaskSender { tx },
        UiTaskQueue {
            ui: UiThread::current(),
            rx,
        },
    )
}

/// Posts tasks to the UI thread from any thread.
pub struct UiTaskSender<S> {
    tx: mpsc::UnboundedSender<UiTask<S>>,
}

impl<S> Clone for UiTaskSender<S> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<S> fmt::Debug for UiTaskSender<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiTaskSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl<S> UiTaskSender<S> {
    /// Queue `task` for the UI thread.
    pub fn post<F>(&self, task: F) -> Result<()>
    where
        F: FnOnce(&mut S) + Send + 'static,
    {
        self.tx
            .send(Box::new(task))
            .map_err(|_| BadgeError::QueueClosed)
    }
}

impl<S> UiTaskSender<S>
where
    S: BadgeServiceResolver + 'static,
{
    /// Queue a frame bind for the UI thread.
    pub fn post_bind(&self, request: FrameBindRequest) -> Result<()> {
        self.post(move |resolver: &mut S| {
            bind_frame_receiver(resolver, request);
        })
    }
}

/// UI-thread side of the task queue.
pub struct UiTaskQueue<S> {
    ui: UiThread,
    rx: mpsc::UnboundedReceiver<UiTask<S>>,
}

impl<S> fmt::Debug for UiTaskQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiTaskQueue").field("ui", &self.ui).finish()
    }
}

impl<S> UiTaskQueue<S> {
    /// Run every task queued so far against `target`.
    ///
    /// Returns how many tasks ran. Panics off the owning thread.
    pub fn run_pending(&mut self, target: &mut S) -> usize {
        self.ui.assert_current();
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task(target);
            ran += 1;
        }
        ran
    }
}
