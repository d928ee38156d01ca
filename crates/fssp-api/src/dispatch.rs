//! Fire-and-forget background jobs.
//!
//! [`Dispatcher::submit`] hands a future to a fixed pool of worker tasks fed
//! by a bounded queue. The submitter gets nothing back. Jobs run in no
//! particular order, are never retried, and a failed or panicking job is
//! logged and forgotten. When the queue is full the new job is dropped.
//!
//! [`Deferred`] collects jobs and submits them only when it is dropped, so a
//! caller can tie their start to the lifetime of another value.

use std::{
  future::Future,
  pin::Pin,
  sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  },
};

use tokio::sync::{
  Mutex, Notify,
  mpsc::{self, error::TrySendError},
};
use tracing::{debug, warn};

use crate::settings::DispatchSettings;

type Job = Pin<Box<dyn Future<Output = fssp_core::Result<()>> + Send>>;

struct Task {
  label: &'static str,
  job:   Job,
}

/// Handle to the worker pool. Cloning is cheap; the pool shuts down once
/// every handle is dropped and the queue drains.
#[derive(Clone)]
pub struct Dispatcher {
  sender:  mpsc::Sender<Task>,
  /// Jobs accepted but not yet finished.
  pending: Arc<AtomicUsize>,
  idle:    Arc<Notify>,
}

impl Dispatcher {
  /// Start the worker pool. Must be called inside a tokio runtime.
  pub fn spawn(settings: &DispatchSettings) -> Self {
    let (sender, receiver) = mpsc::channel(settings.queue_capacity.max(1));
    let receiver = Arc::new(Mutex::new(receiver));
    let pending  = Arc::new(AtomicUsize::new(0));
    let idle     = Arc::new(Notify::new());

    for worker in 0..settings.workers.max(1) {
      let receiver = Arc::clone(&receiver);
      let pending  = Arc::clone(&pending);
      let idle     = Arc::clone(&idle);

      tokio::spawn(async move {
        loop {
          let task = receiver.lock().await.recv().await;
          let Some(Task { label, job }) = task else { break };

          // Run on its own task so a panic only loses this job.
          match tokio::spawn(job).await {
            Ok(Ok(())) => debug!(worker, job = label, "deferred job finished"),
            Ok(Err(e)) => warn!(worker, job = label, error = %e, "deferred job failed"),
            Err(e) => warn!(worker, job = label, error = %e, "deferred job panicked"),
          }

          if pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            idle.notify_waiters();
          }
        }
        debug!(worker, "dispatcher worker stopped");
      });
    }

    Self { sender, pending, idle }
  }

  /// Queue `job` for background execution.
  pub fn submit<F>(&self, label: &'static str, job: F)
  where
    F: Future<Output = fssp_core::Result<()>> + Send + 'static,
  {
    self.enqueue(Task { label, job: Box::pin(job) });
  }

  fn enqueue(&self, task: Task) {
    self.pending.fetch_add(1, Ordering::AcqRel);

    match self.sender.try_send(task) {
      Ok(()) => {}
      Err(TrySendError::Full(task)) => {
        self.forget_one();
        warn!(job = task.label, "dispatch queue full, dropping job");
      }
      Err(TrySendError::Closed(task)) => {
        self.forget_one();
        warn!(job = task.label, "dispatcher stopped, dropping job");
      }
    }
  }

  /// Number of jobs queued or running.
  pub fn pending(&self) -> usize { self.pending.load(Ordering::Acquire) }

  /// Resolve once every accepted job has finished.
  pub async fn wait_idle(&self) {
    loop {
      let notified = self.idle.notified();
      if self.pending() == 0 {
        return;
      }
      notified.await;
    }
  }

  fn forget_one(&self) {
    if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
      self.idle.notify_waiters();
    }
  }
}

// ─── Deferred ─────────────────────────────────────────────────────────────────

/// Jobs held back until this value is dropped, then submitted in push order.
pub struct Deferred {
  dispatcher: Dispatcher,
  tasks:      Vec<Task>,
}

impl Deferred {
  pub fn new(dispatcher: Dispatcher) -> Self {
    Self { dispatcher, tasks: Vec::new() }
  }

  pub fn push<F>(&mut self, label: &'static str, job: F)
  where
    F: Future<Output = fssp_core::Result<()>> + Send + 'static,
  {
    self.tasks.push(Task { label, job: Box::pin(job) });
  }

  pub fn len(&self) -> usize { self.tasks.len() }

  pub fn is_empty(&self) -> bool { self.tasks.is_empty() }
}

impl Drop for Deferred {
  fn drop(&mut self) {
    for task in self.tasks.drain(..) {
      self.dispatcher.enqueue(task);
    }
  }
}
