//! Off-thread range extraction.
//!
//! The range query is the one operation with a concurrency contract: it runs
//! on a blocking worker, never on the caller, and delivers exactly one
//! result. There is no cancellation; a dropped future still lets the worker
//! finish.

use log::{debug, trace};
use tokio::runtime::Handle;

use crate::error::{Result, ScheduleError};
use crate::models::{Interval, SlicedSchedule};

impl SlicedSchedule {
    /// Runs [`in_range`](Self::in_range) on a blocking worker.
    ///
    /// Must be awaited inside a Tokio runtime. Worker failures surface as
    /// [`ScheduleError::Dispatch`].
    pub async fn in_range_async(&self, span: Interval) -> Result<Vec<Interval>> {
        let schedule = self.clone();
        trace!("dispatching range query over {} elements", schedule.len());
        let found = tokio::task::spawn_blocking(move || schedule.in_range(&span)).await?;
        Ok(found)
    }

    /// Runs [`in_range`](Self::in_range) on a blocking worker of `runtime`
    /// and hands the outcome to `completion` exactly once.
    ///
    /// With `delivery`, `completion` is invoked on a task spawned there;
    /// otherwise it runs on `runtime` right after the worker finishes.
    ///
    /// Shut-down runtimes never swallow the call:
    /// - if `delivery` is gone, the result is delivered inline on `runtime`;
    /// - if `runtime` is gone before the worker finishes, `completion`
    ///   receives [`ScheduleError::Shutdown`] on whichever thread drops the
    ///   pending task (the caller's, when `runtime` was already shut down).
    pub fn in_range_then<F>(
        &self,
        span: Interval,
        runtime: &Handle,
        delivery: Option<Handle>,
        completion: F,
    ) where
        F: FnOnce(Result<Vec<Interval>>) + Send + 'static,
    {
        let schedule = self.clone();
        trace!("dispatching range query over {} elements", schedule.len());
        let mut pending = Completion::new(completion);
        let worker = runtime.spawn_blocking(move || schedule.in_range(&span));

        runtime.spawn(async move {
            pending.settle(worker.await.map_err(ScheduleError::from));
            match delivery {
                Some(handle) => {
                    handle.spawn(async move { pending.fire() });
                }
                None => pending.fire(),
            }
        });
    }
}

/// A completion that runs exactly once.
///
/// Dropping it unfired delivers the settled result, or
/// [`ScheduleError::Shutdown`] when nothing was settled yet.
struct Completion<F>
where
    F: FnOnce(Result<Vec<Interval>>),
{
    callback: Option<F>,
    result: Option<Result<Vec<Interval>>>,
}

impl<F> Completion<F>
where
    F: FnOnce(Result<Vec<Interval>>),
{
    fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
            result: None,
        }
    }

    fn settle(&mut self, result: Result<Vec<Interval>>) {
        self.result = Some(result);
    }

    fn fire(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(callback) = self.callback.take() {
            let result = self.result.take().unwrap_or(Err(ScheduleError::Shutdown));
            callback(result);
        }
    }
}

impl<F> Drop for Completion<F>
where
    F: FnOnce(Result<Vec<Interval>>),
{
    fn drop(&mut self) {
        if self.callback.is_some() {
            debug!("range query task dropped before delivery, completing inline");
            self.run();
        }
    }
}
