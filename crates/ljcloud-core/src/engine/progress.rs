/// Events emitted while a workflow runs.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskAdvance { steps: u64 },
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// A reporter without a callback is free to call, so evaluators report
/// unconditionally.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    pub fn is_silent(&self) -> bool {
        self.callback.is_none()
    }
}

/// Number of `TaskAdvance` events a task is split into at most.
const TICKS_PER_TASK: u64 = 100;

/// Batches per-step progress of a long loop into at most [`TICKS_PER_TASK`]
/// callback invocations.
pub(crate) struct TaskTicker<'r, 'a> {
    reporter: &'r ProgressReporter<'a>,
    stride: u64,
    pending: u64,
}

impl<'r, 'a> TaskTicker<'r, 'a> {
    pub(crate) fn start(reporter: &'r ProgressReporter<'a>, total_steps: u64) -> Self {
        reporter.report(Progress::TaskStart { total_steps });
        Self {
            reporter,
            stride: (total_steps / TICKS_PER_TASK).max(1),
            pending: 0,
        }
    }

    #[inline]
    pub(crate) fn step(&mut self) {
        self.pending += 1;
        if self.pending >= self.stride {
            self.flush();
        }
    }

    pub(crate) fn finish(mut self) {
        self.flush();
        self.reporter.report(Progress::TaskFinish);
    }

    fn flush(&mut self) {
        if self.pending > 0 {
            self.reporter.report(Progress::TaskAdvance {
                steps: self.pending,
            });
            self.pending = 0;
        }
    }
}
