//! Cooperative behavior scheduler.
//!
//! Every behavior is an explicit state machine. Once per tick the scheduler
//! resumes each behavior in insertion order until it yields or completes.
//!
//! Ordering rules:
//! - the set of behaviors to resume is fixed when the tick starts; anything
//!   spawned during the tick is queued and first resumed on the next tick
//! - a completed behavior is dropped right after the tick and never resumed again
//! - a step error stops the remaining behaviors of the tick; completed ones are
//!   still dropped and spawns still queued before the error is returned
//!
//! A behavior that never yields stalls the loop. Behaviors are written to
//! yield after every unit of work; the scheduler does not guard against it.

use tui_starfield_core::{Canvas, Result, World};

/// Outcome of one [`Behavior::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// State changed; resume again within the same tick.
    Continue,
    /// Nothing more to do this tick.
    Yield,
    /// Finished; never resume again.
    Done,
}

/// A suspendable activity driven by the [`Scheduler`].
pub trait Behavior {
    /// Short stable name, used for logs and introspection.
    fn name(&self) -> &'static str;

    fn step(&mut self, cx: &mut Context<'_>) -> Result<Step>;
}

/// Everything a behavior may touch during a step.
pub struct Context<'a> {
    pub world: &'a mut World,
    canvas: &'a mut dyn Canvas,
    spawned: &'a mut Vec<Box<dyn Behavior>>,
}

impl<'a> Context<'a> {
    pub fn new(
        world: &'a mut World,
        canvas: &'a mut dyn Canvas,
        spawned: &'a mut Vec<Box<dyn Behavior>>,
    ) -> Self {
        Self {
            world,
            canvas,
            spawned,
        }
    }

    /// Queue a new behavior. It first runs on the next tick.
    pub fn spawn(&mut self, behavior: impl Behavior + 'static) {
        self.spawned.push(Box::new(behavior));
    }

    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }

    /// `(rows, columns)` of the canvas.
    pub fn extent(&self) -> (u16, u16) {
        self.canvas.extent()
    }
}

/// Countdown for "suspend for N ticks".
///
/// ```
/// use tui_starfield_engine::{Pause, Step};
///
/// let mut pause = Pause::default();
/// assert_eq!(pause.sleep(3), Step::Yield);
/// assert!(pause.pending());
/// assert!(pause.pending());
/// assert!(!pause.pending());
/// assert_eq!(pause.sleep(0), Step::Continue);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pause {
    remaining: u32,
}

impl Pause {
    /// Start sleeping for `ticks` ticks and return the step to hand back.
    ///
    /// The returned `Yield` is the first suspended tick; the remaining
    /// `ticks - 1` are absorbed by [`Pause::pending`]. Zero ticks does not
    /// suspend at all.
    pub fn sleep(&mut self, ticks: u32) -> Step {
        if ticks == 0 {
            self.remaining = 0;
            return Step::Continue;
        }
        self.remaining = ticks - 1;
        Step::Yield
    }

    /// Consume one suspended tick. True while still sleeping.
    pub fn pending(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Handle of a scheduled behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

struct Task {
    id: TaskId,
    behavior: Box<dyn Behavior>,
    done: bool,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub resumed: usize,
    pub completed: usize,
    pub spawned: usize,
}

/// Ordered pool of behaviors.
#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    pending: Vec<Box<dyn Behavior>>,
    next_id: u64,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a behavior. It runs starting with the next call to [`Scheduler::tick`].
    pub fn spawn(&mut self, behavior: impl Behavior + 'static) -> TaskId {
        self.push(Box::new(behavior))
    }

    fn push(&mut self, behavior: Box<dyn Behavior>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            behavior,
            done: false,
        });
        id
    }

    /// Advance every behavior present at the start of the tick by one step.
    pub fn tick(&mut self, world: &mut World, canvas: &mut dyn Canvas) -> Result<TickReport> {
        let snapshot = self.tasks.len();
        let mut report = TickReport::default();

        let mut failure = None;
        for task in &mut self.tasks[..snapshot] {
            let mut cx = Context::new(world, &mut *canvas, &mut self.pending);
            report.resumed += 1;
            match resume(task.behavior.as_mut(), &mut cx) {
                Ok(true) => {
                    log::trace!("{} #{} completed", task.behavior.name(), task.id.0);
                    task.done = true;
                    report.completed += 1;
                }
                Ok(false) => {}
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
        }

        // Reap and merge even when a step failed, so a later tick never
        // resumes a completed behavior.
        if report.completed > 0 {
            self.tasks.retain(|task| !task.done);
        }

        report.spawned = self.pending.len();
        let spawned = std::mem::take(&mut self.pending);
        for behavior in spawned {
            self.push(behavior);
        }

        self.ticks += 1;
        match failure {
            Some(err) => Err(err),
            None => Ok(report),
        }
    }

    /// Number of behaviors that will be resumed on the next tick.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Completed ticks since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Behavior names in resume order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|task| task.behavior.name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.iter().map(|task| task.id)
    }
}

// Returns true when the behavior completed.
fn resume(behavior: &mut dyn Behavior, cx: &mut Context<'_>) -> Result<bool> {
    loop {
        match behavior.step(cx) {
            Ok(Step::Continue) => continue,
            Ok(Step::Yield) => return Ok(false),
            Ok(Step::Done) => return Ok(true),
            Err(err) => {
                log::error!("behavior `{}` failed: {}", behavior.name(), err);
                return Err(err);
            }
        }
    }
}
