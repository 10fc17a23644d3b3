//! Deferred jump power update.
//!
//! A submit shows a loading placeholder right away and schedules one task
//! that runs after the configured delay. When it runs it evaluates the metric
//! for the parameters captured at submit time, writes the jump power, updates
//! the HUD and queues a [`Flourish`] for the runtime to play.
//!
//! Due times come from the runtime clock passed to `submit`, and tasks run
//! when `run_due` is called with a clock at or past them, never on wall time,
//! so the pipeline is deterministic under test.

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::level::Level;
use crate::metric::jump_metric;
use crate::params::Params;
use crate::resources::{Hud, JumpPower, ParameterPair};

/// Identifier of a scheduled update
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TaskId(pub u64);

/// What happens to in-flight updates when a new one is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupersedeMode {
    /// Every task runs; whichever completes last owns the jump power.
    #[default]
    LastCompletedWins,
    /// Scheduling a task cancels all pending ones.
    CancelSuperseded,
}

#[derive(Debug, Clone, Copy)]
struct DeferredTask {
    id: TaskId,
    due_at: f64,
    params: ParameterPair,
}

/// Linear move-and-fade of one display object
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TweenTrack {
    pub start: Vec2,
    pub end_y: f32,
    pub start_alpha: f32,
    pub end_alpha: f32,
}

impl TweenTrack {
    fn rise_and_fade_in(start: Vec2, end_y: f32) -> Self {
        Self {
            start,
            end_y,
            start_alpha: 0.0,
            end_alpha: 1.0,
        }
    }
}

/// "New jump power" announcement: text and rocket icon rising while fading in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flourish {
    pub task: TaskId,
    pub text: String,
    pub text_track: TweenTrack,
    pub icon_track: TweenTrack,
    pub started_at: f64,
    pub duration_ms: f64,
}

/// Undrained flourishes kept; older ones are dropped first
pub const MAX_QUEUED_FLOURISHES: usize = 8;

#[derive(Debug, Default)]
pub struct UpdatePipeline {
    next_id: u64,
    pending: Vec<DeferredTask>,
    flourishes: Vec<Flourish>,
}

impl UpdatePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the loading placeholder and schedule an update for `params`.
    pub fn submit(
        &mut self,
        params: ParameterPair,
        now: f64,
        config: &Config,
        hud: &mut Hud,
    ) -> TaskId {
        hud.show_loading();

        if config.supersede == SupersedeMode::CancelSuperseded && !self.pending.is_empty() {
            debug!("cancelling {} superseded update(s)", self.pending.len());
            self.pending.clear();
        }

        self.next_id += 1;
        let id = TaskId(self.next_id);
        let due_at = now + config.submit_delay_ms;
        self.pending.push(DeferredTask { id, due_at, params });
        debug!(
            "scheduled update {:?} for ({}, {}) at {}",
            id, params.x1, params.x2, due_at
        );
        id
    }

    /// Drop a pending task. Returns false if it already ran or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.id != id);
        let cancelled = self.pending.len() != before;
        if cancelled {
            debug!("cancelled update {:?}", id);
        }
        cancelled
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|task| task.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Run every task due at `now`, in due-time order (ties by id), and
    /// return their ids in the order they ran.
    pub fn run_due(
        &mut self,
        now: f64,
        config: &Config,
        level: &Level,
        power: &mut JumpPower,
        hud: &mut Hud,
    ) -> Vec<TaskId> {
        let mut due: Vec<DeferredTask> = Vec::new();
        self.pending.retain(|task| {
            if task.due_at <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_at.total_cmp(&b.due_at).then(a.id.cmp(&b.id)));

        due.into_iter()
            .map(|task| {
                let value = JumpPower::Value(jump_metric(task.params.x1, task.params.x2));
                *power = value;
                hud.show_power(value);
                debug!("update {:?} finished with jump power {}", task.id, value);

                if self.flourishes.len() == MAX_QUEUED_FLOURISHES {
                    self.flourishes.remove(0);
                }
                self.flourishes.push(Self::flourish(
                    task.id,
                    value,
                    task.due_at,
                    config,
                    level,
                ));

                task.id
            })
            .collect()
    }

    /// Flourishes queued since the last call, oldest first. At most
    /// [`MAX_QUEUED_FLOURISHES`] are kept between calls.
    pub fn take_flourishes(&mut self) -> Vec<Flourish> {
        std::mem::take(&mut self.flourishes)
    }

    fn flourish(
        task: TaskId,
        power: JumpPower,
        started_at: f64,
        config: &Config,
        level: &Level,
    ) -> Flourish {
        let center_x = level.center_x();
        Flourish {
            task,
            text: format!("New jump power: {}!", power),
            text_track: TweenTrack::rise_and_fade_in(
                Vec2::new(center_x + Params::FLOURISH_TEXT_OFFSET_X, level.height),
                Params::FLOURISH_TEXT_END_Y,
            ),
            icon_track: TweenTrack::rise_and_fade_in(
                Vec2::new(center_x + Params::FLOURISH_ICON_OFFSET_X, level.height),
                Params::FLOURISH_ICON_END_Y,
            ),
            started_at,
            duration_ms: config.flourish_duration_ms,
        }
    }
}
