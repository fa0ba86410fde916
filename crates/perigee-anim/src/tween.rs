//! Keyframe interpolation ("tween") engine.
//!
//! A tween drives a set of named numeric channels from start to end values
//! over a fixed duration, through an easing curve. Active tweens are advanced
//! once per frame from absolute elapsed time; on reaching the end they report
//! exact target values one final time and remove themselves from the active
//! set.

/// Identity of a started tween, used for `begin` / `cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

/// One named channel of a tween.
#[derive(Debug, Clone)]
struct Channel {
    name: String,
    from: f64,
    to: f64,
    value: f64,
}

/// Description of a tween: channels, duration, easing, start mode.
///
/// Built with the builder methods, then handed to [`TweenEngine::start`]
/// together with an update callback.
pub struct Tween {
    duration_ms: f64,
    channels: Vec<Channel>,
    easing: fn(f64) -> f64,
    auto_start: bool,
}

impl Tween {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            channels: Vec::new(),
            easing: quad_in_out,
            auto_start: true,
        }
    }

    /// Add a named channel interpolating `from` → `to`.
    pub fn channel(mut self, name: &str, from: f64, to: f64) -> Self {
        self.channels.push(Channel {
            name: name.to_string(),
            from,
            to,
            value: from,
        });
        self
    }

    /// Replace the default quadratic ease-in-out curve.
    pub fn easing(mut self, easing: fn(f64) -> f64) -> Self {
        self.easing = easing;
        self
    }

    /// Create the tween inactive; it runs only after [`TweenEngine::begin`].
    pub fn manual_start(mut self) -> Self {
        self.auto_start = false;
        self
    }
}

/// Interpolated channel values handed to the update callback.
pub struct TweenStep<'a> {
    channels: &'a [Channel],
    progress: f64,
}

impl TweenStep<'_> {
    /// Current value of a named channel.
    ///
    /// Panics if the tween has no channel of that name, a caller bug on par
    /// with indexing out of bounds.
    pub fn value(&self, name: &str) -> f64 {
        self.channels
            .iter()
            .find(|channel| channel.name == name)
            .unwrap_or_else(|| panic!("tween has no channel named {name:?}"))
            .value
    }

    /// Normalized progress `t ∈ [0, 1]` (before easing).
    pub fn progress(&self) -> f64 {
        self.progress
    }
}

struct Task<C> {
    id: TweenId,
    duration_ms: f64,
    channels: Vec<Channel>,
    easing: fn(f64) -> f64,
    on_update: Box<dyn FnMut(&mut C, &TweenStep)>,
    /// Absolute time of the first advance after activation.
    started_at: Option<f64>,
    active: bool,
}

/// Holds the active tween set and advances it from absolute elapsed time.
pub struct TweenEngine<C> {
    tasks: Vec<Task<C>>,
    next_id: u64,
}

impl<C> Default for TweenEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TweenEngine<C> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a tween. Auto-start tweens begin timing at the next advance;
    /// manual ones wait for [`begin`](Self::begin).
    pub fn start(
        &mut self,
        tween: Tween,
        on_update: impl FnMut(&mut C, &TweenStep) + 'static,
    ) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            duration_ms: tween.duration_ms,
            channels: tween.channels,
            easing: tween.easing,
            on_update: Box::new(on_update),
            started_at: None,
            active: tween.auto_start,
        });
        id
    }

    /// Activate a tween created with `manual_start`. Its clock starts at the
    /// next advance. Returns false if the id is unknown or already running.
    pub fn begin(&mut self, id: TweenId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) if !task.active => {
                task.active = true;
                true
            }
            _ => false,
        }
    }

    /// Remove a tween without a final update callback.
    /// Returns false if it was not in the active set.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Advance all active tweens to `time` (absolute ms), invoking each
    /// tween's update callback with its interpolated channel values.
    ///
    /// Completed tweens report exact target values once and are removed;
    /// a non-positive duration completes on the first advance.
    pub fn advance(&mut self, ctx: &mut C, time: f64) {
        let mut index = 0;
        while index < self.tasks.len() {
            let task = &mut self.tasks[index];
            if !task.active {
                index += 1;
                continue;
            }

            let started_at = *task.started_at.get_or_insert(time);
            let t = if task.duration_ms > 0.0 {
                ((time - started_at) / task.duration_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let finished = t >= 1.0;
            let eased = (task.easing)(t);
            for channel in &mut task.channels {
                channel.value = if finished {
                    channel.to
                } else {
                    channel.from + (channel.to - channel.from) * eased
                };
            }

            // Split borrows: the step reads channels while the callback is
            // called through its own field.
            let Task {
                channels,
                on_update,
                ..
            } = task;
            let step = TweenStep {
                channels,
                progress: t,
            };
            on_update(ctx, &step);

            if finished {
                self.tasks.remove(index);
            } else {
                index += 1;
            }
        }
    }

    /// Number of registered tweens (active or awaiting `begin`).
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

// --- Easing curves ---

/// Quadratic ease-in-ease-out over normalized progress.
pub fn quad_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Identity easing.
pub fn linear(t: f64) -> f64 {
    t
}
