//! Per-frame callback scheduler.
//!
//! A single ordered list of callbacks invoked once per rendered frame, in
//! registration order. The scheduler holds no domain state; callbacks receive
//! the mutable context plus the frame timing and do all the mutation.
//!
//! Registration changes during a tick are unrepresentable: `register`,
//! `unregister`, and `tick` all take `&mut self`, and callbacks only ever see
//! the context. Callers that decide mid-tick to change the callback set apply
//! the change after `tick` returns.

/// Identity of a registered callback, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

/// Timing for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Absolute elapsed time (ms) supplied by the external clock.
    pub time: f64,
    /// Time since the previous tick (ms). Zero on the first tick.
    pub delta: f64,
}

type Callback<C> = Box<dyn FnMut(&mut C, Frame)>;

/// Ordered per-frame callback dispatcher.
pub struct Scheduler<C> {
    slots: Vec<(CallbackId, Callback<C>)>,
    next_id: u64,
    last_time: Option<f64>,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
            last_time: None,
        }
    }

    /// Add a per-frame callback. Callbacks run in registration order.
    pub fn register(&mut self, callback: impl FnMut(&mut C, Frame) + 'static) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback by identity. Returns false if it was not registered.
    pub fn unregister(&mut self, id: CallbackId) -> bool {
        match self.slots.iter().position(|(slot_id, _)| *slot_id == id) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Invoke every registered callback once, in registration order.
    ///
    /// The per-frame delta is derived from consecutive absolute times. A
    /// panicking callback unwinds to the caller and skips the rest of the
    /// tick's callbacks.
    pub fn tick(&mut self, ctx: &mut C, time: f64) {
        let delta = match self.last_time {
            Some(previous) => time - previous,
            None => 0.0,
        };
        self.last_time = Some(time);

        let frame = Frame { time, delta };
        for (_, callback) in &mut self.slots {
            callback(ctx, frame);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
