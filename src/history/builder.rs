use crate::socket::{Nop, Socket};
use crate::History;
use alloc::collections::VecDeque;
use core::marker::PhantomData;
use core::num::NonZeroUsize;

/// Builder for a [`History`].
///
/// # Examples
/// ```
/// # use rewind::{Add, History};
/// # let mut target = String::new();
/// let mut history = History::builder()
///     .limit(100)
///     .capacity(100)
///     .connect(|signal| { dbg!(signal); })
///     .build();
/// # history.apply(&mut target, Add('a')).unwrap();
/// ```
#[derive(Debug)]
pub struct Builder<C, S = Nop> {
    capacity: usize,
    limit: NonZeroUsize,
    saved: bool,
    socket: Socket<S>,
    pd: PhantomData<C>,
}

impl<C, S> Builder<C, S> {
    /// Returns a builder for a history.
    pub fn new() -> Builder<C, S> {
        Builder {
            capacity: 0,
            limit: NonZeroUsize::MAX,
            saved: true,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }

    /// Sets the capacity for the history.
    pub fn capacity(mut self, capacity: usize) -> Builder<C, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the `limit` of the history.
    ///
    /// # Panics
    /// Panics if `limit` is `0`.
    pub fn limit(mut self, limit: usize) -> Builder<C, S> {
        self.limit = NonZeroUsize::new(limit).expect("limit can not be `0`");
        self
    }

    /// Sets if the target is initially in a saved state.
    /// By default the target is in a saved state.
    pub fn saved(mut self, saved: bool) -> Builder<C, S> {
        self.saved = saved;
        self
    }

    /// Connects the slot.
    pub fn connect(mut self, slot: S) -> Builder<C, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the history.
    pub fn build(self) -> History<C, S> {
        History {
            entries: VecDeque::with_capacity(self.capacity),
            limit: self.limit,
            index: 0,
            saved: self.saved.then_some(0),
            socket: self.socket,
        }
    }
}

impl<C, S> Default for Builder<C, S> {
    fn default() -> Self {
        Builder::new()
    }
}
