//! Values that can be changed freely while under construction and then frozen.
//!
//! A [`Lockable`] starts out unlocked. While unlocked every mutation succeeds,
//! and the value is compared and hashed by a process-unique identity, so two
//! values being built never collide. Calling [`Lockable::freeze`] caches the
//! rendering and length of the value; from then on equality and hashing are
//! derived from the cached rendering and every mutation fails with
//! [`Error::LockedMutation`].

use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Rendering and length rules for a value wrapped in a [`Lockable`].
pub trait Render {
    /// Textual rendering of the value.
    fn render(&self) -> String;

    fn length(&self) -> usize;

    /// Rendering used for equality and hashing once frozen. Two values with
    /// the same key are interchangeable.
    fn key(&self) -> String {
        self.render()
    }
}

#[derive(Debug)]
enum State {
    Unlocked,
    Locked {
        text: String,
        len: usize,
        key: String,
        hash: u64,
    },
}

/// A value with a mutable-then-frozen lifecycle.
pub struct Lockable<T> {
    value: T,
    id: u64,
    state: State,
}

impl<T: Render> Lockable<T> {
    pub fn new(value: T) -> Self {
        Lockable {
            value,
            id: next_id(),
            state: State::Unlocked,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.state, State::Locked { .. })
    }

    /// Replace the wrapped value.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.update(|v| *v = value)
    }

    /// Mutate the wrapped value in place. Fails without calling `f` if the
    /// value is frozen.
    pub fn update<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        if self.is_frozen() {
            return Err(Error::LockedMutation(self.rendered().into_owned()));
        }
        Ok(f(&mut self.value))
    }

    /// Cache the rendering and length, and switch to content based equality.
    /// Does nothing if already frozen.
    pub fn freeze(&mut self) {
        if self.is_frozen() {
            return;
        }

        let key = self.value.key();
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);

        self.state = State::Locked {
            text: self.value.render(),
            len: self.value.length(),
            hash: hasher.finish(),
            key,
        };
    }

    /// Discard the cached rendering and go back to identity based equality.
    /// Does nothing if not frozen.
    pub fn unlock(&mut self) {
        self.state = State::Unlocked;
    }

    pub fn rendered(&self) -> Cow<'_, str> {
        match self.state {
            State::Locked { ref text, .. } => Cow::Borrowed(text),
            State::Unlocked => Cow::Owned(self.value.render()),
        }
    }

    pub fn length(&self) -> usize {
        match self.state {
            State::Locked { len, .. } => len,
            State::Unlocked => self.value.length(),
        }
    }

    pub(crate) fn key(&self) -> Cow<'_, str> {
        match self.state {
            State::Locked { ref key, .. } => Cow::Borrowed(key),
            State::Unlocked => Cow::Owned(self.value.key()),
        }
    }
}

impl<T: Render + Clone> Lockable<T> {
    /// Deep copy with a fresh identity. The copy is unlocked unless
    /// `keep_frozen` is set, in which case its caches are derived anew.
    pub fn duplicate(&self, keep_frozen: bool) -> Self {
        let mut copy = Lockable::new(self.value.clone());
        if keep_frozen {
            copy.freeze();
        }
        copy
    }
}

/// Cloning keeps the frozen state of the source.
impl<T: Render + Clone> Clone for Lockable<T> {
    fn clone(&self) -> Self {
        self.duplicate(self.is_frozen())
    }
}

impl<T> PartialEq for Lockable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Locked { key: a, .. }, State::Locked { key: b, .. }) => a == b,
            (State::Unlocked, State::Unlocked) => self.id == other.id,
            _ => false,
        }
    }
}

impl<T> Eq for Lockable<T> {}

impl<T> Hash for Lockable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.state {
            State::Locked { hash, .. } => hash.hash(state),
            State::Unlocked => self.id.hash(state),
        }
    }
}

impl<T: Render> Display for Lockable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.rendered())
    }
}

impl<T: Debug> Debug for Lockable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Lockable")
            .field("value", &self.value)
            .field("frozen", &matches!(self.state, State::Locked { .. }))
            .finish()
    }
}
