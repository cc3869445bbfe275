//! One-shot reveal flags for elements entering the viewport.
//!
//! Each displayed element owns an entry in a [`RevealArena`]. An entry starts hidden and
//! flips to visible the first time its watcher reports an intersection, after which the
//! watcher is dropped. Entries never flip back.

/// Portion of an element that must be inside the viewport before the watcher fires.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Whether the platform can observe viewport intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverSupport {
    Available,
    Unavailable,
}

/// What the caller should do with the platform watcher after an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Disconnect,
}

/// Generational handle to an arena entry. A released key never matches a later entry
/// that reuses its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealKey {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    visible: bool,
    watching: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RevealArena {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
}

impl RevealArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, support: ObserverSupport) -> RevealKey {
        let entry = match support {
            ObserverSupport::Available => Entry {
                visible: false,
                watching: true,
            },
            ObserverSupport::Unavailable => Entry {
                visible: true,
                watching: false,
            },
        };
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.entry = Some(entry);
            RevealKey {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                entry: Some(entry),
            });
            RevealKey {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    /// Feed one intersection observation for `key`.
    ///
    /// Returns [`Watch::Disconnect`] once the entry no longer needs a watcher: on the
    /// first intersection, and for every observation against an entry that already
    /// fired or has been released.
    pub fn observe(&mut self, key: RevealKey, intersecting: bool) -> Watch {
        let Some(entry) = self.entry_mut(key) else {
            return Watch::Disconnect;
        };
        if !entry.watching {
            return Watch::Disconnect;
        }
        if !intersecting {
            return Watch::Continue;
        }
        entry.visible = true;
        entry.watching = false;
        Watch::Disconnect
    }

    /// Reveal an entry whose watcher could not be installed.
    pub fn degrade(&mut self, key: RevealKey) {
        if let Some(entry) = self.entry_mut(key) {
            if entry.watching {
                log::debug!("intersection observer unavailable, revealing {key:?}");
            }
            entry.visible = true;
            entry.watching = false;
        }
    }

    pub fn is_visible(&self, key: RevealKey) -> bool {
        self.entry(key).is_some_and(|e| e.visible)
    }

    pub fn is_watching(&self, key: RevealKey) -> bool {
        self.entry(key).is_some_and(|e| e.watching)
    }

    /// Drop the entry for a removed element. Returns false for unknown or stale keys.
    pub fn release(&mut self, key: RevealKey) -> bool {
        let Some(slot) = self.slots.get_mut(key.index) else {
            return false;
        };
        if slot.generation != key.generation || slot.entry.is_none() {
            return false;
        }
        slot.entry = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(key.index);
        self.live -= 1;
        true
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn entry(&self, key: RevealKey) -> Option<&Entry> {
        self.slots
            .get(key.index)
            .filter(|s| s.generation == key.generation)
            .and_then(|s| s.entry.as_ref())
    }

    fn entry_mut(&mut self, key: RevealKey) -> Option<&mut Entry> {
        self.slots
            .get_mut(key.index)
            .filter(|s| s.generation == key.generation)
            .and_then(|s| s.entry.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_intersection_reveals_and_disconnects() {
        let mut arena = RevealArena::new();
        let key = arena.register(ObserverSupport::Available);
        assert!(!arena.is_visible(key));
        assert!(arena.is_watching(key));

        assert_eq!(arena.observe(key, false), Watch::Continue);
        assert!(!arena.is_visible(key));

        assert_eq!(arena.observe(key, true), Watch::Disconnect);
        assert!(arena.is_visible(key));
        assert!(!arena.is_watching(key));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut arena = RevealArena::new();
        let key = arena.register(ObserverSupport::Available);
        arena.observe(key, true);

        // late observations after the watcher fired change nothing
        assert_eq!(arena.observe(key, false), Watch::Disconnect);
        assert_eq!(arena.observe(key, true), Watch::Disconnect);
        assert!(arena.is_visible(key));

        // unrelated elements coming and going leave the entry alone
        let other = arena.register(ObserverSupport::Available);
        arena.release(other);
        let again = arena.register(ObserverSupport::Available);
        arena.observe(again, false);
        assert!(arena.is_visible(key));
    }

    #[test]
    fn test_unavailable_observer_degrades_to_visible() {
        let mut arena = RevealArena::new();
        let key = arena.register(ObserverSupport::Unavailable);
        assert!(arena.is_visible(key));
        assert!(!arena.is_watching(key));

        let pending = arena.register(ObserverSupport::Available);
        arena.degrade(pending);
        assert!(arena.is_visible(pending));
        assert_eq!(arena.observe(pending, false), Watch::Disconnect);
    }

    #[test]
    fn test_release_before_firing() {
        let mut arena = RevealArena::new();
        let key = arena.register(ObserverSupport::Available);
        assert_eq!(arena.len(), 1);

        assert!(arena.release(key));
        assert!(arena.is_empty());
        assert!(!arena.release(key));

        // an observation racing the teardown is dropped
        assert_eq!(arena.observe(key, true), Watch::Disconnect);
        assert!(!arena.is_visible(key));
    }

    #[test]
    fn test_stale_key_does_not_alias_reused_slot() {
        let mut arena = RevealArena::new();
        let old = arena.register(ObserverSupport::Available);
        arena.release(old);

        let new = arena.register(ObserverSupport::Available);
        assert_ne!(old, new);

        arena.observe(old, true);
        assert!(!arena.is_visible(new));
        assert!(arena.is_watching(new));
        assert!(!arena.release(old));
        assert_eq!(arena.len(), 1);
    }
}
