//! Bookkeeping for scroll-triggered reveal animations.
//!
//! Each tracked section starts hidden and observed. The first time it
//! intersects the viewport it becomes visible and is no longer observed.
//! Visibility never goes back to hidden.

/// Outcome of feeding one intersection record into the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealChange {
    /// Section just became visible; the caller adds the class and unobserves it.
    Revealed,
    /// Nothing to do (not intersecting, or already visible).
    Unchanged,
    /// Tracker is torn down or the index is unknown.
    Ignored,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Slot {
    visible: bool,
    observed: bool,
}

/// Reveal state for a fixed set of sections, addressed by index.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    slots: Vec<Slot>,
    attached: bool,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![
                Slot {
                    visible: false,
                    observed: true,
                };
                count
            ],
            attached: true,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.visible)
    }

    /// Indices of sections still waiting to be revealed.
    pub fn observed(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.observed)
            .map(|(i, _)| i)
            .collect()
    }

    /// Record an intersection observer entry for section `index`.
    pub fn record(&mut self, index: usize, is_intersecting: bool) -> RevealChange {
        if !self.attached {
            return RevealChange::Ignored;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            return RevealChange::Ignored;
        };
        if !is_intersecting || slot.visible {
            return RevealChange::Unchanged;
        }
        slot.visible = true;
        slot.observed = false;
        RevealChange::Revealed
    }

    /// Detach the tracker and return every index that still needs to be
    /// unobserved. Subsequent records are ignored.
    pub fn teardown(&mut self) -> Vec<usize> {
        let pending = if self.attached {
            self.observed()
        } else {
            Vec::new()
        };
        for slot in &mut self.slots {
            slot.observed = false;
        }
        self.attached = false;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_observes_everything() {
        let tracker = RevealTracker::new(3);
        assert_eq!(tracker.observed(), vec![0, 1, 2]);
        assert!((0..3).all(|i| !tracker.is_visible(i)));
    }

    #[test]
    fn test_intersection_reveals_once() {
        let mut tracker = RevealTracker::new(2);

        assert_eq!(tracker.record(1, true), RevealChange::Revealed);
        assert!(tracker.is_visible(1));
        assert!(!tracker.observed().contains(&1));

        assert_eq!(tracker.record(1, true), RevealChange::Unchanged);
        assert_eq!(tracker.observed(), vec![0]);
    }

    #[test]
    fn test_leaving_viewport_does_not_hide() {
        let mut tracker = RevealTracker::new(1);
        tracker.record(0, true);

        assert_eq!(tracker.record(0, false), RevealChange::Unchanged);
        assert!(tracker.is_visible(0));
    }

    #[test]
    fn test_non_intersecting_entry_keeps_hidden() {
        let mut tracker = RevealTracker::new(1);
        assert_eq!(tracker.record(0, false), RevealChange::Unchanged);
        assert!(!tracker.is_visible(0));
        assert_eq!(tracker.observed(), vec![0]);
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert_eq!(tracker.record(7, true), RevealChange::Ignored);
    }

    #[test]
    fn test_teardown_returns_pending_and_stops_reveals() {
        let mut tracker = RevealTracker::new(4);
        tracker.record(2, true);

        let pending = tracker.teardown();

        assert_eq!(pending, vec![0, 1, 3]);
        assert!(tracker.observed().is_empty());
        assert_eq!(tracker.record(0, true), RevealChange::Ignored);
        assert!(!tracker.is_visible(0));
    }

    #[test]
    fn test_second_teardown_is_empty() {
        let mut tracker = RevealTracker::new(2);
        tracker.teardown();
        assert!(tracker.teardown().is_empty());
    }
}
