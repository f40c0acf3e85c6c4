//! Per-contact bookkeeping for drag gestures.
//!
//! Each active contact keeps the sample it started with and the most recent
//! sample seen. Moves report the delta since the previous sample, ends report
//! the total displacement since the start.

use super::types::{GestureSummary, PointSample, PointerDelta, PointerId};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
struct TrackedContact {
    start: PointSample,
    current: PointSample,
}

/// Multi-contact pointer tracker keyed by [`PointerId`].
///
/// Events for ids that were never started (or already ended) are ignored.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    contacts: SmallVec<[TrackedContact; 4]>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sample` as both the start and current point of its contact.
    pub fn on_start(&mut self, sample: PointSample) {
        let contact = TrackedContact {
            start: sample,
            current: sample,
        };
        match self.position(sample.id) {
            Some(index) => self.contacts[index] = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Returns the movement since the previous sample of the same contact.
    pub fn on_move(&mut self, sample: PointSample) -> Option<PointerDelta> {
        let Some(index) = self.position(sample.id) else {
            log::trace!("ignoring move for untracked pointer {}", sample.id);
            return None;
        };
        let contact = &mut self.contacts[index];
        let delta = PointerDelta {
            dx: sample.x - contact.current.x,
            dy: sample.y - contact.current.y,
        };
        contact.current = sample;
        Some(delta)
    }

    /// Movement `sample` would report, without recording it.
    ///
    /// Hosts that filter moves use this so a rejected sample's travel is
    /// carried into the next accepted one.
    pub fn peek_move(&self, sample: &PointSample) -> Option<PointerDelta> {
        let index = self.position(sample.id)?;
        let current = self.contacts[index].current;
        Some(PointerDelta {
            dx: sample.x - current.x,
            dy: sample.y - current.y,
        })
    }

    /// Finishes a contact, returning its displacement and duration.
    pub fn on_end(&mut self, sample: PointSample) -> Option<GestureSummary> {
        let Some(index) = self.position(sample.id) else {
            log::trace!("ignoring end for untracked pointer {}", sample.id);
            return None;
        };
        let contact = self.contacts.remove(index);
        Some(GestureSummary {
            dx: sample.x - contact.start.x,
            dy: sample.y - contact.start.y,
            elapsed_ms: sample.t - contact.start.t,
        })
    }

    /// Cancelled contacts finish the same way as lifted ones.
    pub fn on_cancel(&mut self, sample: PointSample) -> Option<GestureSummary> {
        self.on_end(sample)
    }

    pub fn is_tracking(&self, id: PointerId) -> bool {
        self.position(id).is_some()
    }

    pub fn active_contacts(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_idle(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    fn position(&self, id: PointerId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.start.id == id)
    }
}
