//! Records scroller callbacks for later assertions.

use elastic_scroll::{Axis, BounceResume, BounceStatus, ScrollerOptions};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CallbackEvent {
    Scroll { offset: f32, axis: Axis },
    Bounce { offset: f32, status: BounceStatus },
}

/// Shared recorder installed into [`ScrollerOptions`].
///
/// Clones share the same history, so a test keeps one clone and hands the
/// other to the scroller.
#[derive(Clone, Default)]
pub struct CallbackLog {
    events: Rc<RefCell<Vec<CallbackEvent>>>,
    handles: Rc<RefCell<Vec<BounceResume>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs recording callbacks. Bounces are held until a test resumes
    /// their handle.
    pub fn attach(&self, options: ScrollerOptions) -> ScrollerOptions {
        self.attach_responding(options, |_, _, _| {})
    }

    /// Records scrolls only, leaving bounces to retract on their own.
    pub fn attach_scroll_only(&self, options: ScrollerOptions) -> ScrollerOptions {
        let events = Rc::clone(&self.events);
        options.on_scroll(move |offset, axis| {
            events
                .borrow_mut()
                .push(CallbackEvent::Scroll { offset, axis });
        })
    }

    /// Records every callback and lets `respond` act on each bounce handle.
    pub fn attach_responding(
        &self,
        options: ScrollerOptions,
        respond: impl Fn(f32, &BounceResume, BounceStatus) + 'static,
    ) -> ScrollerOptions {
        let events = Rc::clone(&self.events);
        let handles = Rc::clone(&self.handles);
        self.attach_scroll_only(options)
            .on_bounce(move |offset, resume, status| {
                events
                    .borrow_mut()
                    .push(CallbackEvent::Bounce { offset, status });
                respond(offset, &resume, status);
                handles.borrow_mut().push(resume);
            })
    }

    pub fn events(&self) -> Vec<CallbackEvent> {
        self.events.borrow().clone()
    }

    /// Offsets reported by `on_scroll` for `axis`, in order.
    pub fn scrolls(&self, axis: Axis) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                CallbackEvent::Scroll {
                    offset,
                    axis: scrolled,
                } if scrolled == axis => Some(offset),
                _ => None,
            })
            .collect()
    }

    pub fn bounces(&self) -> Vec<(f32, BounceStatus)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                CallbackEvent::Bounce { offset, status } => Some((offset, status)),
                _ => None,
            })
            .collect()
    }

    /// Most recent bounce handle for `axis`.
    pub fn last_handle(&self, axis: Axis) -> Option<BounceResume> {
        self.handles
            .borrow()
            .iter()
            .rev()
            .find(|handle| handle.axis() == axis)
            .cloned()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        self.handles.borrow_mut().clear();
    }
}
