//! Scroll-driven entrance animations.
//!
//! A [`ScrollTrigger`] turns scroll positions into [`TriggerEvent`]s, an
//! [`Entrance`] turns events into play/reverse commands on its clock, and
//! the [`TriggerRegistry`] ties the two together for every element that is
//! currently on the page. Elements register through a [`TriggerHandle`];
//! dropping the handle removes the trigger.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::ease::Ease;
use super::tween::Tween;

/// Viewport crossings, named after the scroll direction that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Scrolling down past the start line.
    Enter,
    /// Scrolling down past the end line.
    Leave,
    /// Scrolling up back over the end line.
    EnterBack,
    /// Scrolling up back over the start line.
    LeaveBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Reverse,
    None,
}

/// What to do on each of the four events, in `enter leave enterBack
/// leaveBack` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    /// `play none none reverse`
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::Reverse,
        }
    }
}

impl ToggleActions {
    fn action(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceState {
    Unplayed,
    Played,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntranceMode {
    /// Reverses when scrolled back above the start line.
    #[default]
    Toggle,
    /// Plays once and stays.
    Once,
}

/// Two-state entrance animation of one page element.
#[derive(Debug, Clone)]
pub struct Entrance {
    state: EntranceState,
    actions: ToggleActions,
    clock: Tween,
}

impl Entrance {
    /// `duration` is the full length of the element's choreography; children
    /// derive their own progress from [`elapsed`](Self::elapsed).
    pub fn new(mode: EntranceMode, duration: f32) -> Self {
        let mut actions = ToggleActions::default();
        if mode == EntranceMode::Once {
            actions.on_leave_back = ToggleAction::None;
        }
        Self {
            state: EntranceState::Unplayed,
            actions,
            clock: Tween::new(duration, Ease::Linear),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn state(&self) -> EntranceState {
        self.state
    }

    /// Applies `event`; returns whether the state changed.
    pub fn handle(&mut self, event: TriggerEvent) -> bool {
        match (self.state, self.actions.action(event)) {
            (EntranceState::Unplayed, ToggleAction::Play) => {
                self.clock.play();
                self.state = EntranceState::Played;
                true
            }
            (EntranceState::Played, ToggleAction::Reverse) => {
                self.clock.reverse();
                self.state = EntranceState::Unplayed;
                true
            }
            _ => false,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.clock.tick(dt);
    }

    /// Seconds into the choreography (runs backwards while reversing).
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Overall linear progress 0..1.
    #[cfg(test)]
    pub fn progress(&self) -> f32 {
        self.clock.linear_progress()
    }
}

/// Start line: element top at 80% of the viewport height.
pub const START_FRACTION: f32 = 0.8;
/// End line: element bottom at 20% of the viewport height.
pub const END_FRACTION: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

/// Crossing detector for one element.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    top: f32,
    height: f32,
    zone: Zone,
}

impl ScrollTrigger {
    /// Element spanning document rows `top..top + height`.
    pub fn new(top: u16, height: u16) -> Self {
        Self {
            top: top as f32,
            height: height as f32,
            zone: Zone::Before,
        }
    }

    /// Moves the element (layout change) without firing anything.
    pub fn set_bounds(&mut self, top: u16, height: u16) {
        self.top = top as f32;
        self.height = height as f32;
    }

    fn zone_at(&self, scroll_y: f32, viewport_h: f32) -> Zone {
        let start = self.top - START_FRACTION * viewport_h;
        let end = self.top + self.height - END_FRACTION * viewport_h;
        if scroll_y < start {
            Zone::Before
        } else if scroll_y > end {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// Events caused by moving to `scroll_y`, in the order they happened.
    pub fn update(&mut self, scroll_y: u16, viewport_h: u16) -> Vec<TriggerEvent> {
        let next = self.zone_at(scroll_y as f32, viewport_h as f32);
        let events = match (self.zone, next) {
            (Zone::Before, Zone::Active) => vec![TriggerEvent::Enter],
            (Zone::Before, Zone::After) => vec![TriggerEvent::Enter, TriggerEvent::Leave],
            (Zone::Active, Zone::After) => vec![TriggerEvent::Leave],
            (Zone::After, Zone::Active) => vec![TriggerEvent::EnterBack],
            (Zone::After, Zone::Before) => vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack],
            (Zone::Active, Zone::Before) => vec![TriggerEvent::LeaveBack],
            _ => Vec::new(),
        };
        self.zone = next;
        events
    }
}

struct Registered {
    trigger: ScrollTrigger,
    entrance: Entrance,
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    entries: BTreeMap<u64, Registered>,
}

#[derive(Default)]
struct Shared {
    inner: RefCell<RegistryInner>,
    /// Ids of handles dropped while `inner` was borrowed.
    pending_removals: Cell<Vec<u64>>,
}

impl Shared {
    fn drain_removals(&self, inner: &mut RegistryInner) {
        for id in self.pending_removals.take() {
            inner.entries.remove(&id);
            tracing::trace!(id, "deferred scroll trigger removed");
        }
    }
}

/// All live scroll triggers on the page.
#[derive(Clone, Default)]
pub struct TriggerRegistry {
    shared: Rc<Shared>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, trigger: ScrollTrigger, entrance: Entrance) -> TriggerHandle {
        let mut inner = self.shared.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.insert(id, Registered { trigger, entrance });
        tracing::trace!(id, "scroll trigger registered");
        TriggerHandle {
            id,
            registry: Rc::downgrade(&self.shared),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.shared.inner.borrow().entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feeds the new scroll position to every trigger.
    pub fn update(&self, scroll_y: u16, viewport_h: u16) {
        let mut inner = self.shared.inner.borrow_mut();
        self.shared.drain_removals(&mut inner);
        for entry in inner.entries.values_mut() {
            for event in entry.trigger.update(scroll_y, viewport_h) {
                entry.entrance.handle(event);
            }
        }
    }

    pub fn tick(&self, dt: f32) {
        let mut inner = self.shared.inner.borrow_mut();
        self.shared.drain_removals(&mut inner);
        for entry in inner.entries.values_mut() {
            entry.entrance.tick(dt);
        }
    }
}

/// Registration of one element; deregisters on drop.
pub struct TriggerHandle {
    id: u64,
    registry: Weak<Shared>,
}

impl TriggerHandle {
    fn with_entry<T>(&self, f: impl FnOnce(&mut Registered) -> T) -> Option<T> {
        let shared = self.registry.upgrade()?;
        let mut inner = shared.inner.borrow_mut();
        inner.entries.get_mut(&self.id).map(f)
    }

    pub fn set_bounds(&self, top: u16, height: u16) {
        self.with_entry(|e| e.trigger.set_bounds(top, height));
    }

    /// Entrance clock in seconds; 0 once the registry is gone.
    pub fn elapsed(&self) -> f32 {
        self.with_entry(|e| e.entrance.elapsed()).unwrap_or(0.0)
    }

    #[cfg(test)]
    pub fn progress(&self) -> f32 {
        self.with_entry(|e| e.entrance.progress()).unwrap_or(0.0)
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<EntranceState> {
        self.with_entry(|e| e.entrance.state())
    }
}

impl Drop for TriggerHandle {
    fn drop(&mut self) {
        let Some(shared) = self.registry.upgrade() else {
            return;
        };
        // A handle may be dropped while the registry is iterating
        match shared.inner.try_borrow_mut() {
            Ok(mut inner) => {
                inner.entries.remove(&self.id);
                tracing::trace!(id = self.id, "scroll trigger removed");
            }
            Err(_) => {
                let mut pending = shared.pending_removals.take();
                pending.push(self.id);
                shared.pending_removals.set(pending);
                tracing::trace!(id = self.id, "scroll trigger removal deferred");
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_plays_once() {
        let mut e = Entrance::new(EntranceMode::Toggle, 1.0);
        assert_eq!(e.state(), EntranceState::Unplayed);
        assert!(e.handle(TriggerEvent::Enter));
        assert_eq!(e.state(), EntranceState::Played);
        e.tick(0.4);
        // Entering again must not restart the clock
        assert!(!e.handle(TriggerEvent::Enter));
        assert!((e.elapsed() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_leave_back_reverses() {
        let mut e = Entrance::new(EntranceMode::Toggle, 1.0);
        e.handle(TriggerEvent::Enter);
        e.tick(1.0);
        assert_eq!(e.progress(), 1.0);
        assert!(e.handle(TriggerEvent::LeaveBack));
        assert_eq!(e.state(), EntranceState::Unplayed);
        e.tick(1.0);
        assert_eq!(e.progress(), 0.0);
        // And can play again afterwards
        assert!(e.handle(TriggerEvent::Enter));
    }

    #[test]
    fn test_leave_and_enter_back_are_noops() {
        let mut e = Entrance::new(EntranceMode::Toggle, 1.0);
        assert!(!e.handle(TriggerEvent::Leave));
        assert!(!e.handle(TriggerEvent::EnterBack));
        assert!(!e.handle(TriggerEvent::LeaveBack));
        assert_eq!(e.state(), EntranceState::Unplayed);

        e.handle(TriggerEvent::Enter);
        assert!(!e.handle(TriggerEvent::Leave));
        assert!(!e.handle(TriggerEvent::EnterBack));
        assert_eq!(e.state(), EntranceState::Played);
    }

    #[test]
    fn test_once_never_reverses() {
        let mut e = Entrance::new(EntranceMode::Once, 1.0);
        e.handle(TriggerEvent::Enter);
        e.tick(1.0);
        assert!(!e.handle(TriggerEvent::LeaveBack));
        assert_eq!(e.state(), EntranceState::Played);
        assert_eq!(e.progress(), 1.0);
    }

    #[test]
    fn test_scroll_trigger_geometry() {
        // Element at rows 100..140 in a 50-row viewport:
        // start at scroll 60, end at scroll 130
        let mut t = ScrollTrigger::new(100, 40);
        assert!(t.update(0, 50).is_empty());
        assert!(t.update(59, 50).is_empty());
        assert_eq!(t.update(61, 50), vec![TriggerEvent::Enter]);
        assert!(t.update(100, 50).is_empty());
        assert_eq!(t.update(131, 50), vec![TriggerEvent::Leave]);
        assert_eq!(t.update(120, 50), vec![TriggerEvent::EnterBack]);
        assert_eq!(t.update(10, 50), vec![TriggerEvent::LeaveBack]);
    }

    #[test]
    fn test_scroll_trigger_jumps_emit_both_events() {
        let mut t = ScrollTrigger::new(100, 40);
        assert_eq!(t.update(500, 50), vec![TriggerEvent::Enter, TriggerEvent::Leave]);
        assert_eq!(t.update(0, 50), vec![TriggerEvent::EnterBack, TriggerEvent::LeaveBack]);
    }

    #[test]
    fn test_element_in_first_screen_enters_immediately() {
        let mut t = ScrollTrigger::new(10, 20);
        assert_eq!(t.update(0, 50), vec![TriggerEvent::Enter]);
    }

    #[test]
    fn test_registry_dispatches_to_entrances() {
        let registry = TriggerRegistry::new();
        let handle = registry.register(
            ScrollTrigger::new(100, 40),
            Entrance::new(EntranceMode::Toggle, 1.0),
        );
        registry.update(0, 50);
        assert_eq!(handle.state(), Some(EntranceState::Unplayed));
        registry.update(80, 50);
        assert_eq!(handle.state(), Some(EntranceState::Played));
        registry.tick(0.5);
        assert!((handle.progress() - 0.5).abs() < 1e-6);
        registry.update(0, 50);
        assert_eq!(handle.state(), Some(EntranceState::Unplayed));
    }

    #[test]
    fn test_dropping_handle_deregisters() {
        let registry = TriggerRegistry::new();
        let a = registry.register(ScrollTrigger::new(0, 10), Entrance::new(EntranceMode::Once, 1.0));
        let b = registry.register(ScrollTrigger::new(50, 10), Entrance::new(EntranceMode::Once, 1.0));
        assert_eq!(registry.len(), 2);
        drop(a);
        assert_eq!(registry.len(), 1);
        drop(b);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_handle_dropped_during_borrow_is_removed_later() {
        let registry = TriggerRegistry::new();
        let handle = registry.register(ScrollTrigger::new(0, 10), Entrance::new(EntranceMode::Once, 1.0));
        let keep = registry.register(ScrollTrigger::new(50, 10), Entrance::new(EntranceMode::Once, 1.0));
        {
            let _busy = registry.shared.inner.borrow_mut();
            drop(handle);
        }
        assert_eq!(registry.len(), 2);

        registry.tick(0.1);
        assert_eq!(registry.len(), 1);
        assert_eq!(keep.state(), Some(EntranceState::Unplayed));

        // drained ids are not removed twice
        registry.update(0, 50);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_handle_outliving_registry() {
        let registry = TriggerRegistry::new();
        let handle = registry.register(ScrollTrigger::new(0, 10), Entrance::new(EntranceMode::Once, 1.0));
        drop(registry);
        assert_eq!(handle.state(), None);
        assert_eq!(handle.elapsed(), 0.0);
    }
}
