//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register the row of a level selector:
//! registry.register_level(1, ClickRegion::new(x, y, width, 1));
//!
//! // A click inside that row later yields Action::OpenListAt(1)
//! ```

use crate::app::ClickRegion;
use crate::events::Action;
use crate::log;

/// Priority used by popups so they capture clicks over underlying content
pub const POPUP_PRIORITY: i32 = 10;

/// A screen area that reacts to clicks and/or the scroll wheel.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Name written to the log when the region handles an event
    pub id: &'static str,
    pub bounds: ClickRegion,
    pub on_click: Option<Action>,
    pub on_scroll_up: Option<Action>,
    pub on_scroll_down: Option<Action>,
    /// Overlapping regions are checked highest first
    pub priority: i32,
}

impl InteractiveRegion {
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Mouse targets of the current frame. Cleared and refilled on every render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    pub fn register_scroll(
        &mut self,
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) {
        self.register(InteractiveRegion::scrollable(id, bounds, scroll_up, scroll_down));
    }

    /// Register the row of a level selector
    pub fn register_level(&mut self, level_idx: usize, bounds: ClickRegion) {
        self.register_click("level_selector", bounds, Action::OpenListAt(level_idx));
    }

    /// Register one entry of the open option list (above everything else)
    pub fn register_list_entry(&mut self, entry_idx: usize, bounds: ClickRegion) {
        self.register(
            InteractiveRegion::clickable("list_entry", bounds, Action::ListSelect(entry_idx))
                .with_priority(POPUP_PRIORITY),
        );
    }

    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.route("click", x, y, |r| r.on_click.as_ref())
    }

    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.route("scroll up", x, y, |r| r.on_scroll_up.as_ref())
    }

    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.route("scroll down", x, y, |r| r.on_scroll_down.as_ref())
    }

    /// Action of the highest-priority region under (x, y) that handles
    /// this kind of event. Equal priorities go to the first registered.
    fn route(
        &self,
        kind: &str,
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<&Action>,
    ) -> Action {
        let mut best: Option<(&InteractiveRegion, &Action)> = None;
        for region in self.regions.iter().filter(|r| r.contains(x, y)) {
            let Some(action) = handler(region) else {
                continue;
            };
            if best.is_none_or(|(b, _)| region.priority > b.priority) {
                best = Some((region, action));
            }
        }

        match best {
            Some((region, action)) => {
                log::log(&format!("{} at ({}, {}) -> {}: {:?}", kind, x, y, region.id, action));
                action.clone()
            }
            None => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_list_entries_win_over_background() {
        let mut registry = InteractionRegistry::new();

        registry.register_click("backdrop", ClickRegion::new(0, 0, 100, 100), Action::CloseList);
        registry.register_level(0, ClickRegion::new(0, 1, 40, 1));
        registry.register_list_entry(2, ClickRegion::new(10, 1, 20, 1));

        // Entry overlaps the level row: the popup entry wins
        assert_eq!(registry.handle_click(15, 1), Action::ListSelect(2));

        // Elsewhere the first registered match applies
        assert_eq!(registry.handle_click(50, 50), Action::CloseList);
    }

    #[test]
    fn test_scroll_prefers_higher_priority_region() {
        let mut registry = InteractionRegistry::new();
        registry.register_scroll(
            "page",
            ClickRegion::new(0, 0, 80, 24),
            Action::FocusPrev,
            Action::FocusNext,
        );
        registry.register(
            InteractiveRegion::scrollable(
                "option_list",
                ClickRegion::new(2, 5, 30, 6),
                Action::ListUp,
                Action::ListDown,
            )
            .with_priority(POPUP_PRIORITY),
        );
        // Click-only regions never answer scrolls
        registry.register_list_entry(0, ClickRegion::new(3, 6, 28, 1));

        assert_eq!(registry.handle_scroll_down(4, 6), Action::ListDown);
        assert_eq!(registry.handle_scroll_down(60, 20), Action::FocusNext);
        assert_eq!(registry.handle_click(60, 20), Action::None);
    }

    #[test]
    fn test_scroll_without_region_is_none() {
        let mut registry = InteractionRegistry::new();
        registry.register_scroll(
            "option_list",
            ClickRegion::new(0, 0, 10, 5),
            Action::ListUp,
            Action::ListDown,
        );

        assert_eq!(registry.handle_scroll_up(2, 2), Action::ListUp);
        assert_eq!(registry.handle_scroll_down(20, 20), Action::None);

        registry.clear();
        assert_eq!(registry.handle_scroll_up(2, 2), Action::None);
    }
}
