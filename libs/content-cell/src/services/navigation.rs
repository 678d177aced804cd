use crate::events::{PageEvent, PageEventBus, Subscription};
use crate::models::{NavItem, NavigationView};

pub const BRAND: &str = "MedConnect";

/// Scroll offset past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("Home", "#", "home"),
    ("Hospitals", "#hospitals", "stethoscope"),
    ("Doctors & Specialists", "#doctors", "user-round"),
    ("About Us", "#about", "info"),
    ("Book Now", "#book", "calendar"),
];

#[derive(Debug)]
pub struct Navigation {
    scrolled: bool,
    active_path: String,
    menu_open: bool,
    subscription: Option<Subscription>,
}

impl Navigation {
    /// Subscribes to `bus` and starts at `hash` (empty means home).
    pub fn mount(bus: &PageEventBus, hash: &str) -> Self {
        Self {
            scrolled: false,
            active_path: normalize_hash(hash),
            menu_open: false,
            subscription: Some(bus.subscribe()),
        }
    }

    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Applies every page event received since the last call.
    pub fn sync(&mut self) {
        let events = match self.subscription.as_mut() {
            Some(subscription) => subscription.drain(),
            None => return,
        };
        for event in &events {
            self.apply(event);
        }
    }

    pub fn apply(&mut self, event: &PageEvent) {
        match event {
            PageEvent::Scroll { y } => self.scrolled = *y > SCROLL_THRESHOLD,
            PageEvent::HashChange { hash } => self.active_path = normalize_hash(hash),
            PageEvent::MouseMove { .. } => {}
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Following a link from the mobile menu closes it.
    pub fn follow_link(&mut self) {
        self.menu_open = false;
    }

    pub fn view(&self) -> NavigationView {
        NavigationView {
            brand: BRAND,
            scrolled: self.scrolled,
            active_path: self.active_path.clone(),
            menu_open: self.menu_open,
            items: NAV_ITEMS
                .iter()
                .map(|&(name, href, icon)| NavItem {
                    name,
                    href,
                    icon,
                    active: self.active_path == href,
                    highlighted: href == "#book",
                })
                .collect(),
        }
    }
}

fn normalize_hash(hash: &str) -> String {
    if hash.is_empty() {
        "#".to_string()
    } else {
        hash.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_exclusive() {
        let bus = PageEventBus::new();
        let mut nav = Navigation::mount(&bus, "");

        nav.apply(&PageEvent::Scroll { y: 10.0 });
        assert!(!nav.view().scrolled);
        nav.apply(&PageEvent::Scroll { y: 10.5 });
        assert!(nav.view().scrolled);
    }

    #[test]
    fn empty_hash_means_home() {
        let bus = PageEventBus::new();
        let nav = Navigation::mount(&bus, "");

        let view = nav.view();
        assert_eq!(view.active_path, "#");
        assert!(view.items[0].active);
        assert!(view.items[4].highlighted);
    }
}
