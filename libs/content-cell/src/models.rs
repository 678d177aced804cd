use serde::Serialize;

use shared_models::ui::{Button, Card};
use shared_models::ImageRef;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
    /// "Book Now" renders as a call-to-action button instead of a link.
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationView {
    pub brand: &'static str,
    pub scrolled: bool,
    pub active_path: String,
    pub menu_open: bool,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialtyCard {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: String,
    pub active: bool,
}

/// Mouse position relative to the viewport centre, each axis in [-0.5, 0.5].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Parallax {
    pub x: f64,
    pub y: f64,
}

impl Parallax {
    /// `translate(..)` offset in pixels for a decoration moving `depth` times the pointer.
    pub fn offset(&self, depth: f64) -> (f64, f64) {
        (self.x * depth, self.y * depth)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub title: &'static str,
    pub highlight: &'static str,
    pub subtitle: &'static str,
    pub actions: Vec<Button>,
    pub active_card: usize,
    pub cards: Vec<SpecialtyCard>,
    pub parallax: Parallax,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub services: Vec<Card<ServiceEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub stars: [bool; 5],
    pub image: ImageRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialsView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutView {
    pub anchor: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub features: Vec<Highlight>,
    pub values: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub social: Vec<FooterLink>,
    pub quick_links: Vec<FooterLink>,
    pub services: Vec<FooterLink>,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub copyright: String,
}
