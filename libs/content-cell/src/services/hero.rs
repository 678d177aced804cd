use std::time::Duration;

use tokio::time::Instant;

use shared_models::ui::{Button, ButtonSize, ButtonVariant};

use crate::events::{PageEvent, PageEventBus, Subscription};
use crate::models::{HeroView, Parallax, SpecialtyCard};

pub const CARD_INTERVAL: Duration = Duration::from_secs(3);

const SPECIALTIES: [(&str, &str); 5] = [
    ("Cardiology", "❤️"),
    ("Neurology", "🧠"),
    ("Orthopedics", "🦴"),
    ("Pediatrics", "👶"),
    ("Dermatology", "🧬"),
];

#[derive(Debug)]
pub struct Hero {
    mounted_at: Instant,
    parallax: Parallax,
    subscription: Option<Subscription>,
}

impl Hero {
    pub fn mount(bus: &PageEventBus) -> Self {
        Self {
            mounted_at: Instant::now(),
            parallax: Parallax::default(),
            subscription: Some(bus.subscribe()),
        }
    }

    pub fn unmount(&mut self) {
        self.subscription = None;
    }

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
        if let PageEvent::MouseMove {
            client_x,
            client_y,
            viewport_width,
            viewport_height,
        } = *event
        {
            self.parallax = Parallax {
                x: normalize(client_x, viewport_width),
                y: normalize(client_y, viewport_height),
            };
        }
    }

    pub fn parallax(&self) -> Parallax {
        self.parallax
    }

    /// Index of the showcased specialty, advancing every [`CARD_INTERVAL`].
    pub fn active_card(&self) -> usize {
        let ticks = self.mounted_at.elapsed().as_millis() / CARD_INTERVAL.as_millis();
        (ticks % SPECIALTIES.len() as u128) as usize
    }

    pub fn view(&self) -> HeroView {
        let active = self.active_card();
        HeroView {
            title: "Your Health,",
            highlight: "Our Priority",
            subtitle: "Find and book appointments with top doctors across multiple hospitals in your area. Quality healthcare is just a click away.",
            actions: vec![
                Button::new("Find a Doctor").size(ButtonSize::Lg).action("#doctors"),
                Button::new("Explore Hospitals")
                    .variant(ButtonVariant::Outline)
                    .size(ButtonSize::Lg)
                    .action("#hospitals"),
            ],
            active_card: active,
            cards: SPECIALTIES
                .iter()
                .enumerate()
                .map(|(i, &(name, icon))| SpecialtyCard {
                    name,
                    icon,
                    description: format!(
                        "Connect with top {} specialists in your area for expert care and treatment.",
                        name.to_lowercase()
                    ),
                    active: i == active,
                })
                .collect(),
            parallax: self.parallax,
        }
    }
}

/// Maps a pointer coordinate to [-0.5, 0.5]; a zero-sized viewport counts as centred.
fn normalize(position: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (position / extent - 0.5).clamp(-0.5, 0.5)
}
