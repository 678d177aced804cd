//! Static page copy: services, testimonials, about and footer.

use chrono::{Datelike, Utc};

use shared_models::ui::Card;
use shared_models::{ImageRef, PORTRAIT_PLACEHOLDER};

use crate::models::{
    AboutView, FooterLink, FooterView, Highlight, ServiceEntry, ServicesView, Testimonial,
    TestimonialsView,
};
use crate::services::navigation::BRAND;

const SERVICES: [(&str, &str, &str); 8] = [
    ("calendar-clock", "Online Appointment", "Book appointments with top doctors instantly without waiting on phone calls."),
    ("stethoscope", "Expert Doctors", "Connect with experienced specialists across all medical fields."),
    ("building-2", "Multiple Hospitals", "Access healthcare services from various partner hospitals in your area."),
    ("file-clock", "Medical History", "Securely store and access your medical records all in one place."),
    ("clipboard-check", "Lab Results", "View and download your lab test results directly from your account."),
    ("heart-pulse", "Health Monitoring", "Track your health metrics and receive personalized recommendations."),
    ("book-open", "Health Library", "Access educational resources on various health topics and conditions."),
    ("badge-help", "24/7 Support", "Get assistance from our dedicated customer support team anytime."),
];

const TESTIMONIALS: [(&str, &str, &str, u8, &str); 4] = [
    (
        "Sarah Johnson",
        "Patient",
        "MedConnect made it so easy to find the right specialist for my condition. The booking process was simple, and I received excellent care.",
        5,
        "https://randomuser.me/api/portraits/women/44.jpg",
    ),
    (
        "Michael Brown",
        "Regular Patient",
        "I've been using MedConnect for all my family's healthcare needs. The platform is intuitive, and we always get appointments quickly.",
        4,
        "https://randomuser.me/api/portraits/men/32.jpg",
    ),
    (
        "Emily Davis",
        "New Patient",
        "As someone new to the area, MedConnect helped me find the best hospitals and doctors near me. Highly recommended!",
        5,
        "https://randomuser.me/api/portraits/women/67.jpg",
    ),
    (
        "Robert Wilson",
        "Patient",
        "The convenience of booking appointments online and the quality of care I received exceeded my expectations.",
        4,
        "https://randomuser.me/api/portraits/men/52.jpg",
    ),
];

pub const CONTACT_ADDRESS: &str = "123 Healthcare Avenue, Medical District, 12345";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_EMAIL: &str = "contact@medconnect.com";

pub fn services() -> ServicesView {
    ServicesView {
        title: "Our Services",
        subtitle: "We provide comprehensive healthcare services to meet all your medical needs.",
        services: SERVICES
            .iter()
            .map(|&(icon, title, description)| Card::new(ServiceEntry { icon, title, description }))
            .collect(),
    }
}

/// First `rating` of five stars are filled. Ratings are clamped to 1..=5.
pub fn stars(rating: u8) -> [bool; 5] {
    let rating = rating.clamp(1, 5) as usize;
    std::array::from_fn(|i| i < rating)
}

pub fn testimonials() -> TestimonialsView {
    TestimonialsView {
        title: "What Our Patients Say",
        subtitle: "Read about the experiences of our patients and how MedConnect has helped them access quality healthcare.",
        testimonials: TESTIMONIALS
            .iter()
            .map(|&(name, role, content, rating, image)| Testimonial {
                name,
                role,
                content,
                rating,
                stars: stars(rating),
                image: ImageRef::new(image, PORTRAIT_PLACEHOLDER),
            })
            .collect(),
    }
}

pub fn about() -> AboutView {
    let highlight = |title, description| Highlight { title, description };
    AboutView {
        anchor: "about",
        title: "About MedConnect",
        subtitle: "Connecting patients with quality healthcare providers for a better medical experience.",
        heading: "Your Gateway to Quality Healthcare",
        body: "MedConnect is a state-of-the-art platform designed to bridge the gap between patients and healthcare providers. We understand that finding the right doctor at the right hospital can be challenging, which is why we've created a comprehensive solution that makes healthcare accessible to everyone.",
        features: vec![
            highlight("Extensive Network", "Access to hundreds of doctors across multiple hospitals and specialties."),
            highlight("Simple Booking Process", "Book appointments with just a few clicks, no phone calls required."),
            highlight("Verified Reviews", "Read authentic patient reviews to make informed decisions."),
            highlight("Smart Recommendations", "Get personalized doctor recommendations based on your health needs."),
        ],
        values: vec![
            highlight("Patient-Centered", "Your health and comfort are our top priorities."),
            highlight("Quality Care", "Partner with only the best healthcare providers."),
            highlight("Accessibility", "Making healthcare accessible to everyone."),
            highlight("Expert Doctors", "Connect with experienced specialists in every field."),
        ],
    }
}

pub fn footer() -> FooterView {
    let link = |label, href| FooterLink { label, href };
    FooterView {
        brand: BRAND,
        tagline: "Connecting patients with the best healthcare providers across multiple hospitals for quality care and convenient booking.",
        social: vec![
            link("Facebook", "#"),
            link("Twitter", "#"),
            link("Instagram", "#"),
            link("LinkedIn", "#"),
        ],
        quick_links: vec![
            link("Home", "#"),
            link("Hospitals", "#hospitals"),
            link("Doctors & Specialists", "#doctors"),
            link("About Us", "#about"),
            link("Book Appointment", "#book"),
        ],
        services: vec![
            link("Find a Doctor", "#"),
            link("Hospital Comparison", "#"),
            link("Online Appointment", "#"),
            link("Medical Records", "#"),
            link("Health Tips", "#"),
        ],
        address: CONTACT_ADDRESS,
        phone: CONTACT_PHONE,
        email: CONTACT_EMAIL,
        copyright: format!("© {} {}. All rights reserved.", Utc::now().year(), BRAND),
    }
}
