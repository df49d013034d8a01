pub mod hero;
mod motion_link;
mod feature_row;
mod media_card;

pub use hero::{HeroSection, HeroSectionProps};
