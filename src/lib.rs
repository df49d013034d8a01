pub mod animation;
pub mod components;
pub mod models;
pub mod utils;

pub use components::{HeroSection, HeroSectionProps};
pub use models::{Cta, HeroContent, HeroOverrides, ImageSource};
