use yew::prelude::*;
use log::debug;
use crate::animation::{fade_up, CONTAINER_REVEAL};
use super::feature_row::FeatureRow;
use super::media_card::MediaCard;
use super::motion_link::MotionLink;
use crate::models::{Cta, HeroContent, HeroOverrides, ImageSource, EYEBROW};
use crate::utils::{after_next_paint, prefers_reduced_motion};

#[derive(Properties, PartialEq, Default)]
pub struct HeroSectionProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_default]
    pub cta_primary: Option<Cta>,
    #[prop_or_default]
    pub cta_secondary: Option<Cta>,
    #[prop_or_default]
    pub image_src: Option<ImageSource>,
    /// Lower-priority values, usually from the bundled content config.
    #[prop_or_default]
    pub overrides: HeroOverrides,
}

impl HeroSectionProps {
    pub fn content(&self) -> HeroContent {
        HeroOverrides {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            cta_primary: self.cta_primary.clone(),
            cta_secondary: self.cta_secondary.clone(),
            image_src: self.image_src.clone(),
        }
        .or(self.overrides.clone())
        .resolve()
    }
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let content = props.content();
    let reduced_motion = *use_memo((), |_| prefers_reduced_motion());
    let revealed = use_state(|| false);

    // Mount hidden, flip to revealed once the hidden pose has been styled.
    // Unmount drops the pending frames.
    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let frame = after_next_paint(move || {
                debug!("hero revealed (reduced motion: {})", reduced_motion);
                revealed.set(true);
            });
            move || drop(frame)
        });
    }

    let revealed = *revealed;
    let staggered = |i: usize| fade_up(i).style(revealed, reduced_motion);

    html! {
        <section class="hero">
            <div class="hero-blob hero-blob-left" aria-hidden="true"></div>
            <div class="hero-blob hero-blob-right" aria-hidden="true"></div>

            <div class="hero-inner">
                <div class="hero-grid">
                    <div class="hero-text" style={CONTAINER_REVEAL.style(revealed, reduced_motion)}>
                        <p class="hero-eyebrow" style={staggered(0)}>{ EYEBROW }</p>

                        <h1 class="hero-title" style={staggered(1)}>{ &content.title }</h1>

                        <p class="hero-subtitle" style={staggered(2)}>{ &content.subtitle }</p>

                        <div class="hero-actions" style={staggered(3)}>
                            <MotionLink cta={content.cta_primary.clone()} class="hero-cta-primary" />
                            <MotionLink cta={content.cta_secondary.clone()} class="hero-cta-secondary" />
                        </div>

                        <FeatureRow style={staggered(4)} />
                    </div>

                    <div class="hero-media">
                        <MediaCard image={content.image_src.clone()} {revealed} {reduced_motion} />
                    </div>
                </div>
            </div>

            <div class="hero-fade" aria-hidden="true"></div>
        </section>
    }
}
