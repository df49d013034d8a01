use yew::prelude::*;
use crate::animation::{CAPTION, MEDIA_CARD};
use crate::models::{ImageSource, CAPTION_DETAIL, CAPTION_TITLE, IMAGE_ALT, THUMB_ALT};

#[derive(Properties, PartialEq)]
pub struct MediaCardProps {
    pub image: ImageSource,
    pub revealed: bool,
    #[prop_or_default]
    pub reduced_motion: bool,
}

#[function_component(MediaCard)]
pub fn media_card(props: &MediaCardProps) -> Html {
    let src = props.image.src().to_string();

    html! {
        <div class="hero-card" style={MEDIA_CARD.style(props.revealed, props.reduced_motion)}>
            <div class="hero-image-frame">
                <img class="hero-image" src={src.clone()} alt={IMAGE_ALT} />
            </div>

            <div class="hero-caption" style={CAPTION.style(props.revealed, props.reduced_motion)}>
                <div class="hero-thumb">
                    <img class="hero-thumb-image" src={src} alt={THUMB_ALT} width="40" height="40" />
                </div>
                <div>
                    <div class="hero-caption-title">{ CAPTION_TITLE }</div>
                    <div class="hero-caption-detail">{ CAPTION_DETAIL }</div>
                </div>
            </div>
        </div>
    }
}
