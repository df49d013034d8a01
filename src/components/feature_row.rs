use yew::prelude::*;
use crate::models::{Feature, FEATURES};

#[derive(Properties, PartialEq)]
pub struct FeatureRowProps {
    #[prop_or_default]
    pub style: String,
}

#[function_component(FeatureRow)]
pub fn feature_row(props: &FeatureRowProps) -> Html {
    html! {
        <ul class="hero-features" style={props.style.clone()}>
            { for FEATURES.iter().map(feature_item) }
        </ul>
    }
}

fn feature_item(feature: &Feature) -> Html {
    html! {
        <li class="hero-feature" key={feature.label}>
            <span class="hero-feature-icon">
                <svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none"
                     viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                    { for feature.icon.paths().iter().map(|d| html! {
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d} />
                    })}
                </svg>
            </span>
            <span class="hero-feature-label">{ feature.label }</span>
        </li>
    }
}
