use yew::prelude::*;
use log::{info, warn};
use hero_section::{HeroOverrides, HeroSection};

const CONTENT_JSON: &str = include_str!("../content/hero.json");

fn load_overrides() -> HeroOverrides {
    match HeroOverrides::from_json(CONTENT_JSON) {
        Ok(overrides) => overrides,
        Err(e) => {
            warn!("content/hero.json is invalid, using defaults: {}", e);
            HeroOverrides::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let overrides = use_memo((), |_| load_overrides());

    {
        let overrides = overrides.clone();
        use_effect_with((), move |_| {
            let title = (*overrides).clone().resolve().title;
            info!("Rendering hero: {}", title);
            || {}
        });
    }

    html! {
        <main role="main">
            <HeroSection overrides={(*overrides).clone()} />
        </main>
    }
}
