use yew::prelude::*;
use crate::animation::press_scale;
use crate::models::Cta;
use crate::utils::scale_style;

#[derive(Properties, PartialEq)]
pub struct MotionLinkProps {
    pub cta: Cta,
    #[prop_or_default]
    pub class: Classes,
}

/// Touch pointers never send a matching leave, so they don't count as hover.
fn is_hover_pointer(e: &PointerEvent) -> bool {
    e.pointer_type() != "touch"
}

/// Call-to-action anchor with hover/press scale feedback. The pointer state
/// lives only as long as this instance is mounted.
#[function_component(MotionLink)]
pub fn motion_link(props: &MotionLinkProps) -> Html {
    let hovered = use_state(|| false);
    let pressed = use_state(|| false);

    let onpointerenter = {
        let hovered = hovered.clone();
        Callback::from(move |e: PointerEvent| {
            if is_hover_pointer(&e) {
                hovered.set(true);
            }
        })
    };

    let onpointerleave = {
        let hovered = hovered.clone();
        let pressed = pressed.clone();
        Callback::from(move |_: PointerEvent| {
            hovered.set(false);
            pressed.set(false);
        })
    };

    let onpointerdown = {
        let pressed = pressed.clone();
        Callback::from(move |_: PointerEvent| pressed.set(true))
    };

    let release = {
        let pressed = pressed.clone();
        Callback::from(move |_: PointerEvent| pressed.set(false))
    };

    let style = scale_style(press_scale(*hovered, *pressed));

    html! {
        <a href={props.cta.href.clone()}
           class={classes!("hero-cta", props.class.clone())}
           aria-label={props.cta.label.clone()}
           {style}
           {onpointerenter}
           {onpointerleave}
           {onpointerdown}
           onpointerup={release.clone()}
           onpointercancel={release}>
            { &props.cta.label }
        </a>
    }
}
