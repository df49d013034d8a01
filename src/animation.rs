//! Entrance animations as plain values.
//!
//! Each animated element gets a [`Motion`]: the pose it mounts in, the pose it
//! settles in, and how to get there. Rendering a motion yields an inline style;
//! the browser's CSS transitions do the actual interpolation. Stagger groups are
//! flattened into per-child delays up front.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub y_px: f64,
    pub scale: f64,
    pub rotate_deg: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y_px: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub fn transform_css(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotate({}deg)",
            self.y_px, self.scale, self.rotate_deg
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_s: f64, easing: Easing) -> Self {
        Self {
            duration_s,
            delay_s: 0.0,
            easing,
        }
    }

    pub const fn delayed(self, delay_s: f64) -> Self {
        Self { delay_s, ..self }
    }

    pub fn css(&self) -> String {
        let timing = format!("{}s {} {}s", self.duration_s, self.easing.css(), self.delay_s);
        format!("opacity {timing}, transform {timing}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub animate: Pose,
    pub transition: Transition,
}

impl Motion {
    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed {
            self.animate
        } else {
            self.initial
        }
    }

    /// Inline style for the current phase. Under reduced motion the element
    /// sits at its end pose from the first frame.
    pub fn style(&self, revealed: bool, reduced_motion: bool) -> String {
        if reduced_motion {
            return pose_style(&self.animate);
        }
        let pose = self.pose(revealed);
        if revealed {
            format!("{} transition: {};", pose_style(&pose), self.transition.css())
        } else {
            pose_style(&pose)
        }
    }
}

fn pose_style(pose: &Pose) -> String {
    format!("opacity: {}; transform: {};", pose.opacity, pose.transform_css())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub step_s: f64,
    pub delay_children_s: f64,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> f64 {
        let raw = self.delay_children_s + self.step_s * index as f64;
        // keeps 0.12 * 3 from printing as 0.36000000000000004s
        (raw * 1000.0).round() / 1000.0
    }
}

pub const HERO_STAGGER: Stagger = Stagger {
    step_s: 0.12,
    delay_children_s: 0.0,
};

pub const CONTAINER_REVEAL: Motion = Motion {
    initial: Pose::HIDDEN,
    animate: Pose::REST,
    transition: Transition::new(0.3, Easing::EaseOut),
};

/// Fade-up for the `index`th child of the text column.
pub fn fade_up(index: usize) -> Motion {
    Motion {
        initial: Pose {
            opacity: 0.0,
            y_px: 18.0,
            ..Pose::REST
        },
        animate: Pose::REST,
        transition: Transition::new(0.6, Easing::EaseOut).delayed(HERO_STAGGER.delay_for(index)),
    }
}

pub const MEDIA_CARD: Motion = Motion {
    initial: Pose {
        opacity: 0.0,
        y_px: 0.0,
        scale: 0.98,
        rotate_deg: -2.0,
    },
    animate: Pose::REST,
    transition: Transition::new(0.8, Easing::EaseOut),
};

pub const CAPTION: Motion = Motion {
    initial: Pose {
        opacity: 0.0,
        y_px: 14.0,
        scale: 1.0,
        rotate_deg: 0.0,
    },
    animate: Pose::REST,
    transition: Transition::new(0.6, Easing::EaseInOut).delayed(0.2),
};

pub const HOVER_SCALE: f64 = 1.02;
pub const PRESS_SCALE: f64 = 0.98;

pub fn press_scale(hovered: bool, pressed: bool) -> f64 {
    if pressed {
        PRESS_SCALE
    } else if hovered {
        HOVER_SCALE
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_steps_by_012() {
        let delays: Vec<f64> = (0..5).map(|i| HERO_STAGGER.delay_for(i)).collect();
        assert_eq!(delays, vec![0.0, 0.12, 0.24, 0.36, 0.48]);
    }

    #[test]
    fn fade_up_shape() {
        let m = fade_up(2);
        assert_eq!(m.initial.opacity, 0.0);
        assert_eq!(m.initial.y_px, 18.0);
        assert_eq!(m.animate, Pose::REST);
        assert_eq!(m.transition.duration_s, 0.6);
        assert_eq!(m.transition.delay_s, 0.24);
        assert_eq!(m.transition.easing, Easing::EaseOut);
    }

    #[test]
    fn media_card_is_not_staggered() {
        assert_eq!(MEDIA_CARD.transition.delay_s, 0.0);
        assert_eq!(MEDIA_CARD.transition.duration_s, 0.8);
        assert_eq!(MEDIA_CARD.initial.scale, 0.98);
        assert_eq!(MEDIA_CARD.initial.rotate_deg, -2.0);
    }

    #[test]
    fn caption_waits_02() {
        assert_eq!(CAPTION.transition.delay_s, 0.2);
        assert_eq!(CAPTION.transition.duration_s, 0.6);
        assert_eq!(CAPTION.initial.y_px, 14.0);
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let style = fade_up(1).style(false, false);
        assert_eq!(
            style,
            "opacity: 0; transform: translateY(18px) scale(1) rotate(0deg);"
        );
    }

    #[test]
    fn revealed_style_carries_delay() {
        let style = fade_up(1).style(true, false);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px) scale(1) rotate(0deg);"));
        assert!(style.contains("transition: opacity 0.6s ease-out 0.12s, transform 0.6s ease-out 0.12s;"));
    }

    #[test]
    fn reduced_motion_jumps_to_end_pose() {
        let style = MEDIA_CARD.style(false, true);
        assert_eq!(style, "opacity: 1; transform: translateY(0px) scale(1) rotate(0deg);");
    }

    #[test]
    fn press_beats_hover() {
        assert_eq!(press_scale(false, false), 1.0);
        assert_eq!(press_scale(true, false), 1.02);
        assert_eq!(press_scale(true, true), 0.98);
        assert_eq!(press_scale(false, true), 0.98);
    }
}
