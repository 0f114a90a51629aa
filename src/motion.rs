//! Motion Effects
//!
//! Card tilt, icon parallax and click ripple geometry, plus the
//! reduced-motion preference that switches transitions off.

use wasm_bindgen::JsCast;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// CSS custom property holding the shared transition shorthand
pub const TRANSITION_VAR: &str = "--transition-smooth";

pub const CARD_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(0px)";
pub const CARD_RECEDED_TRANSFORM: &str = "scale(0.95)";
pub const ICON_REST_TRANSFORM: &str = "translate(0px, 0px) scale(1)";

pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Upper bound of the random delay before a card starts floating
pub const FLOAT_MAX_DELAY_MS: f64 = 2000.0;

/// Pointer position relative to a card's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInCard {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PointerInCard {
    fn offset_from_center(&self) -> (f64, f64) {
        (self.x - self.width / 2.0, self.y - self.height / 2.0)
    }
}

/// Lean the card towards the pointer: 1 degree per 10px from centre
pub fn tilt_transform(p: PointerInCard) -> String {
    let (_, dy) = p.offset_from_center();
    let dx_mirrored = p.width / 2.0 - p.x;
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-5px)",
        dy / 10.0,
        dx_mirrored / 10.0
    )
}

/// Drift the icon with the pointer: 1px per 20px from centre
pub fn parallax_transform(p: PointerInCard) -> String {
    let (dx, dy) = p.offset_from_center();
    format!("translate({:.2}px, {:.2}px) scale(1.1)", dx / 20.0, dy / 20.0)
}

/// Square ripple covering the card, centred on the click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple_at(p: PointerInCard) -> Ripple {
    let size = p.width.max(p.height);
    Ripple {
        size,
        left: p.x - size / 2.0,
        top: p.y - size / 2.0,
    }
}

/// Cards other than the hovered one shrink and fade
pub fn recedes(index: usize, hovered: Option<usize>) -> bool {
    matches!(hovered, Some(h) if h != index)
}

pub fn card_transform(index: usize, hovered: Option<usize>, tilt: Option<&str>) -> String {
    match hovered {
        Some(h) if h == index => tilt.unwrap_or(CARD_REST_TRANSFORM).to_string(),
        Some(_) => CARD_RECEDED_TRANSFORM.to_string(),
        None => CARD_REST_TRANSFORM.to_string(),
    }
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Disable the shared transition when the user asks for less motion.
/// Returns whether it was disabled.
pub fn apply_reduced_motion() -> bool {
    if !prefers_reduced_motion() {
        return false;
    }
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match root {
        Some(root) => root.style().set_property(TRANSITION_VAR, "none").is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(x: f64, y: f64) -> PointerInCard {
        PointerInCard { x, y, width: 200.0, height: 100.0 }
    }

    #[test]
    fn test_centre_is_flat() {
        assert_eq!(
            tilt_transform(pointer(100.0, 50.0)),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateY(-5px)"
        );
        assert_eq!(parallax_transform(pointer(100.0, 50.0)), "translate(0.00px, 0.00px) scale(1.1)");
    }

    #[test]
    fn test_corner_tilts_towards_pointer() {
        // Top-left corner
        assert_eq!(
            tilt_transform(pointer(0.0, 0.0)),
            "perspective(1000px) rotateX(-5.00deg) rotateY(10.00deg) translateY(-5px)"
        );
        assert_eq!(parallax_transform(pointer(200.0, 100.0)), "translate(5.00px, 2.50px) scale(1.1)");
    }

    #[test]
    fn test_ripple_centred_on_click() {
        let ripple = ripple_at(pointer(30.0, 40.0));
        assert_eq!(ripple, Ripple { size: 200.0, left: -70.0, top: -60.0 });
    }

    #[test]
    fn test_siblings_recede_while_one_is_hovered() {
        assert!(!recedes(1, None));
        assert!(!recedes(1, Some(1)));
        assert!(recedes(0, Some(1)));

        assert_eq!(card_transform(0, Some(1), None), CARD_RECEDED_TRANSFORM);
        assert_eq!(card_transform(1, Some(1), Some("tilted")), "tilted");
        assert_eq!(card_transform(1, Some(1), None), CARD_REST_TRANSFORM);
        assert_eq!(card_transform(1, None, Some("stale")), CARD_REST_TRANSFORM);
    }
}
