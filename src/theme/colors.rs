//! Color constants for the witch's-parlour palette.
//!
//! Mirrors the CSS custom properties in `styles.rs` for places that build
//! inline styles in Rust.

// === PLUM (Dialogs, glass bubbles) ===
pub const PLUM_DEEP: &str = "#5E3A66";
pub const PLUM_GLASS: &str = "rgba(77, 27, 69, 0.5)";

// === LILAC (Light sections) ===
pub const LILAC_MIST: &str = "#EAE2ED";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GLOBAL_STYLES;

    #[test]
    fn palette_matches_stylesheet() {
        assert!(GLOBAL_STYLES.contains(&format!("--plum-deep: {};", PLUM_DEEP)));
        assert!(GLOBAL_STYLES.contains(&format!("--plum-glass: {};", PLUM_GLASS)));
        assert!(GLOBAL_STYLES.contains(&format!("--lilac-mist: {};", LILAC_MIST)));
    }
}
