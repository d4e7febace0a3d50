//! Backdrop + content visibility for modal overlays.
//!
//! An [`Overlay`] is one boolean. The backdrop and the content are both
//! derived from it, so they can never be shown independently. There is no
//! transitional state: every operation takes effect immediately.
//!
//! Several overlays on one page are independent values. Opening one never
//! closes another; when two are open at once their static layer decides the
//! stacking order.
//!
//! ```
//! use masoori_core::overlay::Overlay;
//!
//! let mut share = Overlay::with_layer(3);
//! let puzzle = Overlay::with_layer(3);
//!
//! share.open();
//! assert!(share.visibility().backdrop && share.visibility().content);
//! assert!(!puzzle.is_open());
//!
//! share.close();
//! assert!(!share.visibility().backdrop);
//! ```

/// z-index of every overlay backdrop
pub const BACKDROP_LAYER: u8 = 1;
/// Content layer used on the menu page
pub const MENU_CONTENT_LAYER: u8 = 2;
/// Content layer used on the spend-pattern page
pub const SPEND_CONTENT_LAYER: u8 = 3;

/// What should currently be drawn for an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayVisibility {
    pub backdrop: bool,
    pub content: bool,
}

/// Static stacking for an overlay's two elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStacking {
    pub backdrop: u8,
    pub content: u8,
}

impl Default for OverlayStacking {
    fn default() -> Self {
        Self {
            backdrop: BACKDROP_LAYER,
            content: MENU_CONTENT_LAYER,
        }
    }
}

/// Open/closed state of one modal overlay. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    is_open: bool,
    layer: OverlayStacking,
}

impl Overlay {
    /// Closed overlay on the default layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed overlay whose content sits at `content` (backdrop stays at layer 1).
    ///
    /// A content layer at or below the backdrop is raised to just above it.
    pub fn with_layer(content: u8) -> Self {
        Self {
            is_open: false,
            layer: OverlayStacking {
                backdrop: BACKDROP_LAYER,
                content: content.max(BACKDROP_LAYER + 1),
            },
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.set(true);
    }

    pub fn close(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_open);
    }

    fn set(&mut self, open: bool) {
        if self.is_open != open {
            tracing::debug!(open, content_layer = self.layer.content, "overlay visibility changed");
        }
        self.is_open = open;
    }

    /// Backdrop and content visibility, both taken from the same flag.
    pub fn visibility(&self) -> OverlayVisibility {
        OverlayVisibility {
            backdrop: self.is_open,
            content: self.is_open,
        }
    }

    pub fn layer(&self) -> OverlayStacking {
        self.layer
    }

    /// CSS `display` value for either element.
    pub fn display(&self) -> &'static str {
        if self.is_open {
            "block"
        } else {
            "none"
        }
    }
}
