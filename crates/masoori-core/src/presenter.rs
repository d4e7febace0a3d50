//! Read-only view of a [`ConsumeInfo`] for rendering.
//!
//! Views go through `CardView` instead of touching the raw entity, so the
//! empty default (before the first load, or after a failed one) renders as an
//! empty card rather than failing.

use crate::types::ConsumeInfo;

/// A hashtag chip ready to render. `id` may repeat (missing ids decode to 0),
/// so renderers key chips by position as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashtag {
    pub id: u64,
    pub keyword: String,
}

impl Hashtag {
    /// Chip label, e.g. `#coffee`.
    pub fn label(&self) -> String {
        format!("#{}", self.keyword)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    info: &'a ConsumeInfo,
}

impl<'a> From<&'a ConsumeInfo> for CardView<'a> {
    fn from(info: &'a ConsumeInfo) -> Self {
        Self { info }
    }
}

impl<'a> CardView<'a> {
    /// Text printed under the tarot card: the card name.
    pub fn bottom_text(&self) -> &'a str {
        &self.info.card.name
    }

    /// Card description with Windows line endings normalised.
    pub fn description(&self) -> String {
        self.info.card.description.replace("\r\n", "\n")
    }

    pub fn image_path(&self) -> Option<&'a str> {
        let path = self.info.card.image_path.as_str();
        (!path.trim().is_empty()).then_some(path)
    }

    /// One chip per keyword item, in server order.
    pub fn hashtags(&self) -> Vec<Hashtag> {
        self.info
            .basic_list
            .iter()
            .map(|item| Hashtag {
                id: item.id,
                keyword: item.keyword.trim().to_string(),
            })
            .collect()
    }

    /// Text placed on the clipboard by the share dialog. Blank keywords are left out.
    pub fn share_text(&self) -> String {
        let mut text = format!("This week's tarot card: {}", self.bottom_text());
        for tag in self.hashtags().iter().filter(|t| !t.keyword.is_empty()) {
            text.push(' ');
            text.push_str(&tag.label());
        }
        if let Some(image) = self.image_path() {
            text.push('\n');
            text.push_str(image);
        }
        text
    }

    /// True until a card with a name has been loaded.
    pub fn is_empty(&self) -> bool {
        self.info.card.name.is_empty() && self.info.basic_list.is_empty()
    }
}
