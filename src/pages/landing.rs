//! Landing page - what the witch offers.
//!
//! A hero logo followed by four feature sections and a closing choice of
//! where to go next. Purely static apart from the two navigation buttons.

use dioxus::prelude::*;
use masoori_ui::{BubbleKind, BubbleStyle, TextBubble};

use crate::app::route_for_path;
use crate::assets;
use crate::theme::colors::PLUM_GLASS;

/// Which side the illustration sits on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ArtSide {
    Left,
    Right,
}

struct Section {
    title: &'static str,
    text: &'static str,
    art: &'static str,
    art_side: ArtSide,
}

const WITCH_BADGE: &str = "🌟 Witch 🌟";

/// Closing choices: label and the in-app path it opens
const CHOICES: [(&str, &str); 2] = [
    ("🃏 Draw this week's card 🃏", "/spend"),
    ("🌙 Open the menu 🌙", "/menu"),
];

const SECTIONS: [Section; 4] = [
    Section {
        title: "My spending pattern as a tarot card",
        text: "Well now, a sweet little human guest. Looks like something is troubling you...\n\
Ah, I see! Your spending has been creeping up lately, hasn't it? 🔮\n\
There is no easy answer, but perhaps I can help.\n\
Come and visit me every week.\n\
The fairies will find out what you spent this week and bring it to me.\n\
Once I have read it, I will lay out your cards,\n\
and the fairy who paints will draw a tarot card made only for you.",
        art: assets::FINANCE_LUCK_CARDS,
        art_side: ArtSide::Right,
    },
    Section {
        title: "The card the witch recommends",
        text: "Ah, my human friend! The story of your spending shows itself in my crystal ball. 🔮✨\n\
From that pattern I have found a special card, one that makes the most of how you spend \
and fills your purse a little fuller. The fairies are already preparing its benefits for you. 🧚\n\
Are you ready to find it?",
        art: assets::CREDIT_CARDS,
        art_side: ArtSide::Left,
    },
    Section {
        title: "Fix your habits through challenges",
        text: "Back again, dear human? You want to hear about the spending challenge? 🔮\n\
It is no ordinary task. It is a little magic that changes how you spend, \
and when you complete it you will feel an achievement that sparkles like starlight.\n\
Do not be afraid. The fairies will light your way. ✨🌟",
        art: assets::TROPHY,
        art_side: ArtSide::Right,
    },
    Section {
        title: "Read your fortune with money",
        text: "So, you want a peek at your luck with money? 🔮\n\
From the cards spread before me I will pick the one that speaks of your future fortune.\n\
But remember: tarot shows possibilities, not promises. \
Your own choices and effort shape what comes.\n\
May your purse and your luck overflow... 🔮🌟",
        art: assets::BOTTLES,
        art_side: ArtSide::Left,
    },
];

/// Style of the large narrative bubbles on this page
fn narrative_style() -> BubbleStyle {
    BubbleStyle {
        width: "90%".to_string(),
        background: PLUM_GLASS.to_string(),
        padding_left_right: "30px".to_string(),
        padding_top_bottom: "30px".to_string(),
        border_radius: "19px".to_string(),
        ..BubbleKind::Content.style()
    }
}

/// Narrower clickable bubble for the closing choices
fn choice_style() -> BubbleStyle {
    BubbleStyle {
        width: "320px".to_string(),
        background: PLUM_GLASS.to_string(),
        ..BubbleKind::Choice.style()
    }
}

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "landing",
            header { class: "landing-hero",
                img { class: "landing-logo", src: assets::LANDING_MAIN_LOGO, alt: "Masoori" }
                p { class: "landing-tagline",
                    "•──☾ A tarot card drawn from your spending pattern ☽──•"
                }
            }

            for section in SECTIONS.iter() {
                LandingSection {
                    key: "{section.title}",
                    title: section.title,
                    text: section.text,
                    art: section.art,
                    art_on_left: section.art_side == ArtSide::Left,
                }
            }

            section { class: "landing-section",
                p { class: "landing-title", style: "text-align: center;",
                    "🌟 Where would you like to go? 🌟"
                }
                div { class: "landing-choices",
                    for (label, path) in CHOICES {
                        TextBubble {
                            key: "{path}",
                            style: choice_style(),
                            text: label.to_string(),
                            onclick: move |_| match route_for_path(path) {
                                Some(route) => {
                                    navigator.push(route);
                                }
                                None => tracing::warn!("No route for {}", path),
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LandingSection(title: &'static str, text: &'static str, art: &'static str, art_on_left: bool) -> Element {
    let art_style = format!("background-image: url('{}');", art);
    let content_class = if art_on_left {
        "landing-content art-left"
    } else {
        "landing-content"
    };

    rsx! {
        section { class: "landing-section",
            div { class: "{content_class}",
                div { class: "landing-text",
                    p { class: "landing-title", "{title}" }
                    div { style: "margin-bottom: 40px;",
                        TextBubble { kind: BubbleKind::Badge, text: WITCH_BADGE.to_string() }
                    }
                    TextBubble { text: text.to_string(), style: narrative_style() }
                }
                div { class: "landing-art", style: "{art_style}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_alternate_sides() {
        let sides: Vec<_> = SECTIONS.iter().map(|s| s.art_side).collect();
        assert_eq!(
            sides,
            vec![ArtSide::Right, ArtSide::Left, ArtSide::Right, ArtSide::Left]
        );
    }

    #[test]
    fn choices_open_known_routes() {
        for (label, path) in CHOICES {
            assert!(route_for_path(path).is_some(), "{} -> {}", label, path);
        }
    }

    #[test]
    fn choice_bubbles_are_clickable() {
        let style = choice_style();
        assert!(style.hoverable);
        assert_eq!(style.class(), "text-bubble hoverable");
        assert!(style.css().contains(PLUM_GLASS));
    }

    #[test]
    fn narrative_bubbles_are_not_clickable() {
        assert!(!narrative_style().hoverable);
        assert!(narrative_style().css().contains("white-space: pre-line;"));
    }
}
