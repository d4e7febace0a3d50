//! Hashtag chips for the spending keywords of a card.

use dioxus::prelude::*;
use masoori_core::Hashtag;

#[component]
pub fn HashTag(text: String) -> Element {
    rsx! {
        span { class: "hashtag", "#{text}" }
    }
}

/// Key for the chip at `index`. Ids alone can repeat, so the position leads.
pub fn chip_key(index: usize, tag: &Hashtag) -> String {
    format!("{}-{}", index, tag.id)
}

/// Wrapping row of chips, one per keyword. Renders an empty row for no keywords.
#[component]
pub fn HashTagList(tags: Vec<Hashtag>) -> Element {
    let chips: Vec<(String, String)> = tags
        .into_iter()
        .enumerate()
        .map(|(index, tag)| (chip_key(index, &tag), tag.keyword))
        .collect();

    rsx! {
        div { class: "hashtag-list",
            for (key, text) in chips {
                HashTag { key: "{key}", text }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_stay_unique_when_ids_repeat() {
        let tags = vec![
            Hashtag { id: 0, keyword: "coffee".to_string() },
            Hashtag { id: 0, keyword: "taxi".to_string() },
            Hashtag { id: 0, keyword: "coffee".to_string() },
        ];
        let keys: Vec<_> = tags.iter().enumerate().map(|(i, t)| chip_key(i, t)).collect();
        assert_eq!(keys, vec!["0-0", "1-0", "2-0"]);
    }
}
