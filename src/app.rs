use dioxus::prelude::*;
use masoori_core::ConsumeId;

use crate::context::{ApiHandle, SpendInfoState};
use crate::get_settings;
use crate::pages::{Dictionary, Faq, Landing, Main, Menu, SpendPattern, SpendToday};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the four feature sections
/// - `/menu` - Menu with the profile overlay
/// - `/spend` - This week's card for the launch consume id
/// - `/spend/:consume_id` - Card for a specific consume id
/// - `/main`, `/faq`, `/dictionary` - Navigation targets
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/menu")]
    Menu {},
    #[route("/spend")]
    SpendToday {},
    #[route("/spend/:consume_id")]
    SpendPattern { consume_id: ConsumeId },
    #[route("/main")]
    Main {},
    #[route("/faq")]
    Faq {},
    #[route("/dictionary")]
    Dictionary {},
}

/// Resolve an in-app path such as `/dictionary` to its route.
pub fn route_for_path(path: &str) -> Option<Route> {
    path.parse::<Route>().ok()
}

/// Root application component.
///
/// Provides global styles, the API client, the shared card slot and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| ApiHandle(get_settings().map(|s| s.client)));
    use_context_provider(SpendInfoState::new);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_targets_resolve() {
        assert_eq!(route_for_path("/main"), Some(Route::Main {}));
        assert_eq!(route_for_path("/faq"), Some(Route::Faq {}));
        assert_eq!(route_for_path("/dictionary"), Some(Route::Dictionary {}));
    }

    #[test]
    fn spend_route_carries_consume_id() {
        assert_eq!(
            route_for_path("/spend/7"),
            Some(Route::SpendPattern { consume_id: ConsumeId(7) })
        );
        assert_eq!(Route::SpendPattern { consume_id: ConsumeId(4) }.to_string(), "/spend/4");
    }
}
