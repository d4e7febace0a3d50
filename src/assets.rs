//! Static image paths. The files themselves are served from `assets/`.

pub const LANDING_MAIN_LOGO: &str = "/assets/img/LandingMainLogo.png";
pub const FINANCE_LUCK_CARDS: &str = "/assets/img/FinanceLuckCards.png";
pub const CREDIT_CARDS: &str = "/assets/img/CreditCards.png";
pub const TROPHY: &str = "/assets/img/Trophy.png";
pub const BOTTLES: &str = "/assets/img/Bottles.png";

pub const TAROT_CARD_FRONT: &str = "/assets/img/tarotCard/tarotCardFront.png";
pub const TAROT_CARD_BACK: &str = "/assets/img/tarotCard/tarotCardBack.png";

pub const PUZZLE: &str = "/assets/img/puzzle.png";
pub const GHOST: &str = "/assets/img/ghost.png";
