pub mod balance_display;
pub mod game_frame;
pub mod jackpot_banner;
pub mod locale_selector;
pub mod promo_form;
pub mod win_modal;

pub use balance_display::BalanceDisplay;
pub use game_frame::GameFrame;
pub use jackpot_banner::JackpotBanner;
pub use locale_selector::LocaleSelector;
pub use promo_form::{PromoFeedback, PromoForm};
pub use win_modal::WinModal;
