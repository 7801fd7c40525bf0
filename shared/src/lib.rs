pub mod config;
pub mod currency;
pub mod locale;
pub mod messages;
pub mod promo;
pub mod win_modal;
