pub mod use_balance;
pub mod use_locale;

pub use use_balance::*;
pub use use_locale::*;
