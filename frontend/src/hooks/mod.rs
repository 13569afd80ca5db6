pub mod use_animated_balance;
pub mod use_balance_visibility;

pub use use_animated_balance::use_animated_balance;
pub use use_balance_visibility::use_balance_visibility;
