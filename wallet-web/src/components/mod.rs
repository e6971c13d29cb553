//! UI Components

pub mod navbar;
pub mod notice;
pub mod send_form;
pub mod wallet_card;

pub use navbar::Navbar;
pub use notice::NoticeStack;
pub use send_form::SendForm;
pub use wallet_card::WalletCard;
