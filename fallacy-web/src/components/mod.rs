pub mod card;
pub mod catalogue;
pub mod detail;
pub mod error_banner;
pub mod grid;
pub mod header;
pub mod notice;
