//! UI Components
//!
//! Reusable Leptos components.

mod avatar;
mod board;
mod board_column;
mod card;
mod card_badges;
mod tag_popup;
mod tag_row;
mod toast;

pub use board::Board;
pub use toast::{ToastHandle, Toasts};
