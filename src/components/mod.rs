//! UI Components
//!
//! Reusable Leptos components.

mod countdown_card;
mod countdown_form;
mod countdown_list;
mod delete_confirm_button;
mod import_dialog;
mod notice_bar;
mod share_dialog;
mod view_toggles;

pub use countdown_card::CountdownCard;
pub use countdown_form::CountdownForm;
pub use countdown_list::CountdownList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use import_dialog::ImportDialog;
pub use notice_bar::NoticeBar;
pub use share_dialog::ShareDialog;
pub use view_toggles::ViewToggles;
