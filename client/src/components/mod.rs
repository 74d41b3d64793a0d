//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin widgets (tabs, forms, lists, edit modal), storefront cards and the
//! app-wide notice bar and dialog host. Components read shared state from
//! context and hand async work to `crate::actions`.

pub mod cart_badge;
pub mod category_form;
pub mod category_list;
pub mod dialog_host;
pub mod notice_bar;
pub mod product_card;
pub mod product_editor;
pub mod product_form;
pub mod product_list;
pub mod tab_bar;
