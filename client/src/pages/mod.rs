//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storefront` is the public catalog, `product` a single product, and
//! `admin` the management console.

pub mod admin;
pub mod product;
pub mod storefront;
