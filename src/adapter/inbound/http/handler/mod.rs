//! Route handlers, one module per resource.

pub mod auth;
pub mod banner;
pub mod catalog;
pub mod customer;
pub mod media;
pub mod order;
pub mod promotion;
pub mod settings;
pub mod staff;
pub mod storefront;
