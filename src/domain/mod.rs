//! Restaurant domain: catalog, customers, orders and storefront rules.

pub mod banner;
pub mod cart;
pub mod category;
pub mod checkout;
pub mod coupon;
pub mod customer;
pub mod error;
pub mod id;
pub mod media;
pub mod menu;
pub mod money;
pub mod order;
pub mod password;
pub mod promotion;
pub mod settings;
pub mod staff;
pub mod stats;
pub mod text;
