#![no_std]

pub mod proxy_price_feed;
pub mod proxy_receipt_token;
pub mod proxy_vault;
