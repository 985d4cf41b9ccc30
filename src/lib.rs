mod cart;
pub mod config;
mod dto;
mod error;
mod provider;
pub mod storage;
mod stores;

pub use cart::CartStore;
pub use config::{CartConfig, CorruptPayload, STORAGE_KEY};
pub use dto::{LineItem, NewLineItem};
pub use error::Error;
pub use provider::{use_cart, CartProvider};
pub use stores::ProductsStore;
