mod client;
mod listing;

pub use client::ApiClient;
