pub mod cli;
pub mod client;
pub mod configs;
pub mod error;
pub mod logger;

pub use client::PaymentClient;

#[macro_export]
macro_rules! service_name {
    () => {
        env!("CARGO_CRATE_NAME")
    };
}
