//! sqldns application layer: store port, record resolution and zone cache.
pub mod ports;
pub mod services;
pub mod use_cases;
