#![allow(unused_imports)]

mod mock_record_store;

pub use mock_record_store::MockZoneStore;
