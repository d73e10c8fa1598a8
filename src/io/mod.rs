pub mod seed;
pub mod store;

pub use store::{load_or_seed, JsonFileStore, ScheduleStore, StoreError, STORAGE_KEY};
