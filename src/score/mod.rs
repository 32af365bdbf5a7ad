mod store;

pub use store::{ScoreStore, StoreError};
