mod state;

pub use state::{LoadState, OrderSession};
