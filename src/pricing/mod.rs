pub mod calculations;
pub mod format;

pub use calculations::{cart_total, order_price};
pub use format::{format_value, CurrencyFormatter};
