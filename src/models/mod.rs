mod menu_item;
mod order;

pub use menu_item::{init_extras, Extra, ExtraDefinition, MenuItem, RawMenuItem};
pub use order::OrderPayload;
