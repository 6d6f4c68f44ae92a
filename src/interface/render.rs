use crate::pricing::format_value;
use crate::session::{LoadState, OrderSession};

/// Header glyph for the favorite flag.
pub fn favorite_icon(favorite: bool) -> &'static str {
    if favorite { "♥" } else { "♡" }
}

/// Render the full order screen.
pub fn display_screen(session: &OrderSession) {
    let item = match session.load_state() {
        LoadState::Loading => {
            println!("Loading...");
            return;
        }
        LoadState::Failed(reason) => {
            println!("Could not load this item: {}", reason);
            return;
        }
        LoadState::Loaded(item) => item,
    };

    println!();
    println!("=== {} {} ===", item.name, favorite_icon(session.is_favorite()));
    println!("{}", item.description);
    println!("Base price: {}", item.formatted_price);
    println!();

    display_extras(session);

    println!("Quantity: {}", session.food_quantity());
    println!("Total: {}", session.formatted_total());
    println!();
}

/// Render the extras ledger as an aligned table.
fn display_extras(session: &OrderSession) {
    let extras = session.extras();
    if extras.is_empty() {
        println!("No extras for this item.");
        println!();
        return;
    }

    println!("--- Extras ---");

    let max_name_len = extras.iter().map(|e| e.name.len()).max().unwrap_or(10);

    for extra in extras {
        println!(
            "  {:<width$}  {:>9}  x{}",
            extra.name,
            format_value(extra.value),
            extra.quantity,
            width = max_name_len
        );
    }

    println!();
}
