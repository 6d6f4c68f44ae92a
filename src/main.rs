use std::time::Duration;

use clap::Parser;

use order_composer_rs::api::HttpClient;
use order_composer_rs::cli::{Cli, Command};
use order_composer_rs::error::Result;
use order_composer_rs::interface::{
    display_screen, prompt_extra_name, prompt_screen_action, prompt_yes_no, ScreenAction,
};
use order_composer_rs::session::{LoadState, OrderSession};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Order { id } => cmd_order(&cli.api, id),
        Command::Show { id } => cmd_show(&cli.api, id),
    }
}

/// Load a menu item, run the customization loop, and submit the order.
fn cmd_order(api_url: &str, id: u64) -> Result<()> {
    let api = HttpClient::new(api_url, REQUEST_TIMEOUT)?;

    println!("Loading menu item {}...", id);
    let mut session = OrderSession::new();
    session.load(&api, id);

    if let LoadState::Failed(reason) = session.load_state() {
        println!("Could not load menu item {}: {}", id, reason);
        return Ok(());
    }

    loop {
        display_screen(&session);

        match prompt_screen_action()? {
            ScreenAction::AddExtra => {
                if let Some(extra_id) = prompt_extra_name(session.extras())? {
                    session.increment_extra(extra_id);
                }
            }
            ScreenAction::RemoveExtra => {
                if let Some(extra_id) = prompt_extra_name(session.extras())? {
                    session.decrement_extra(extra_id);
                }
            }
            ScreenAction::IncreaseQuantity => session.increment_food(),
            ScreenAction::DecreaseQuantity => session.decrement_food(),
            ScreenAction::ToggleFavorite => session.toggle_favorite(),
            ScreenAction::FinishOrder => {
                let confirm = prompt_yes_no(
                    &format!("Place this order for {}?", session.formatted_total()),
                    true,
                )?;
                if !confirm {
                    continue;
                }

                match session.finish_order(&api) {
                    Ok(()) => {
                        println!("Order placed. Enjoy your meal!");
                        break;
                    }
                    Err(e) => {
                        // Fixed alert; state is untouched so the user can retry
                        println!("Could not place your order.");
                        println!("Please check the details and try again. ({})", e);
                    }
                }
            }
            ScreenAction::Leave => break,
        }
    }

    Ok(())
}

/// Fetch and display a menu item without ordering.
fn cmd_show(api_url: &str, id: u64) -> Result<()> {
    let api = HttpClient::new(api_url, REQUEST_TIMEOUT)?;

    let mut session = OrderSession::new();
    session.load(&api, id);
    display_screen(&session);

    Ok(())
}
