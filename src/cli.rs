use clap::{Parser, Subcommand};

/// OrderComposer — customize a single menu item and place the order.
#[derive(Parser, Debug)]
#[command(name = "order_composer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the restaurant API.
    #[arg(short, long, default_value = "http://localhost:3333")]
    pub api: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Customize a menu item interactively and submit the order.
    Order {
        /// Menu item id.
        id: u64,
    },

    /// Fetch and display a menu item without ordering.
    Show {
        /// Menu item id.
        id: u64,
    },
}
