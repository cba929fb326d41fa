use crate::model::Portion;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "order-cart")]
#[command(about = "Build a restaurant order and send it over chat")]
#[command(version)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Browsing session whose saved order is used
    #[arg(short, long, global = true)]
    pub session: Option<String>,

    /// Directory holding saved sessions
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Menu file (JSON)
    #[arg(short, long, global = true)]
    pub menu: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List the menu
    Menu,
    /// Add one unit of a menu item, by number or name
    Add {
        item: String,
        /// Portion for items sold as half and full; prompts when omitted
        #[arg(short, long)]
        portion: Option<PortionArg>,
    },
    /// Remove a row of the order
    Remove { row: usize },
    /// Set the quantity of a row (0 removes it)
    Qty { row: usize, quantity: u32 },
    /// Increase the quantity of a row by one
    Inc { row: usize },
    /// Decrease the quantity of a row by one
    Dec { row: usize },
    /// Empty the order
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the order
    Show {
        /// Print the cart widget markup instead of a table
        #[arg(long)]
        html: bool,
    },
    /// Send the order over chat
    Checkout,
    /// Forget the saved order of the session
    EndSession,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortionArg {
    Half,
    Full,
}

impl From<PortionArg> for Portion {
    fn from(arg: PortionArg) -> Self {
        match arg {
            PortionArg::Half => Portion::Half,
            PortionArg::Full => Portion::Full,
        }
    }
}

/// Zero-based index of a 1-based row number.
pub fn row_index(row: usize) -> Option<usize> {
    row.checked_sub(1)
}
