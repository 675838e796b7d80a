//! Category CLI commands

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::FintrackResult;
use crate::models::category;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List the available categories
    List,
}

/// Handle a category command
pub fn handle_category_command(cmd: CategoryCommands) -> FintrackResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(category::all()));
        }
    }

    Ok(())
}
