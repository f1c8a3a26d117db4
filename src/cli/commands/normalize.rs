use page_toc::toc::ensure_heading_ids;
use page_toc::utils::error::BoxResult;
use page_toc::utils::fs::{read_input, write_output};

use crate::cli::types::Commands;

/// Handle the normalize command
pub fn handle_normalize_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Normalize { file } = command {
        let content = read_input(file.as_deref())?;
        write_output(&ensure_heading_ids(&content))?;
    }
    Ok(())
}
