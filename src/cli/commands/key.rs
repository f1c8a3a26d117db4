use page_toc::cache::cache_key;
use page_toc::toc::TocOptions;
use page_toc::utils::error::BoxResult;
use page_toc::utils::fs::write_output;

use crate::cli::types::Commands;

/// Handle the key command
pub fn handle_key_command(command: &Commands, options: &TocOptions) -> BoxResult<()> {
    if let Commands::Key { content_id } = command {
        write_output(&cache_key(content_id, options))?;
    }
    Ok(())
}
