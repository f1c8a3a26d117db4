use log::info;

use page_toc::toc::{ensure_heading_ids, generate_toc, TocOptions};
use page_toc::utils::error::BoxResult;
use page_toc::utils::fs::{read_input, write_output};

use crate::cli::types::Commands;

/// Handle the render command
pub fn handle_render_command(command: &Commands, options: &TocOptions) -> BoxResult<()> {
    if let Commands::Render { file, with_content } = command {
        let content = read_input(file.as_deref())?;
        let normalized = ensure_heading_ids(&content);
        let toc = generate_toc(&normalized, options);

        if toc.is_empty() {
            info!(
                "Not enough headings for a table of contents (need {} up to h{})",
                options.min_headers, options.max_depth
            );
        }

        write_output(&toc)?;
        if *with_content {
            write_output(&normalized)?;
        }
    }
    Ok(())
}
