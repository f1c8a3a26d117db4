use log::info;

use page_toc::toc::{ensure_heading_ids, extract_headings, TocOptions};
use page_toc::utils::error::BoxResult;
use page_toc::utils::fs::{read_input, write_output};

use crate::cli::types::Commands;

/// Handle the headings command
pub fn handle_headings_command(command: &Commands, options: &TocOptions) -> BoxResult<()> {
    if let Commands::Headings { file, pretty } = command {
        let content = read_input(file.as_deref())?;
        let headings = extract_headings(&ensure_heading_ids(&content), options.max_depth);
        info!("Found {} headings up to h{}", headings.len(), options.max_depth);

        let json = if *pretty {
            serde_json::to_string_pretty(&headings)?
        } else {
            serde_json::to_string(&headings)?
        };
        write_output(&json)?;
    }
    Ok(())
}
