//! Non-interactive commands

use crate::errors::{exit_code_for, EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use crate::loader::fetch_cancellable;
use errboard_common::{rank_by_count, ErrorGroup, ErrorGroupSource};
use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Ranked groups as plain text, one summary line per group
pub fn format_list(groups: &[ErrorGroup]) -> String {
    if groups.is_empty() {
        return "no errors\n".to_string();
    }

    let count_width = groups
        .iter()
        .map(|g| g.count.to_string().len())
        .max()
        .unwrap_or(1)
        .max("COUNT".len());
    let command_width = groups
        .iter()
        .map(|g| g.representative.command.chars().count())
        .max()
        .unwrap_or(0)
        .clamp("COMMAND".len(), 32);

    let mut out = format!(
        "{:>cw$}  {:<mw$}  ERROR\n",
        "COUNT",
        "COMMAND",
        cw = count_width,
        mw = command_width
    );
    for group in groups {
        let command = errboard_common::text::truncate_to(&group.representative.command, command_width);
        out.push_str(&format!(
            "{:>cw$}  {:<mw$}  {}\n",
            group.count,
            command,
            group.summary_error(),
            cw = count_width,
            mw = command_width
        ));
    }
    out
}

/// Fetch once and print the ranked groups. Returns the process exit code.
pub async fn list(
    source: &dyn ErrorGroupSource,
    json: bool,
    token: &CancellationToken,
    out: &mut impl Write,
) -> i32 {
    let groups = match fetch_cancellable(source, token).await {
        Ok(groups) => rank_by_count(&groups),
        Err(e) => {
            warn!("Listing failed: {}", e);
            eprintln!("could not load errors: {}", e);
            return exit_code_for(&e);
        }
    };
    info!("Listing {} error groups", groups.len());

    let rendered = if json {
        match serde_json::to_string_pretty(&groups) {
            Ok(s) => s + "\n",
            Err(e) => {
                warn!("Encoding groups failed: {}", e);
                return EXIT_GENERAL_ERROR;
            }
        }
    } else {
        format_list(&groups)
    };

    match out.write_all(rendered.as_bytes()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            warn!("Writing output failed: {}", e);
            EXIT_GENERAL_ERROR
        }
    }
}
