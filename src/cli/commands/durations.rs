use crate::cli::commands::{emit_json, open, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle;
use crate::errors::AppResult;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Durations {
        as_user,
        page,
        json,
    } = cmd
    {
        let conn = open(cfg)?;
        let user = require_user(&conn, as_user)?;

        let result = lifecycle::user_durations_page(&conn, user.id, *page)?;

        if *json {
            return emit_json(&result);
        }

        println!(
            "🕒 Recorded durations for {} (page {}, {} total):",
            as_user, result.page, result.total_elements
        );
        if result.is_empty() {
            println!("No durations on this page.");
            return Ok(());
        }
        for d in &result.content {
            println!(
                "- #{} | {} | '{}' | {}",
                d.id,
                time::to_db(d.date),
                d.task_name,
                time::format_secs(d.duration_secs),
            );
        }
    }
    Ok(())
}
