use crate::cli::commands::{emit_json, open, parse_date, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::gaps;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gaps {
        as_user,
        from,
        to,
        page,
        size,
        json,
    } = cmd
    {
        let conn = open(cfg)?;
        let user = require_user(&conn, as_user)?;
        let from = parse_date(from)?;
        let to = parse_date(to)?;

        let result = gaps::find_days_with_no_sessions(&conn, user.id, from, to, *page, *size)?;

        if *json {
            return emit_json(&result);
        }

        println!(
            "📅 Days with no sessions for {} in {}..{} (page {}, {} gap days total):",
            as_user, from, to, result.page, result.total_elements
        );
        if result.is_empty() {
            println!("No gap days on this page.");
            return Ok(());
        }
        for day in &result.content {
            println!("- {}", day);
        }
    }
    Ok(())
}
