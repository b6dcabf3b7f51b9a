use crate::cli::commands::{emit_json, open, parse_sort, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::anomaly;
use crate::errors::AppResult;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Anomalies {
        as_user,
        page,
        sort,
        direction,
        json,
    } = cmd
    {
        let conn = open(cfg)?;
        let user = require_user(&conn, as_user)?;
        let (sort, dir) = parse_sort(sort, direction)?;

        let result = anomaly::find_anomalous_sessions(&conn, user.id, *page, sort, dir)?;

        if *json {
            return emit_json(&result);
        }

        // total_elements counts the whole page before filtering, so it can
        // exceed the number of rows printed here.
        println!(
            "🚩 Anomalous sessions for {} (page {}, {} sessions total):",
            as_user, result.page, result.total_elements
        );
        if result.is_empty() {
            println!("No anomalous sessions on this page.");
            return Ok(());
        }
        for s in &result.content {
            let duration = s
                .duration_secs
                .map(time::format_secs)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "- #{} | task {} | started {} | duration {}",
                s.id,
                s.task_id,
                time::to_db(s.work_started),
                duration,
            );
        }
    }
    Ok(())
}
