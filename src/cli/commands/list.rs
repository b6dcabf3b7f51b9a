use crate::cli::commands::{emit_json, open, parse_sort, require_user};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle;
use crate::errors::AppResult;
use crate::models::page::Page;
use crate::models::session::WorkingSession;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
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

        let result = lifecycle::user_sessions_page(&conn, user.id, *page, sort, dir)?;

        if *json {
            return emit_json(&result);
        }
        print_sessions(as_user, &result);
    }
    Ok(())
}

fn print_sessions(email: &str, page: &Page<WorkingSession>) {
    println!(
        "📋 Working sessions for {} (page {}, {} total):",
        email, page.page, page.total_elements
    );
    if page.is_empty() {
        println!("No sessions on this page.");
        return;
    }
    for s in &page.content {
        let finished = s
            .work_finished
            .map(time::to_db)
            .unwrap_or_else(|| "…".to_string());
        let duration = s
            .duration_secs
            .map(time::format_secs)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "- #{} | task {} | {} → {} | {} | {}",
            s.id,
            s.task_id,
            time::to_db(s.work_started),
            finished,
            duration,
            if s.is_active { "active" } else { "done" },
        );
    }
}
