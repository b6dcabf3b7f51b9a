use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command: prepare the configuration file (unless in
/// test mode), create the database schema and run pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing worktrack…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &cfg.database);

    let conn = db::open_db(&cfg.database)?;
    db::init_db(&conn)?;

    messages::success("Database initialized.");
    Ok(())
}
