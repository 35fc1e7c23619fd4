use clap::Parser;
use tracing_subscriber::EnvFilter;
use welfare_portal::{cli, config, error, form_input, portal};
use welfare_portal_common::dashboard::{actions_for, status_badge};
use welfare_portal_common::{catalog, Gated, SchemeCategory};
use cli::{Cli, Commands};
use config::Config;
use error::{PortalError, Result};
use portal::Portal;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
    let portal = Portal::open(&data_dir, config.settings());

    match cli.command {
        Commands::Login => {
            portal.login()?;
            println!("✔ ログインしました");
        }

        Commands::Logout => {
            portal.logout()?;
            println!("✔ ログアウトしました");
        }

        Commands::Schemes => {
            println!("📚 スキーム一覧 (全{}件)\n", catalog::all().len());
            for category in SchemeCategory::ALL {
                println!("■ {}", category.label());
                for scheme in catalog::by_category(category) {
                    println!(
                        "  {:<28} {} [{}]",
                        scheme.id,
                        scheme.name,
                        scheme.amount.unwrap_or(catalog::AMOUNT_NOT_AVAILABLE)
                    );
                }
                println!();
            }
        }

        Commands::Apply { scheme, form } => {
            if !portal.is_logged_in() {
                return Err(PortalError::LoginRequired);
            }

            match catalog::lookup(&scheme) {
                Some(s) => println!("📝 {} ({})\n", s.name, s.category.label()),
                None => println!("⚠ カタログに無いスキームです: {}\n", scheme),
            }

            let form = match form {
                Some(path) => form_input::read_form_file(&path)?,
                None => form_input::prompt_form()?,
            };
            form_input::ensure_complete(&form)?;

            println!("送信中...");
            let now = chrono::Local::now().fixed_offset();
            match portal.apply(&scheme, form, now).await? {
                Gated::Open(receipt) => {
                    println!("✅ 申請を受け付けました");
                    println!("  申請ID: {}", receipt.application_id);
                    println!("  スキーム: {}", receipt.record.scheme_name);
                    println!("  金額: {}", receipt.record.amount);

                    tokio::time::sleep(receipt.redirect_after).await;
                    println!("\n`portal dashboard` で申請状況を確認できます ({})", receipt.redirect.path());
                }
                Gated::Redirect(_) => return Err(PortalError::LoginRequired),
            }
        }

        Commands::Dashboard { json } => {
            let view = match portal.dashboard() {
                Gated::Open(view) => view,
                Gated::Redirect(_) => return Err(PortalError::LoginRequired),
            };
            let stats = view.stats();

            if json {
                let output = serde_json::json!({
                    "applications": view.records,
                    "stats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!("📊 申請状況\n");
            println!("  Total Applications: {}", stats.total_applications);
            println!("  Approved:           {}", stats.approved_count);
            println!("  Pending:            {}", stats.pending_count);
            println!("  Benefits Received:  {}", stats.benefits_display());
            println!();

            for record in &view.records {
                let badge = status_badge(&record.status);
                let actions: Vec<_> = actions_for(record).iter().map(|a| a.label()).collect();
                println!("{} {} [{}]", badge.icon.glyph(), record.scheme_name, badge.label);
                println!(
                    "    ID: {}  Applied: {}  Amount: {}  ({})",
                    record.id,
                    record.applied_date,
                    record.amount,
                    actions.join(" / ")
                );
            }
        }

        Commands::Config { submit_delay_ms, redirect_delay_ms, set_data_dir, show } => {
            let mut config = config;
            let changed = submit_delay_ms.is_some() || redirect_delay_ms.is_some() || set_data_dir.is_some();

            if let Some(ms) = submit_delay_ms {
                config.submit_delay_ms = ms;
            }
            if let Some(ms) = redirect_delay_ms {
                config.redirect_delay_ms = ms;
            }
            if let Some(dir) = set_data_dir {
                config.data_dir = Some(dir);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  ストア: {}", portal.store_path().display());
                println!("  送信待ち: {}ms", config.submit_delay_ms);
                println!("  遷移待ち: {}ms", config.redirect_delay_ms);
                println!("  ログイン: {}", if portal.is_logged_in() { "済み" } else { "未" });
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
