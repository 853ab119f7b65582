use clap::Parser;
use colored::*;
use notehub::api::{CmdMessage, ConfigAction, HubApi, MessageLevel};
use notehub::config::HubConfig;
use notehub::error::{HubError, Result};
use notehub::model::Eligibility;
use notehub::session::PublishSession;
use notehub::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const CONFIG_DIR: &str = ".notehub";
const VAULT_ENV: &str = "NOTEHUB_VAULT";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: HubApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Commands::Scan => handle_scan(&ctx),
        Commands::Publish { yes } => handle_publish(&mut ctx, yes),
        Commands::Unpublish { paths } => handle_unpublish(&mut ctx, paths),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let vault = cli
        .vault
        .clone()
        .or_else(|| std::env::var_os(VAULT_ENV).map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let config_dir = vault.join(CONFIG_DIR);
    let config = HubConfig::load(&config_dir).unwrap_or_default();
    let store = FileStore::new(vault);

    AppContext {
        api: HubApi::new(store, config, config_dir),
    }
}

fn handle_scan(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.scan()?;
    if result.scanned.is_empty() {
        println!("{}", "No notes with isPublished: yes found".dimmed());
        return Ok(());
    }
    print_scan(&result.scanned);
    print_messages(&result.messages);
    Ok(())
}

fn handle_publish(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.scan()?;
    if result.scanned.is_empty() {
        println!("{}", "No notes with isPublished: yes found".dimmed());
        return Ok(());
    }

    let session = PublishSession::new(result.scanned);
    let selection = if yes {
        session.into_selection()
    } else {
        match collect_selection(session)? {
            Some(selection) => selection,
            None => {
                println!("{}", "Cancelled.".dimmed());
                return Ok(());
            }
        }
    };

    if selection.is_empty() {
        println!("{}", "Nothing selected.".dimmed());
        return Ok(());
    }

    let result = ctx.api.publish(&selection)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unpublish(ctx: &mut AppContext, paths: Vec<String>) -> Result<()> {
    let public_prefix = format!("{}/", ctx.api.config().public_folder);

    let (public, other): (Vec<String>, Vec<String>) = paths
        .into_iter()
        .partition(|p| p.starts_with(&public_prefix));

    for path in &other {
        println!(
            "{}",
            format!("Skipped (not under {}): {}", public_prefix, path).yellow()
        );
    }
    if public.is_empty() {
        return Ok(());
    }

    let result = ctx.api.unpublish(&public)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_key = match &action {
        ConfigAction::ShowKey(key) => Some(key.clone()),
        _ => None,
    };

    let result = ctx.api.edit_config(action)?;
    if let Some(config) = &result.config {
        print_config(config, show_key.as_deref());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_config(config: &HubConfig, only: Option<&str>) {
    let entries = [
        ("public-folder", config.public_folder.clone()),
        ("notes-folder", config.notes_folder.clone()),
        ("required-fields", config.required_fields.join(", ")),
    ];
    for (key, value) in entries {
        if only.is_none() || only == Some(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Run the interactive confirmation loop. Returns the final selection,
/// or `None` when the user cancels (including EOF on stdin).
fn collect_selection(mut session: PublishSession) -> Result<Option<Vec<String>>> {
    render_session(&session);

    loop {
        print!(
            "Publish {} notes [y/q/<num> to toggle]: ",
            session.selected_count()
        );
        io::stdout().flush().map_err(HubError::Io)?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input).map_err(HubError::Io)?;
        if read == 0 {
            return Ok(None);
        }

        match input.trim() {
            "y" | "Y" => {
                if session.selected_count() == 0 {
                    println!("{}", "Nothing selected.".yellow());
                    continue;
                }
                return Ok(Some(session.into_selection()));
            }
            "q" | "Q" | "" => return Ok(None),
            token => match token.parse::<usize>() {
                Ok(position) => {
                    if session.toggle(position) {
                        render_session(&session);
                    } else {
                        println!("{}", format!("No note numbered {}", position).yellow());
                    }
                }
                Err(_) => println!("{}", format!("Unrecognized input: {}", token).yellow()),
            },
        }
    }
}

fn render_session(session: &PublishSession) {
    let valid: Vec<&Eligibility> = session.valid().collect();
    let invalid: Vec<&Eligibility> = session.invalid().collect();

    if !valid.is_empty() {
        println!("\nReady to publish ({} notes)", valid.len());
        let width = name_column_width(&valid);
        for (i, entry) in valid.iter().enumerate() {
            let marker = if session.is_selected(&entry.path) {
                "[x]"
            } else {
                "[ ]"
            };
            println!(
                "  {:>2} {} {}{}",
                i + 1,
                marker,
                pad_name(&entry.basename, width),
                entry.path.dimmed()
            );
        }
    }

    if !invalid.is_empty() {
        println!(
            "{}",
            format!("\nMissing required fields ({} notes)", invalid.len()).yellow()
        );
        for entry in &invalid {
            println!(
                "     {} {}",
                entry.basename,
                format!("- {}", entry.errors.join(", ")).red()
            );
        }
    }
    println!();
}

fn print_scan(scanned: &[Eligibility]) {
    let valid: Vec<&Eligibility> = scanned.iter().filter(|e| e.valid).collect();
    let invalid: Vec<&Eligibility> = scanned.iter().filter(|e| !e.valid).collect();

    if !valid.is_empty() {
        println!("Ready to publish ({} notes)", valid.len());
        let width = name_column_width(&valid);
        for entry in &valid {
            println!(
                "  {} {}{}",
                "✓".green(),
                pad_name(&entry.basename, width),
                entry.path.dimmed()
            );
        }
    }

    if !invalid.is_empty() {
        println!(
            "{}",
            format!("Missing required fields ({} notes)", invalid.len()).yellow()
        );
        let width = name_column_width(&invalid);
        for entry in &invalid {
            println!(
                "  {} {}{}",
                "✗".red(),
                pad_name(&entry.basename, width),
                entry.errors.join(", ").red()
            );
        }
    }
}

fn name_column_width(entries: &[&Eligibility]) -> usize {
    entries
        .iter()
        .map(|e| e.basename.width())
        .max()
        .unwrap_or(0)
        + 2
}

fn pad_name(name: &str, width: usize) -> String {
    let padding = width.saturating_sub(name.width());
    format!("{}{}", name, " ".repeat(padding))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
