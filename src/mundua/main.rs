use chrono::NaiveDate;
use clap::Parser;
use directories::ProjectDirs;
use mundua::api::{ConfigAction, MunduaApi};
use mundua::config::MunduaConfig;
use mundua::error::Result;
use mundua::model::Status;
use mundua::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;
mod styles;

use args::{Cli, Commands};
use print::{print_country, print_countries, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MunduaApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Status { name, status }) => handle_status(&mut ctx, name, status),
        Some(Commands::Date { name, date }) => handle_date(&mut ctx, name, date),
        Some(Commands::Photo { name, file }) => handle_photo(&mut ctx, name, file),
        Some(Commands::Photos { name }) => handle_photos(&mut ctx, name),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var_os("MUNDUA_DATA_DIR").map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "mundua", "mundua").map(|d| d.data_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from(".mundua"));

    let config = MunduaConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = MunduaApi::new(store, config, data_dir);

    Ok(AppContext { api })
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_countries(search.as_deref())?;
    print_messages(&result.messages);
    print_countries(&result.listed_countries);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, name: String, status: Status) -> Result<()> {
    let result = ctx.api.set_status(&name, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_date(ctx: &mut AppContext, name: String, date: NaiveDate) -> Result<()> {
    let result = ctx.api.set_date(&name, date)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_photo(ctx: &mut AppContext, name: String, file: PathBuf) -> Result<()> {
    let result = ctx.api.add_photo(&name, &file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_photos(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.view_photos(&name)?;
    print_messages(&result.messages);
    if let Some(country) = result.affected_countries.first() {
        if !country.photos.is_empty() {
            print_country(country);
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    if let (true, Some(config)) = (show_all, result.config) {
        for key in MunduaConfig::keys() {
            if let Some(value) = config.get(key) {
                println!("{}: {}", key, value);
            }
        }
    }
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
