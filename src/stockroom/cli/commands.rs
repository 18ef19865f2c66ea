//! Dispatch for the `stockroom` binary.
//!
//! - `run()`: parses arguments, sets up logging and the context, calls the handler
//! - `init_context()`: resolves the config directory and data file, builds the API
//! - `handle_*()`: one per subcommand; calls the API and prints the result

use super::menu::{delete_prompt, is_confirmation, Menu};
use super::print::{print_messages, render_categories, render_product, render_table};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use stockroom::api::{ConfigAction, StockroomApi, StockroomPaths};
use stockroom::config::{self, StockroomConfig};
use stockroom::error::{Result, StockroomError};
use stockroom::model::{parse_price, parse_quantity, ListView, ProductId, ProductUpdate, SearchMode, SortKey};
use stockroom::store::fs::FileStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: StockroomApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            quantity,
            price,
        }) => handle_add(&mut ctx, &name, &category, &quantity, &price),
        Some(Commands::List { category, sort }) => handle_list(&mut ctx, category, sort),
        Some(Commands::Search { by, query }) => handle_search(&mut ctx, by, &query),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id),
        Some(Commands::Update {
            id,
            name,
            category,
            quantity,
            price,
        }) => {
            let update = ProductUpdate {
                name,
                category,
                quantity,
                price,
            };
            handle_update(&mut ctx, id, &update)
        }
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Categories) => handle_categories(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Menu) | None => handle_menu(&mut ctx),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over the defaults.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config::config_dir().ok_or_else(|| {
        StockroomError::Api(format!(
            "Could not determine a config directory; set {}",
            config::CONFIG_DIR_ENV
        ))
    })?;
    let config = StockroomConfig::load(&config_dir)?;
    let from_env = std::env::var_os(config::DATA_FILE_ENV).map(PathBuf::from);
    let data_file = config::resolve_data_file(cli.file.clone(), from_env, &config);

    tracing::debug!(
        config_dir = %config_dir.display(),
        data_file = %data_file.display(),
        "context ready"
    );

    let store = FileStore::new(&data_file);
    let paths = StockroomPaths {
        config_dir,
        data_file,
    };
    Ok(AppContext {
        api: StockroomApi::new(store, paths),
    })
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    category: &str,
    quantity: &str,
    price: &str,
) -> Result<()> {
    let quantity = parse_quantity(quantity)?;
    let price = parse_price(price)?;
    let result = ctx.api.add_product(name, category, quantity, price)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, category: Option<String>, sort: Option<SortKey>) -> Result<()> {
    let view = match (category, sort) {
        (Some(category), _) => ListView::Category(category),
        (None, Some(key)) => ListView::Sorted(key),
        (None, None) => ListView::All,
    };
    let result = ctx.api.list_products(&view)?;
    if result.listed_products.is_empty() && !result.messages.is_empty() {
        print_messages(&result.messages);
    } else {
        print!("{}", render_table(&result.listed_products));
    }
    Ok(())
}

fn handle_search(ctx: &mut AppContext, mode: SearchMode, query: &str) -> Result<()> {
    let result = ctx.api.search_products(mode, query)?;
    if result.listed_products.is_empty() {
        print_messages(&result.messages);
    } else {
        print!("{}", render_table(&result.listed_products));
    }
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: ProductId) -> Result<()> {
    let result = ctx.api.get_product(id)?;
    for product in &result.listed_products {
        print!("{}", render_product(product));
    }
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: ProductId, update: &ProductUpdate) -> Result<()> {
    let result = ctx.api.update_product(id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: ProductId, yes: bool) -> Result<()> {
    let confirmed = if yes {
        true
    } else {
        let product = ctx.api.get_product(id)?.listed_products.remove(0);
        print!("{} ", delete_prompt(&product.name, id));
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        is_confirmation(&answer)
    };

    let result = ctx.api.delete_product(id, confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    if result.categories.is_empty() {
        print_messages(&result.messages);
    } else {
        print!("{}", render_categories(&result.categories));
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            println!("data-file = {}", config.data_file().display());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()
}
