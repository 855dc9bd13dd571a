use super::logging;
use super::print::{print_config, print_json, print_messages, print_product_detail, print_products};
use super::setup::{Cli, Commands};
use catalog::commands::config::ConfigAction;
use catalog::commands::CmdResult;
use catalog::error::Result;
use catalog::init::{initialize, CatalogContext};
use clap::Parser;
use std::path::PathBuf;

/// How a successful result should be shown.
enum View {
    Messages,
    List,
    Detail,
    Config,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.data.as_deref())?;

    let (result, view) = dispatch(&ctx, cli.command)?;
    if cli.json {
        print_json(&result)?;
    } else {
        render(&result, view);
    }

    // Soft failures were already shown as messages
    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn dispatch(ctx: &CatalogContext, command: Option<Commands>) -> Result<(CmdResult, View)> {
    let api = &ctx.api;
    match command {
        None | Some(Commands::List) => Ok((api.list_products()?, View::List)),
        Some(Commands::Get { id }) => Ok((api.get_product(&id)?, View::Detail)),
        Some(Commands::Search { price_gt }) => Ok((api.search_products(&price_gt)?, View::List)),
        Some(Commands::Create(args)) => Ok((api.create_product(args.into())?, View::Messages)),
        Some(Commands::Update { id, product }) => {
            Ok((api.update_product(&id, product.into())?, View::Messages))
        }
        Some(Commands::Patch { id, patch }) => {
            Ok((api.patch_product(&id, patch.into())?, View::Messages))
        }
        Some(Commands::Delete { id }) => Ok((api.delete_product(&id)?, View::Messages)),
        Some(Commands::Doctor { fix }) => Ok((api.doctor(fix)?, View::Messages)),
        Some(Commands::Init) => Ok((api.init()?, View::Messages)),
        Some(Commands::Config { key, value }) => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            Ok((api.config(action)?, View::Config))
        }
    }
}

fn render(result: &CmdResult, view: View) {
    match view {
        View::Messages => {}
        View::List => print_products(&result.listed_products),
        View::Detail => {
            for product in &result.listed_products {
                print_product_detail(product);
            }
        }
        View::Config => {
            if result.messages.is_empty() {
                if let Some(config) = &result.config {
                    print_config(config);
                }
            }
        }
    }
    print_messages(&result.messages);
}
