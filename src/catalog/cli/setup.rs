use catalog::model::{Product, ProductPatch};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog", bin_name = "catalog", version)]
#[command(about = "Product catalog kept in a single JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the nearest .catalog, then the user data dir)
    #[arg(long, global = true, env = "CATALOG_DATA", value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show one product
    Get { id: String },

    /// Find products priced above a threshold
    Search {
        #[arg(long = "price-gt", value_name = "PRICE", allow_negative_numbers = true)]
        price_gt: String,
    },

    /// Add a product
    Create(ProductArgs),

    /// Replace every field of a product
    Update {
        id: String,
        #[command(flatten)]
        product: ProductArgs,
    },

    /// Change some fields of a product
    Patch {
        id: String,
        #[command(flatten)]
        patch: PatchArgs,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Delete { id: String },

    /// Check the collection for duplicate ids and codes
    Doctor {
        /// Give duplicate ids fresh values
        #[arg(long)]
        fix: bool,
    },

    /// Create the data directory and an empty collection
    Init,

    /// Show or change configuration
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,

    /// Unique product code
    #[arg(long = "code")]
    pub code_value: String,

    /// Expiration date, dd/mm/yyyy
    #[arg(long)]
    pub expiration: String,

    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    #[arg(long)]
    pub published: bool,
}

impl From<ProductArgs> for Product {
    fn from(args: ProductArgs) -> Self {
        Product::new(
            args.name,
            args.quantity,
            args.code_value,
            args.published,
            args.expiration,
            args.price,
        )
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatchArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    #[arg(long = "code")]
    pub code_value: Option<String>,

    #[arg(long)]
    pub expiration: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    #[arg(long, value_name = "BOOL")]
    pub published: Option<bool>,
}

impl From<PatchArgs> for ProductPatch {
    fn from(args: PatchArgs) -> Self {
        ProductPatch {
            name: args.name,
            quantity: args.quantity,
            code_value: args.code_value,
            is_published: args.published,
            expiration: args.expiration,
            price: args.price,
        }
    }
}
