use catalog::commands::{CmdMessage, CmdResult, MessageLevel};
use catalog::config::CatalogConfig;
use catalog::error::Result;
use catalog::model::Product;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 32;
const CODE_WIDTH: usize = 12;
const QTY_WIDTH: usize = 8;
const PRICE_WIDTH: usize = 10;
const PUBLISHED_MARKER: &str = "●";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

pub(super) fn print_products(products: &[Product]) {
    print!("{}", render_product_list(products));
}

pub(super) fn print_product_detail(product: &Product) {
    print!("{}", render_product_detail(product));
}

pub(super) fn print_config(config: &CatalogConfig) {
    print!("{}", render_config(config));
}

pub(super) fn print_json(result: &CmdResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

fn render_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    for product in products {
        let id = format!("{:>width$}. ", product.id, width = ID_WIDTH);
        let name = pad_to_width(&truncate_to_width(&product.name, NAME_WIDTH), NAME_WIDTH);
        let code = pad_to_width(
            &truncate_to_width(&product.code_value, CODE_WIDTH),
            CODE_WIDTH,
        );
        let qty = format!("{:>width$}", product.quantity, width = QTY_WIDTH);
        let price = format!("{:>width$.2}", product.price, width = PRICE_WIDTH);
        let marker = if product.is_published {
            PUBLISHED_MARKER.green().to_string()
        } else {
            " ".to_string()
        };

        out.push_str(&format!(
            "{}{} {} {} {} {} {}\n",
            id.yellow(),
            name,
            code.cyan(),
            qty,
            price.bold(),
            product.expiration.dimmed(),
            marker
        ));
    }
    out
}

fn render_product_detail(product: &Product) -> String {
    let published = if product.is_published { "yes" } else { "no" };
    let rows = [
        ("id", product.id.to_string()),
        ("name", product.name.clone()),
        ("code", product.code_value.clone()),
        ("quantity", product.quantity.to_string()),
        ("price", format!("{:.2}", product.price)),
        ("expiration", product.expiration.clone()),
        ("published", published.to_string()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:>12}  {}\n", label.dimmed(), value));
    }
    out
}

fn render_config(config: &CatalogConfig) -> String {
    format!(
        "products_file = {}\nid_policy = {}\npretty = {}\n",
        config.products_file, config.id_policy, config.pretty
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
