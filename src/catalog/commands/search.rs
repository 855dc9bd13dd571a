use crate::commands::CmdResult;
use crate::error::Result;
use crate::service::ProductService;

/// Products priced strictly above `price_gt`.
pub fn run<S: ProductService>(service: &S, price_gt: f64) -> Result<CmdResult> {
    let products = service.search_price_gt(price_gt)?;
    Ok(CmdResult::default().with_listed_products(products))
}
