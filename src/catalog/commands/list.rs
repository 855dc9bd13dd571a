use crate::commands::CmdResult;
use crate::error::Result;
use crate::service::ProductService;

pub fn run<S: ProductService>(service: &S) -> Result<CmdResult> {
    let products = service.get_all()?;
    Ok(CmdResult::default().with_listed_products(products))
}
