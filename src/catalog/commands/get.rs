use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ProductId;
use crate::service::ProductService;

pub fn run<S: ProductService>(service: &S, id: ProductId) -> Result<CmdResult> {
    let product = service.get_by_id(id)?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}
