use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::service::ProductService;

pub fn run<S: ProductService>(service: &S, product: Product) -> Result<CmdResult> {
    let created = service.create(product)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created product {} ({})",
        created.id, created.code_value
    )));
    Ok(result.with_affected_products(vec![created]))
}
