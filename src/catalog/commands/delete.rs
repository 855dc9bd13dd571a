use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductId;
use crate::service::ProductService;

pub fn run<S: ProductService>(service: &S, id: ProductId) -> Result<CmdResult> {
    service.delete(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted product {}", id)));
    Ok(result)
}
