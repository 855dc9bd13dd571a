use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductId};
use crate::service::ProductService;

/// Replace every field of product `id`.
pub fn run<S: ProductService>(service: &S, id: ProductId, product: Product) -> Result<CmdResult> {
    let updated = service.update(id, product)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated product {}", id)));
    Ok(result.with_affected_products(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::service_with;
    use crate::error::{CatalogError, ServiceError};
    use crate::service::ProductService;
    use crate::store::memory::fixtures::product;

    #[test]
    fn replaces_product_keeping_id() {
        let service = service_with(&["A", "B"]);
        let mut replacement = product("Z", 99.0);
        replacement.id = 40;

        let result = run(&service, 1, replacement).unwrap();
        assert_eq!(result.affected_products[0].id, 1);
        assert_eq!(service.get_by_id(1).unwrap().code_value, "Z");
    }

    #[test]
    fn missing_product_is_an_error() {
        let service = service_with(&[]);
        assert!(matches!(
            run(&service, 1, product("Z", 1.0)),
            Err(CatalogError::Service(ServiceError::NotFound(1)))
        ));
    }
}
