use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ProductId, ProductPatch};
use crate::service::ProductService;

pub fn run<S: ProductService>(service: &S, id: ProductId, patch: &ProductPatch) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Nothing to change for product {}",
            id
        )));
        return Ok(result);
    }

    let patched = service.patch(id, patch)?;
    result.add_message(CmdMessage::success(format!("Updated product {}", id)));
    Ok(result.with_affected_products(vec![patched]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::service_with;
    use crate::commands::MessageLevel;
    use crate::service::ProductService;

    #[test]
    fn patches_given_fields() {
        let service = service_with(&["A"]);
        let patch = ProductPatch {
            price: Some(1.25),
            is_published: Some(false),
            ..Default::default()
        };

        let result = run(&service, 1, &patch).unwrap();
        let stored = service.get_by_id(1).unwrap();
        assert_eq!(stored.price, 1.25);
        assert!(!stored.is_published);
        assert_eq!(stored.name, "Product A");
        assert_eq!(result.affected_products, vec![stored]);
    }

    #[test]
    fn empty_patch_does_not_touch_store() {
        let service = service_with(&["A"]);
        let saves = service.repository().storage().backend().save_count();

        let result = run(&service, 1, &ProductPatch::default()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.affected_products.is_empty());
        assert_eq!(
            service.repository().storage().backend().save_count(),
            saves
        );
    }
}
