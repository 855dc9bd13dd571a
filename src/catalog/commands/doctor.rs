use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::service::ProductService;

pub fn run<S: ProductService>(service: &S, fix: bool) -> Result<CmdResult> {
    let report = service.doctor(fix)?;
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result.with_report(report));
    }

    result.add_message(CmdMessage::warning("Inconsistencies found:"));
    if !report.duplicate_ids.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - Ids shared by several products: {}",
            join(&report.duplicate_ids)
        )));
    }
    if !report.duplicate_codes.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - Code values shared by several products: {}",
            report.duplicate_codes.join(", ")
        )));
    }
    if !report.invalid_expirations.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - Expiration not in dd/mm/yyyy form for ids: {}",
            join(&report.invalid_expirations)
        )));
    }

    if fix {
        for (old, new) in &report.reassigned {
            result.add_message(CmdMessage::success(format!(
                "  - Reassigned duplicate id {} to {}",
                old, new
            )));
        }
    } else if !report.duplicate_ids.is_empty() {
        result.add_message(CmdMessage::info("Run with --fix to reassign duplicate ids."));
    }

    Ok(result.with_report(report))
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
