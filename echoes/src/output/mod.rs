use echoes_lib::constants::FAILURE_MESSAGE;
use echoes_lib::report::Report;
use crate::cli::Format;

/// Human-readable report, one line per entry
#[must_use] 
pub fn to_text(report: &Report) -> String {
    let mut lines = Vec::new();

    match (&report.processed, report.length) {
        (Some(result), Some(length)) if report.succeeded() => {
            lines.push(format!("Processed: {result}"));
            lines.push(format!("Length: {length}"));
        }
        _ => lines.push(FAILURE_MESSAGE.to_string()),
    }

    lines.push(format!(
        "Count: {}, Doubled: {}, Remainder: {}",
        report.count, report.doubled, report.remainder
    ));
    lines.push(report.status.message().to_string());

    lines.join("\n")
}

#[must_use] 
pub fn to_json(report: &Report) -> String {
    serde_json::json!({
        "processor": report.processor,
        "processed": report.processed,
        "length": report.length,
        "count": report.count,
        "doubled": report.doubled,
        "remainder": report.remainder,
        "is_valid": report.is_valid,
        "is_empty": report.is_empty,
        "status": report.status,
    })
    .to_string()
}

#[must_use] 
pub fn render(report: &Report, format: Format) -> String {
    match format {
        Format::Text => to_text(report),
        Format::Json => to_json(report),
    }
}
