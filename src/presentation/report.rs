// Human and JSON output for audit and deploy results
use crate::application::deploy_service::{AuditReport, DeploySummary};

pub fn render_audit(report: &AuditReport, target: &str) -> String {
    if report.is_clean() {
        return format!("✓ '{}' → {}: all content matched", report.board_title, target);
    }

    let mut out = format!(
        "✗ '{}' → {}: {} dashboard(s) and {} look(s) missing",
        report.board_title,
        target,
        report.missing_dashboards.len(),
        report.missing_looks.len()
    );
    for dash in &report.missing_dashboards {
        out.push_str(&format!("\n  dashboard {}  {}", dash.dash_id, dash.dash_title));
    }
    for look in &report.missing_looks {
        out.push_str(&format!("\n  look {}  {}", look.look_id, look.look_title));
    }
    out
}

pub fn print_audit(report: &AuditReport, target: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let value = serde_json::json!({ "target": target, "audit": report });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render_audit(report, target));
    }
    Ok(())
}

pub fn print_deploy(summary: &DeploySummary, target: &str) {
    println!(
        "✓ '{}' → {} (board {}): {} section(s), {} item(s)",
        summary.board_title, target, summary.board_id, summary.sections, summary.items
    );
    if summary.skipped_items > 0 {
        println!("  {} item(s) skipped, no match on target", summary.skipped_items);
    }
}
