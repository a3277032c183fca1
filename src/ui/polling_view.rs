use crate::api::models::Contact;
use crate::directory;

pub fn render(contacts: &[Contact]) -> String {
    let summary = directory::polling_summary(contacts);
    let mut lines = super::heading("Polling Day - LIVE");
    lines.push(format!(
        "Network Turnout: {:.1}% ({} / {} voted)",
        summary.turnout, summary.voted, summary.total
    ));
    lines.push(format!("Still to vote: {}", summary.not_voted()));
    for (tier, group) in [
        ("High", &summary.high_priority),
        ("Medium", &summary.medium_priority),
        ("Low", &summary.low_priority),
    ] {
        lines.push(format!("  {tier} ({})", group.len()));
        if group.is_empty() {
            lines.push("    Everyone in this group has voted.".into());
        }
        for c in group.iter() {
            lines.push(format!("    {} ({})", c.name, c.app_status));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}
