//! Plain-text report rendering.

use super::report::ExtractionReport;
use crate::extractor::Slot;

/// Placeholder shown for a slot that was not recovered
const UNSET: &str = "(not extracted)";

/// Render the extracted slots as titled text sections
///
/// With `include_summary`, a per-agent table of calls and responses follows.
pub fn render_text(report: &ExtractionReport, include_summary: bool) -> String {
    let mut lines = Vec::new();

    for slot in Slot::ALL {
        lines.push(format!("== {} ==", slot.title()));
        lines.push(report.result.get(slot).unwrap_or(UNSET).to_string());
        lines.push(String::new());
    }

    if include_summary {
        lines.push(render_summary(report));
    }

    lines.join("\n").trim_end().to_string()
}

/// Render the trace breakdown table
fn render_summary(report: &ExtractionReport) -> String {
    let summary = &report.summary;
    let mut lines = Vec::new();

    lines.push("=".repeat(60));
    lines.push("TRACE SUMMARY".to_string());
    lines.push("=".repeat(60));
    lines.push(format!("Entries:            {}", summary.total_entries));
    lines.push(format!("Function calls:     {}", summary.function_calls));
    lines.push(format!("Function responses: {}", summary.function_responses));
    lines.push(format!("Final texts:        {}", summary.final_texts));
    lines.push(format!("Slots filled:       {}/3", report.result.filled_count()));

    if !summary.calls_by_agent.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<36} {:>10} {:>10}", "Agent", "Calls", "Responses"));
        lines.push("-".repeat(60));
        for (agent, calls) in &summary.calls_by_agent {
            let responses = summary.responses_by_agent.get(agent).copied().unwrap_or(0);
            lines.push(format!("{:<36} {:>10} {:>10}", agent, calls, responses));
        }
    }

    for (agent, missing) in summary.pending_calls() {
        lines.push(format!("! {} call(s) to {} without a response", missing, agent));
    }

    lines.join("\n")
}
