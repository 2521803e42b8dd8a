//! Turning task views into console lines.

use taskdesk_core::TaskView;

use crate::config::OutputFormat;

pub fn task_line(view: &TaskView, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => view.to_string(),
        OutputFormat::Json => serde_json::to_string(view)?,
    })
}

/// Indented block of task lines, one per view.
pub fn task_block(views: &[TaskView], format: OutputFormat) -> anyhow::Result<String> {
    let mut out = String::new();
    for view in views {
        out.push_str("   ");
        out.push_str(&task_line(view, format)?);
        out.push('\n');
    }
    Ok(out)
}
