// src/output/render.rs — Human-readable assignment text

use crate::core::registry::Registry;
use crate::core::types::Giver;

/// One `receiver: category` line per category, in category order.
pub fn assignment_lines(giver: &Giver) -> String {
    giver
        .assignments()
        .iter()
        .map(|(category, receiver)| format!("{receiver}: {category}\n"))
        .collect()
}

/// The full block for one giver.
pub fn render_giver(giver: &Giver) -> String {
    format!(
        "{}'s Top Secret Assignments:\n\n{}",
        giver.name(),
        assignment_lines(giver)
    )
}

/// Every giver's block, separated by a blank line.
pub fn render_all(registry: &Registry) -> String {
    registry
        .givers()
        .iter()
        .map(render_giver)
        .collect::<Vec<_>>()
        .join("\n")
}

/// File name used for a giver's result file.
pub fn file_name_for(giver: &Giver) -> String {
    format!("{}_SecretSantaAssignments.txt", sanitize(giver.name()))
}

/// Replace path separators and other characters that are unsafe in file names.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
