//! Flattening a pattern record into markdown-like text.
//!
//! The text form is what the paginated surface lays out and what gets
//! exported. It is lossy: the search term and progress are not written.

use gurumi_types::PatternDocument;
use std::fmt::Write;

/// Title used when a pattern has no project name.
pub const FALLBACK_TITLE: &str = "Crochet Pattern";

/// Keeps an element on one line of the text form.
fn one_line(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

pub fn to_text(pattern: &PatternDocument) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_text(&mut out, pattern);
    out
}

fn write_text(out: &mut String, pattern: &PatternDocument) -> std::fmt::Result {
    writeln!(out, "# {}", one_line(pattern.title_or(FALLBACK_TITLE)))?;
    writeln!(out)?;
    writeln!(out, "**Difficulty:** {}", one_line(&pattern.difficulty))?;
    writeln!(out)?;

    writeln!(out, "**Materials:**")?;
    for material in &pattern.materials {
        writeln!(out, "- {}", one_line(material))?;
    }
    writeln!(out)?;

    if let Some(suggestion) = &pattern.hybrid_suggestion {
        writeln!(out, "**Hybrid Mode Suggestion:**")?;
        writeln!(out, "- Type: {}", one_line(&suggestion.kind))?;
        writeln!(out, "- Description: {}", one_line(&suggestion.description))?;
        writeln!(out)?;
    }

    writeln!(out, "## Pattern")?;
    for component in &pattern.components {
        writeln!(out, "### {}", one_line(component.display_name()))?;
        for step in &component.steps {
            writeln!(out, "- {}", one_line(step))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
