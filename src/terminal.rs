//! A [`ChecklistHost`] that prints the checklist as plain text.

use colored::Colorize;
use gurumi_core::{ChecklistHost, RenderError, StepId};
use gurumi_core::types::Color;
use std::io::Write;

pub struct TerminalChecklist<W: Write> {
    out: W,
    color: bool,
    in_group: bool,
}

impl<W: Write> TerminalChecklist<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: true,
            in_group: false,
        }
    }

    /// Disables ANSI styling, e.g. when output is not a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn indent(&self) -> &'static str {
        if self.in_group { "  " } else { "" }
    }
}

impl<W: Write> ChecklistHost for TerminalChecklist<W> {
    fn title(&mut self, text: &str) -> Result<(), RenderError> {
        if self.color {
            writeln!(self.out, "{}", text.bold())?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        writeln!(self.out, "{}", "=".repeat(text.chars().count()))?;
        Ok(())
    }

    fn info(&mut self, label: &str, value: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{}{}: {}", self.indent(), label, value)?;
        Ok(())
    }

    fn link(&mut self, label: &str, url: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{}{}: <{}>", self.indent(), label, url)?;
        Ok(())
    }

    fn begin_group(&mut self, label: &str, expanded: bool) -> Result<(), RenderError> {
        let marker = if expanded { 'v' } else { '>' };
        writeln!(self.out)?;
        if self.color {
            writeln!(self.out, "{} {}", marker, label.bold())?;
        } else {
            writeln!(self.out, "{} {}", marker, label)?;
        }
        self.in_group = true;
        Ok(())
    }

    fn end_group(&mut self) -> Result<(), RenderError> {
        self.in_group = false;
        Ok(())
    }

    fn toggle(&mut self, id: StepId, label: &str, checked: bool) -> Result<(), RenderError> {
        let mark = if checked { 'x' } else { ' ' };
        writeln!(self.out, "{}[{}] {:<5} {}", self.indent(), mark, id.to_string(), label)?;
        Ok(())
    }

    fn counter(&mut self, tokens: &[String], accent: Color) -> Result<(), RenderError> {
        let text = tokens.join(" ");
        if self.color {
            let styled = text.truecolor(accent.r, accent.g, accent.b).bold();
            writeln!(self.out, "{}      {}", self.indent(), styled)?;
        } else {
            writeln!(self.out, "{}      {}", self.indent(), text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurumi_core::{ChecklistSurface, Component, PatternDocument, PatternSurface};

    #[test]
    fn prints_groups_toggles_and_counters() {
        let mut pattern = PatternDocument {
            project_name: "Frog".into(),
            difficulty: "Easy".into(),
            materials: vec!["Green yarn".into()],
            components: vec![Component::new("Head", vec!["Rnd 1: 6 sc".into(), "Rnds 2-4: sc".into()])],
            ..Default::default()
        };
        pattern.progress.set(StepId::new(0, 0), true);

        let host = TerminalChecklist::new(Vec::new()).with_color(false);
        let out = ChecklistSurface::new(host).render(&pattern).unwrap().into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Frog\n====\nDifficulty: Easy\nMaterials: Green yarn\n\n> Head\n  [x] 0_0   Rnd 1: 6 sc\n  [ ] 0_1   Rnds 2-4: sc\n        2 3 4\n"
        );
    }
}
