//! Classified lines to render blocks.

use gurumi_text::{ClassifiedLine, LineKind, classify_text, round_counter};
use gurumi_types::{BlockKind, RenderBlock};

fn block_from_line(line: ClassifiedLine) -> RenderBlock {
    let kind = match line.kind {
        LineKind::Heading(level) => BlockKind::heading(level),
        LineKind::Blank => return RenderBlock::spacer(),
        LineKind::Bullet => BlockKind::Bullet,
        LineKind::Numbered => BlockKind::Numbered,
        LineKind::Narrative => BlockKind::Paragraph,
    };
    let counter = kind
        .takes_counter()
        .then(|| round_counter(&line.text))
        .flatten();
    let block = RenderBlock::new(kind, line.text);
    match counter {
        Some(tokens) => block.with_counter(tokens),
        None => block,
    }
}

pub fn blocks_from_lines(lines: impl IntoIterator<Item = ClassifiedLine>) -> Vec<RenderBlock> {
    lines.into_iter().map(block_from_line).collect()
}

/// Classifies `text` line by line and attaches round counters.
pub fn blocks_from_text(text: &str) -> Vec<RenderBlock> {
    blocks_from_lines(classify_text(text))
}
