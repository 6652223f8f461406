/// The visual role of a block in a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Heading level, clamped to `1..=3`.
    Heading(u8),
    Bullet,
    Numbered,
    Paragraph,
    Spacer,
}

impl BlockKind {
    pub fn heading(level: usize) -> Self {
        BlockKind::Heading(level.clamp(1, 3) as u8)
    }

    /// Steps and narrative lines can carry a round counter; headings cannot.
    pub fn takes_counter(&self) -> bool {
        matches!(
            self,
            BlockKind::Bullet | BlockKind::Numbered | BlockKind::Paragraph
        )
    }
}

/// One output block, produced fresh for every render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBlock {
    pub kind: BlockKind,
    pub text: String,
    pub counter: Option<Vec<String>>,
}

impl RenderBlock {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            counter: None,
        }
    }

    pub fn spacer() -> Self {
        Self::new(BlockKind::Spacer, "")
    }

    pub fn with_counter(mut self, counter: Vec<String>) -> Self {
        self.counter = Some(counter);
        self
    }
}
