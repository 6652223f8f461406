use crate::error::PipelineError;
use gurumi_types::PatternDocument;

/// A way of presenting a pattern.
///
/// Surfaces are single-use: `render` consumes the surface and hands back
/// whatever it produced (PDF bytes, the filled checklist host).
pub trait PatternSurface {
    type Output;

    fn render(self, pattern: &PatternDocument) -> Result<Self::Output, PipelineError>;
}
