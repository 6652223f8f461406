use gurumi_style::Margins;

/// Page dimensions and the area text may flow into, in points from the
/// top-left corner.
///
/// The bottom margin is the automatic page-break distance: content must end
/// above `height - margins.bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn new(width: f32, height: f32, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margins.left
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margins.right
    }

    pub fn content_top(&self) -> f32 {
        self.margins.top
    }

    pub fn content_width(&self) -> f32 {
        (self.content_right() - self.content_left()).max(0.0)
    }

    /// Lowest y content may reach before a page break.
    pub fn break_y(&self) -> f32 {
        self.height - self.margins.bottom
    }

    /// Width available to a row that starts at `x`.
    pub fn width_from(&self, x: f32) -> f32 {
        (self.content_right() - x).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurumi_style::{PageSize, mm};

    #[test]
    fn a4_content_area() {
        let (width, height) = PageSize::A4.dimensions_pt();
        let page = PageGeometry::new(width, height, Margins::from_mm(10.0, 10.0, 15.0, 10.0));
        assert!((page.content_width() - mm(190.0)).abs() < 0.01);
        assert!((page.break_y() - mm(282.0)).abs() < 0.01);
        assert!((page.width_from(mm(20.0)) - mm(180.0)).abs() < 0.01);
        assert!((page.content_top() - mm(10.0)).abs() < 0.01);
    }
}
