use crate::api::types::Color3;
use crate::assets::labels::LabelId;

/// Billboard text component. The label text itself lives in the
/// `LabelTable`; this component only references it by ID and controls
/// placement and appearance.
#[derive(Debug, Clone, Copy)]
pub struct LabelVisual {
    /// Which registered label text to show.
    pub label: LabelId,
    /// Font size in world units.
    pub size: f32,
    /// Text color.
    pub color: Color3,
    /// Opacity (0.0 = invisible). Zero-alpha labels are skipped.
    pub alpha: f32,
    /// Vertical offset from the body position, in world units.
    pub offset_y: f32,
}

impl LabelVisual {
    pub fn new(label: LabelId, size: f32) -> Self {
        Self {
            label,
            size,
            color: Color3::WHITE,
            alpha: 1.0,
            offset_y: 0.0,
        }
    }

    pub fn with_color(mut self, color: Color3) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_offset_y(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_label_defaults_white_opaque() {
        let l = LabelVisual::new(LabelId(3), 0.5);
        assert_eq!(l.color, Color3::WHITE);
        assert_eq!(l.alpha, 1.0);
        assert_eq!(l.offset_y, 0.0);
    }
}
