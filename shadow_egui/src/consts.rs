use egui::Color32;

/// Native window settings
pub mod window {
    pub const TITLE: &str = "Custom Shadow";
    pub const INNER_SIZE: [f32; 2] = [420.0, 820.0];
    pub const MIN_INNER_SIZE: [f32; 2] = [320.0, 480.0];
}

/// Spacing around the preview card and the control list
pub mod layout {
    /// Padding between the panel edge and the preview card
    pub const CARD_PADDING: i8 = 40;
    /// Padding around the slider list
    pub const LIST_PADDING: i8 = 50;
    /// Vertical gap between list items
    pub const ITEM_SPACING: f32 = 10.0;
    pub const HEADER_PADDING: i8 = 4;
    /// Diameter of the color picker swatch
    pub const SWATCH_SIZE: f32 = 20.0;
}

/// UI color palette
pub mod colors {
    use super::Color32;

    pub const BACKGROUND: Color32 = Color32::WHITE;
    pub const CARD: Color32 = Color32::WHITE;
    pub const HEADER: Color32 = Color32::WHITE;
    pub const SWATCH_STROKE: Color32 = Color32::from_gray(200);
}
