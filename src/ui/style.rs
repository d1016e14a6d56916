// =====================================================
// FILE: src/ui/style.rs - PANEL STYLE
// =====================================================

use crate::core::constants::MAX_PANEL_SPACING;
use crate::core::prelude::*;
use crate::ui::color::AppColor;
use ratatui::style::{Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleWeight {
    Normal,
    #[default]
    Bold,
}

impl TitleWeight {
    pub fn from_string(weight: &str) -> Result<Self> {
        match weight.trim().to_lowercase().as_str() {
            "normal" | "regular" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            _ => Err(AppError::Validation(format!(
                "Invalid title weight: {}",
                weight
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Visual constants of the console panel.
///
/// Font sizes are kept for hosts that can scale text; a terminal cell has a
/// fixed size, so the terminal renderer only honours padding, spacing, weight
/// and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    pub padding: u16,
    pub title_font_size: u16,
    pub title_weight: TitleWeight,
    pub log_font_size: u16,
    pub row_spacing: u16,
    pub background_color: AppColor,
    pub title_color: AppColor,
    pub text_color: AppColor,
}

crate::impl_default!(
    PanelStyle,
    Self {
        padding: 1,
        title_font_size: 16,
        title_weight: TitleWeight::Bold,
        log_font_size: 12,
        row_spacing: 0,
        background_color: AppColor::new(Color::Black),
        title_color: AppColor::new(Color::White),
        text_color: AppColor::new(Color::Gray),
    }
);

impl PanelStyle {
    pub fn validate(&self) -> Result<()> {
        if self.title_font_size == 0 || self.log_font_size == 0 {
            return Err(AppError::Validation(
                "Font sizes must be greater than 0".to_string(),
            ));
        }
        if self.padding > MAX_PANEL_SPACING {
            return Err(AppError::Validation(format!(
                "padding {} exceeds {}",
                self.padding, MAX_PANEL_SPACING
            )));
        }
        if self.row_spacing > MAX_PANEL_SPACING {
            return Err(AppError::Validation(format!(
                "row_spacing {} exceeds {}",
                self.row_spacing, MAX_PANEL_SPACING
            )));
        }
        Ok(())
    }

    pub fn container_style(&self) -> Style {
        Style::default()
            .bg(self.background_color.into())
            .fg(self.text_color.into())
    }

    pub fn title_style(&self) -> Style {
        let style = Style::default()
            .bg(self.background_color.into())
            .fg(self.title_color.into());
        match self.title_weight {
            TitleWeight::Bold => style.add_modifier(Modifier::BOLD),
            TitleWeight::Normal => style,
        }
    }

    pub fn row_style(&self) -> Style {
        Style::default()
            .bg(self.background_color.into())
            .fg(self.text_color.into())
    }
}
