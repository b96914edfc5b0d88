use crate::layout::Rect;
use crate::model::{Alignment, MenuModel};
use crate::projection::{Row, row_item};
use crate::theme::Theme;
use crate::transition::MenuFrame;

/// Intermediate draw command for a row background quad.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCommand {
    pub rect: Rect,
    pub bg_color: [f32; 4],
    pub corner_radius: f32,
    /// Round the two top corners (first row of a run).
    pub round_top: bool,
    /// Round the two bottom corners (last row of a run).
    pub round_bottom: bool,
}

/// Intermediate draw command for a row title.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    /// Box the text is aligned within (the row rect minus icon space).
    pub rect: Rect,
    pub color: [f32; 4],
    pub font_size: f32,
    pub bold: bool,
    pub align: Alignment,
}

/// Intermediate draw command for a row icon. The host resolves `name`
/// against its own asset store.
#[derive(Debug, Clone, PartialEq)]
pub struct IconCommand {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

/// Collects draw commands for one frame of the menu.
/// Decouples presentation logic from whatever renders it.
#[derive(Debug, Default)]
pub struct DrawList {
    pub panels: Vec<PanelCommand>,
    pub texts: Vec<TextCommand>,
    pub icons: Vec<IconCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.panels.clear();
        self.texts.clear();
        self.icons.clear();
    }
}

fn with_opacity(color: [f32; 4], opacity: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * opacity]
}

struct RowContent<'a> {
    title: &'a str,
    icon: Option<&'a str>,
    alignment: Alignment,
    bold: bool,
}

fn row_content(model: &MenuModel, row: Row) -> Option<RowContent<'_>> {
    match row {
        Row::Group { id, .. } => {
            let entry = model.get(id)?;
            Some(RowContent {
                title: entry.title(),
                icon: entry.icon().map(|i| i.name()),
                alignment: entry.alignment(),
                bold: true,
            })
        }
        _ => {
            let item = row_item(model, row)?;
            Some(RowContent {
                title: item.title(),
                icon: item.icon().map(|i| i.name()),
                alignment: item.alignment(),
                bold: false,
            })
        }
    }
}

fn emit_row(dl: &mut DrawList, content: RowContent<'_>, rect: Rect, opacity: f32, theme: &Theme) {
    let mut text_rect = rect;

    if let Some(name) = content.icon {
        let icon_y = rect.y + (rect.height - theme.icon_size) / 2.0;
        let icon_x = match content.alignment {
            // Right-aligned rows carry the icon on the right of the text.
            Alignment::Right => rect.right() - theme.icon_padding - theme.icon_size,
            _ => rect.x + theme.icon_padding,
        };
        dl.icons.push(IconCommand {
            name: name.to_string(),
            x: icon_x,
            y: icon_y,
            size: theme.icon_size,
            opacity,
        });

        // Keep the title clear of the icon strip.
        let strip = theme.icon_padding * 2.0 + theme.icon_size;
        match content.alignment {
            Alignment::Right => text_rect.width = (text_rect.width - strip).max(0.0),
            _ => {
                text_rect.x += strip;
                text_rect.width = (text_rect.width - strip).max(0.0);
            }
        }
    }

    dl.texts.push(TextCommand {
        text: content.title.to_string(),
        rect: text_rect,
        color: with_opacity(theme.text_color, opacity),
        font_size: theme.font_size,
        bold: content.bold,
        align: content.alignment,
    });
}

/// Walk the visible rows and emit draw commands for the current frame.
///
/// Rows that start below the surface rectangle are skipped, matching the
/// clamped layout height. The frame opacity is folded into every command so
/// the center-anchor fade needs no renderer support beyond alpha.
pub fn render_menu(
    dl: &mut DrawList,
    model: &MenuModel,
    rows: &[Row],
    display_cancel: bool,
    frame: MenuFrame,
    theme: &Theme,
) {
    let surface = frame.rect;
    let opacity = frame.opacity;
    if surface.width <= 0.0 || opacity <= 0.0 {
        return;
    }

    let bg = with_opacity(theme.surface_color, opacity);

    for (i, row) in rows.iter().enumerate() {
        let y = surface.y + i as f32 * theme.row_height;
        if y >= surface.bottom() {
            break;
        }
        let rect = Rect {
            x: surface.x,
            y,
            width: surface.width,
            height: theme.row_height,
        };
        dl.panels.push(PanelCommand {
            rect,
            bg_color: bg,
            corner_radius: theme.corner_radius,
            round_top: i == 0,
            round_bottom: i == rows.len() - 1,
        });
        if let Some(content) = row_content(model, *row) {
            emit_row(dl, content, rect, opacity, theme);
        }
    }

    if display_cancel {
        let y = surface.y + rows.len() as f32 * theme.row_height + theme.cancel_gap;
        if y < surface.bottom() {
            let rect = Rect {
                x: surface.x,
                y,
                width: surface.width,
                height: theme.row_height,
            };
            // The cancel row is its own run, rounded on all four corners.
            dl.panels.push(PanelCommand {
                rect,
                bg_color: bg,
                corner_radius: theme.corner_radius,
                round_top: true,
                round_bottom: true,
            });
            dl.texts.push(TextCommand {
                text: theme.cancel_title.clone(),
                rect,
                color: with_opacity(theme.cancel_text_color, opacity),
                font_size: theme.font_size,
                bold: true,
                align: Alignment::Center,
            });
        }
    }
}
