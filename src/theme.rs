use serde::{Deserialize, Serialize};

/// Centralized visual style and metric constants.
///
/// Injected wherever the layout engine or draw pass needs a number, so menu
/// geometry stays a pure function of explicit inputs. Hosts can ship a
/// partial RON file overriding individual fields; everything else keeps its
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    // -- Color palette (sRGB RGBA) --
    /// Row background: near-white, slightly translucent.
    pub surface_color: [f32; 4],
    /// Item and group title text.
    pub text_color: [f32; 4],
    /// Cancel row text.
    pub cancel_text_color: [f32; 4],

    // -- Type --
    /// Row title size in points. Groups and cancel render bold at the same
    /// size.
    pub font_size: f32,

    // -- Metrics --
    /// Fixed height of every row in points.
    pub row_height: f32,
    /// Margin between the list surface and the container edges.
    pub side_margin: f32,
    /// Gap separating the cancel row from the list above it.
    pub cancel_gap: f32,
    /// Corner radius applied to the first and last rows of a run.
    pub corner_radius: f32,
    /// Gap between an icon and its title.
    pub icon_padding: f32,
    /// Icon edge length.
    pub icon_size: f32,

    // -- Animation --
    /// Duration of entrance, exit, and toggle animations in milliseconds.
    pub animation_ms: u64,

    // -- Strings --
    /// Title of the trailing cancel row.
    pub cancel_title: String,
}

/// Convert a hex color (#RRGGBB) to sRGB [f32; 4] with alpha 1.0.
const fn hex(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Convert a hex color with custom alpha.
const fn hex_a(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_color: hex_a(0xFF, 0xFF, 0xFF, 0.95),
            text_color: hex(0x00, 0x7A, 0xFF), // system tint blue
            cancel_text_color: hex(0x00, 0x7A, 0xFF),

            font_size: 18.0,

            row_height: 44.0,
            side_margin: 20.0,
            cancel_gap: 10.0, // half the side margin
            corner_radius: 8.0,
            icon_padding: 5.0,
            icon_size: 24.0,

            animation_ms: 200,

            cancel_title: "Cancel".to_string(),
        }
    }
}

impl Theme {
    /// Load a theme from a RON file. Logs a warning and falls back to the
    /// default theme on any read or parse failure; a missing theme file is
    /// never fatal to the host.
    pub fn load(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("failed to read {}: {}, using default theme", path, e);
                return Self::default();
            }
        };
        match ron::from_str::<Theme>(&content) {
            Ok(theme) => theme,
            Err(e) => {
                log::warn!("failed to parse RON {}: {}, using default theme", path, e);
                Self::default()
            }
        }
    }
}
