//! Widget configuration and its default tuning.

use nodelink_geom::GeomOptions;
use serde::{Deserialize, Serialize};

/// Hints handed to the external force-layout engine. The engine itself is a
/// black box; these are just the tuning values the widget forwards to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceOptions {
    pub charge: f64,
    pub link_strength: f64,
    pub friction: f64,
    pub link_distance: f64,
    pub gravity: f64,
    pub theta: f64,
    pub cooling_alpha: f64,
    pub collision_alpha: f64,
    pub collision_radius: f64,
    /// Simulation steps per animation frame; high values approximate a
    /// static layout.
    pub tick_per_frame: u32,
    pub static_layout: bool,
}

impl Default for ForceOptions {
    fn default() -> Self {
        Self {
            charge: -240.0,
            link_strength: 1.0,
            friction: 0.9,
            link_distance: 100.0,
            gravity: 0.05,
            theta: 0.1,
            cooling_alpha: 0.0,
            collision_alpha: 0.9,
            collision_radius: 0.0,
            tick_per_frame: 10,
            static_layout: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    pub width: f64,
    pub height: f64,
    pub initial_scale: f64,
    /// `[min, max]` zoom scale the host clamps to.
    pub zoom_scale_extent: (f64, f64),
    pub autofit: bool,
    pub geom: GeomOptions,
    pub force: ForceOptions,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            initial_scale: 1.0,
            zoom_scale_extent: (0.2, 10.0),
            autofit: false,
            geom: GeomOptions::default(),
            force: ForceOptions::default(),
        }
    }
}
