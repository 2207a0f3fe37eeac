use crate::{Result, VisualTestError};
use progress_ring::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Length of one simulated host frame
pub const FRAME: Duration = Duration::from_millis(16);

/// A ring configuration frozen at a point of its animation
#[derive(Clone, Debug)]
pub struct RingScene {
    pub percent: f32,
    pub size: f32,
    pub stroke_width: f32,
    /// Frames to advance before capturing; `None` waits until settled
    pub frames: Option<u32>,
    /// Physical pixels per logical pixel
    pub scale: f32,
}

impl Default for RingScene {
    fn default() -> Self {
        Self {
            percent: 0.75,
            size: 32.0,
            stroke_width: 4.0,
            frames: None,
            scale: 4.0,
        }
    }
}

impl RingScene {
    /// Build the ring and advance it the requested number of frames
    pub fn build(&self) -> ProgressRing {
        let mut ring = progress_ring()
            .size(self.size)
            .stroke_width(self.stroke_width)
            .percent(self.percent);

        match self.frames {
            Some(frames) => {
                for _ in 0..frames {
                    ring.advance_animations(FRAME);
                }
            }
            None => while ring.advance_animations(FRAME) {},
        }
        ring
    }

    /// Paint the scene into an in-memory image
    pub fn render(&self) -> Result<image::RgbaImage> {
        let ring = self.build();
        let mut ctx = PaintContext::new();
        ring.paint(&mut ctx);

        let size = ring.geometry().size();
        render_to_image(&ctx, size, size, self.scale)
            .map_err(|e| VisualTestError::Capture(format!("Failed to render ring: {}", e)))
    }
}

/// Configuration for capturing a screenshot
pub struct CaptureConfig {
    pub scene: RingScene,
    /// Path where the screenshot will be saved
    pub output_path: PathBuf,
}

/// Render a scene and save it as PNG
pub fn capture_scene(config: &CaptureConfig) -> Result<()> {
    let image = config.scene.render()?;
    image.save(&config.output_path)?;

    if !config.output_path.exists() {
        return Err(VisualTestError::Capture(format!(
            "Screenshot was not created at {}",
            config.output_path.display()
        )));
    }

    Ok(())
}
