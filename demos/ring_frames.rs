//! Simulates a host frame loop and writes every frame of a ring animation as PNG.
//!
//! The ring fills to 75%, is retargeted to 30% halfway through, then settles.
//! Frames land in `$TMPDIR/ring_frames/` unless a directory is passed as the
//! first argument.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use progress_ring::prelude::*;
use progress_ring::renderer::save_png;

const FRAME: Duration = Duration::from_millis(16);
const SCALE: f32 = 4.0;

fn main() -> Result<(), RenderError> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("ring_frames"));
    std::fs::create_dir_all(&out_dir).map_err(image::ImageError::IoError)?;

    let ring = Rc::new(RefCell::new(progress_ring().size(64.0).stroke_width(8.0)));
    let mut scheduler = FrameScheduler::new();
    scheduler.request_frames(&ring);

    let mut frame = 0u32;
    loop {
        if frame == 15 {
            ring.borrow_mut().set_percent(0.3);
            scheduler.request_frames(&ring);
        }

        let active = scheduler.tick(FRAME);

        let mut ctx = PaintContext::new();
        let view = ring.borrow();
        view.paint(&mut ctx);
        let size = view.geometry().size();
        let path = out_dir.join(format!("frame_{:03}.png", frame));
        save_png(&ctx, size, size, SCALE, &path)?;
        log::info!(
            "frame {:3}: value {:.3}, dash offset {:.2}",
            frame,
            view.value(),
            view.dash_offset()
        );

        frame += 1;
        if active == 0 {
            break;
        }
    }

    log::info!("Wrote {} frames to {}", frame, out_dir.display());
    Ok(())
}
