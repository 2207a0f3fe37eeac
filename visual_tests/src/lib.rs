mod capture;
mod compare;

pub use capture::{capture_scene, CaptureConfig, RingScene, FRAME};
pub use compare::{compare_images, compare_rgba, generate_diff_image, CompareResult};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualTestError {
    #[error("Failed to capture screenshot: {0}")]
    Capture(String),
    #[error("Failed to compare images: {0}")]
    Compare(String),
    #[error("Reference image not found: {0}")]
    ReferenceNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, VisualTestError>;

/// Configuration for a visual test
#[derive(Clone)]
pub struct VisualTestConfig {
    /// Name of the scene, used for file names
    pub name: String,
    pub scene: RingScene,
    /// Similarity threshold (0.0 to 1.0, default 0.99)
    pub similarity_threshold: f64,
}

impl Default for VisualTestConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            scene: RingScene::default(),
            similarity_threshold: 0.99,
        }
    }
}

/// Result of a visual test
pub struct VisualTestResult {
    /// Whether the test passed (similarity >= threshold)
    pub passed: bool,
    /// The similarity score (0.0 to 1.0)
    pub similarity: f64,
    /// Path to the captured screenshot
    pub captured_path: PathBuf,
    /// Path to the reference image
    pub reference_path: PathBuf,
    /// Path to diff image (if generated on failure)
    pub diff_path: Option<PathBuf>,
}

/// Get the path to the references directory
pub fn references_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("references")
}

/// Get the path to a reference image for a scene
pub fn reference_path(name: &str) -> PathBuf {
    references_dir().join(format!("{}.png", name))
}

/// Get the path to the output directory for test artifacts
pub fn output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("output")
}

/// Get the path to a captured screenshot
pub fn captured_path(name: &str) -> PathBuf {
    output_dir().join(format!("{}_captured.png", name))
}

/// Get the path to a diff image
pub fn diff_path(name: &str) -> PathBuf {
    output_dir().join(format!("{}_diff.png", name))
}

/// Run a visual regression test
pub fn run_visual_test(config: &VisualTestConfig) -> Result<VisualTestResult> {
    // Ensure output directory exists
    std::fs::create_dir_all(output_dir())?;

    let ref_path = reference_path(&config.name);
    let cap_path = captured_path(&config.name);

    // Check if reference exists
    if !ref_path.exists() {
        return Err(VisualTestError::ReferenceNotFound(ref_path));
    }

    capture_scene(&CaptureConfig {
        scene: config.scene.clone(),
        output_path: cap_path.clone(),
    })?;

    let compare_result = compare_images(&ref_path, &cap_path)?;
    let passed = compare_result.similarity >= config.similarity_threshold;

    // Generate diff if failed
    let diff = if !passed {
        let diff_file = diff_path(&config.name);
        generate_diff_image(&ref_path, &cap_path, &diff_file)?;
        Some(diff_file)
    } else {
        None
    };

    Ok(VisualTestResult {
        passed,
        similarity: compare_result.similarity,
        captured_path: cap_path,
        reference_path: ref_path,
        diff_path: diff,
    })
}

/// Update the reference image for a scene
pub fn update_reference(name: &str, scene: &RingScene) -> Result<PathBuf> {
    // Ensure references directory exists
    std::fs::create_dir_all(references_dir())?;

    let ref_path = reference_path(name);
    capture_scene(&CaptureConfig {
        scene: scene.clone(),
        output_path: ref_path.clone(),
    })?;

    println!("Updated reference: {}", ref_path.display());
    Ok(ref_path)
}

/// Check if we're in update references mode
pub fn should_update_references() -> bool {
    std::env::var("UPDATE_REFERENCES").is_ok()
}
