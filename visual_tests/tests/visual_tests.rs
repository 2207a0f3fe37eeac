use visual_tests::{
    compare_rgba, run_visual_test, should_update_references, update_reference, RingScene,
    VisualTestConfig, VisualTestError,
};

/// Stored references tolerate small antialiasing differences between rasterizers
const SIMILARITY_THRESHOLD: f64 = 0.99;

/// Helper macro to generate visual test functions
macro_rules! visual_test {
    ($name:ident, $scene_name:literal, $scene:expr) => {
        #[test]
        fn $name() {
            let scene: RingScene = $scene;
            if should_update_references() {
                update_reference($scene_name, &scene).expect("Failed to update reference");
                return;
            }

            let result = run_visual_test(&VisualTestConfig {
                name: $scene_name.to_string(),
                scene,
                similarity_threshold: SIMILARITY_THRESHOLD,
            })
            .expect("Visual test failed to run");

            assert!(
                result.passed,
                "Visual regression detected for '{}': similarity {:.4}% (threshold: {:.1}%)\n\
                 Reference: {}\n\
                 Captured:  {}\n\
                 Diff:      {}",
                $scene_name,
                result.similarity * 100.0,
                SIMILARITY_THRESHOLD * 100.0,
                result.reference_path.display(),
                result.captured_path.display(),
                result
                    .diff_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "N/A".to_string())
            );
        }
    };
}

visual_test!(test_default_ring, "default_ring", RingScene::default());
visual_test!(
    test_empty_ring,
    "empty_ring",
    RingScene {
        percent: 0.0,
        ..RingScene::default()
    }
);
visual_test!(
    test_full_ring,
    "full_ring",
    RingScene {
        percent: 1.0,
        ..RingScene::default()
    }
);
visual_test!(
    test_large_thin_ring,
    "large_thin_ring",
    RingScene {
        percent: 0.4,
        size: 128.0,
        stroke_width: 1.0,
        scale: 1.0,
        ..RingScene::default()
    }
);
visual_test!(
    test_mid_animation,
    "mid_animation",
    RingScene {
        frames: Some(8),
        ..RingScene::default()
    }
);

#[test]
fn test_rendering_is_deterministic() {
    let first = RingScene::default().render().unwrap();
    let second = RingScene::default().render().unwrap();
    let result = compare_rgba(&first, &second).unwrap();
    assert!(result.similarity > 0.9999);
}

#[test]
fn test_animation_progress_is_visible() {
    let early = RingScene {
        frames: Some(2),
        ..RingScene::default()
    }
    .render()
    .unwrap();
    let settled = RingScene::default().render().unwrap();

    let result = compare_rgba(&early, &settled).unwrap();
    assert!(result.similarity < 0.995);
}

#[test]
fn test_missing_reference_is_an_error() {
    let result = run_visual_test(&VisualTestConfig {
        name: "no_such_scene".to_string(),
        ..VisualTestConfig::default()
    });
    assert!(matches!(result, Err(VisualTestError::ReferenceNotFound(_))));
}

#[test]
fn test_wrong_percent_falls_below_threshold() {
    let expected = RingScene::default().render().unwrap();
    let regressed = RingScene {
        percent: 0.65,
        ..RingScene::default()
    }
    .render()
    .unwrap();

    let result = compare_rgba(&expected, &regressed).unwrap();
    assert!(result.similarity < SIMILARITY_THRESHOLD);
}
