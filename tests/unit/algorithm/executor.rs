//! Tests for the name-to-artwork pipeline

#[cfg(test)]
mod tests {
    use namefractal::FractalError;
    use namefractal::algorithm::{FractalPipeline, PipelineConfig};

    fn small_pipeline() -> FractalPipeline {
        FractalPipeline::new(PipelineConfig {
            size: 12,
            iterations: 8,
        })
        .expect("Failed to create pipeline")
    }

    // Tests the default configuration
    // Verified by swapping size and iterations
    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.size, 500);
        assert_eq!(config.iterations, 100);
    }

    // Tests a name flows through encoding, derivation, and generation
    // Verified by deriving parameters from the fallback for every name
    #[test]
    fn test_run_two_letter_name() {
        let artwork = small_pipeline().run("AB").expect("Pipeline failed");

        assert_eq!(artwork.name, "AB");
        assert_eq!(artwork.sequence.values(), &[1, 2]);
        assert_eq!(artwork.parameters.scale_x, 4);
        assert_eq!(artwork.gradient.base_color(), 3);
        assert_eq!(artwork.field.size(), 12);
        assert_eq!(artwork.field.iterations(), 8);
        assert_eq!(artwork.title(), "Fractal Art for AB");
    }

    // Tests identical names produce identical artworks
    // Verified by seeding the noise term from the clock
    #[test]
    fn test_run_is_deterministic() {
        let pipeline = small_pipeline();
        let first = pipeline.run("Grace Hopper").expect("Pipeline failed");
        let second = pipeline.run("Grace Hopper").expect("Pipeline failed");

        assert_eq!(first, second);
    }

    // Tests letterless names fall back for parameters but not for the gradient
    // Verified by building the gradient from the fallback sequence
    #[test]
    fn test_letterless_name_uses_fallback() {
        let artwork = small_pipeline().run("123").expect("Pipeline failed");

        assert!(artwork.sequence.is_empty());
        assert_eq!(artwork.parameters.scale_x, 2);
        assert!((artwork.parameters.c_real - 1.0).abs() < f64::EPSILON);
        assert_eq!(artwork.gradient.base_color(), 0);
    }

    // Tests stepping a pending artwork matches a full run
    // Verified by skipping the final round in finish
    #[test]
    fn test_stepwise_matches_run() {
        let pipeline = small_pipeline();
        let mut pending = pipeline.start("Ada").expect("Failed to start");

        assert_eq!(pending.name(), "Ada");
        assert_eq!(pending.iterations(), 8);
        assert_eq!(pending.sequence().values(), &[1, 4, 1]);
        assert_eq!(pending.gradient().base_color(), 6);

        let mut rounds = 0;
        while pending.execute_iteration() {
            rounds += 1;
        }
        assert_eq!(pending.rounds_completed(), 8);
        assert!(rounds <= 8);
        assert!(!pending.execute_iteration());

        let stepped = pending.finish();
        assert_eq!(stepped, pipeline.run("Ada").expect("Pipeline failed"));
    }

    // Tests the dynamic colormap follows the gradient
    // Verified by returning the magma table
    #[test]
    fn test_artwork_colormap() {
        let artwork = small_pipeline().run("AB").expect("Pipeline failed");
        let colormap = artwork.colormap().expect("Failed to build colormap");

        assert_eq!(colormap.name(), "DynamicBluePurpleCmap");
        assert_eq!(colormap.color_at(0.0), [1, 0, 3, 255]);
    }

    // Tests invalid run parameters are rejected up front
    // Verified by deferring validation to generation
    #[test]
    fn test_invalid_config_rejected() {
        for (size, iterations) in [(0, 10), (10, 0), (10_001, 10)] {
            let result = FractalPipeline::new(PipelineConfig { size, iterations });
            assert!(
                matches!(result, Err(FractalError::InvalidParameter { .. })),
                "size={size} iterations={iterations}"
            );
        }
    }
}
