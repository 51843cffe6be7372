pub(crate) use super::*;

#[test]
fn test_default_config_validates() {
    assert!(PipelineConfig::default().validate().is_ok());
}

#[test]
fn test_builder_methods() {
    let config = PipelineConfig::default()
        .with_n(16)
        .with_activation(Activation::Sigmoid)
        .with_pool_window(3, 2)
        .with_pool_stride(1, 1)
        .with_pool_padding(0)
        .with_dropout(0.25)
        .with_matrix_kind(MatrixKind::SmallInt)
        .with_value_range(-2.0, 2.0)
        .with_seed(7);

    assert_eq!(config.n, 16);
    assert_eq!(config.activation, Activation::Sigmoid);
    assert_eq!((config.pool_h, config.pool_w), (3, 2));
    assert_eq!((config.stride_h, config.stride_w), (Some(1), Some(1)));
    assert_eq!(config.pool_padding, 0);
    assert!((config.dropout_p - 0.25).abs() < 1e-6);
    assert_eq!(config.matrix_kind, MatrixKind::SmallInt);
    assert_eq!(config.value_range, (-2.0, 2.0));
    assert_eq!(config.seed, Some(7));
}

#[test]
fn test_pool_strides_default_to_window() {
    let config = PipelineConfig::default().with_pool_window(3, 2);
    let expected = MaxPool2d::with_options((3, 2), (3, 2)).with_padding(1);
    assert_eq!(config.pool(), expected);
}

#[test]
fn test_run_shapes_for_default_config() {
    let result = run(&PipelineConfig::default()).expect("default config is valid");

    assert_eq!(result.a.shape(), (32, 32));
    assert_eq!(result.b.shape(), (32, 32));
    assert_eq!(result.matmul.shape(), (32, 32));
    assert_eq!(result.activated.shape(), (32, 32));
    // 5x5 region, one ring of padding, 2x2 window at stride 2: (7-2)/2+1 = 3.
    assert_eq!(result.pooled.shape(), (3, 3));
    assert_eq!(result.final_output.shape(), (3, 3));
}

#[test]
fn test_run_is_seed_deterministic() {
    let config = PipelineConfig::default().with_n(8).with_seed(123);
    let first = run(&config).expect("config is valid");
    let second = run(&config).expect("config is valid");
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_produce_different_vectors() {
    let base = PipelineConfig::default().with_n(8);
    let first = run(&base.clone().with_seed(1)).expect("config is valid");
    let second = run(&base.with_seed(2)).expect("config is valid");
    assert_ne!(first.a, second.a);
}

#[test]
fn test_unseeded_runs_differ() {
    let mut config = PipelineConfig::default().with_n(8);
    config.seed = None;
    let first = run(&config).expect("config is valid");
    let second = run(&config).expect("config is valid");
    // Entropy-seeded operands colliding would need a 64-element f32 draw
    // to repeat exactly.
    assert_ne!(first.a, second.a);
}

#[test]
fn test_final_output_is_bitwise_pooled() {
    let config = PipelineConfig::default().with_n(8).with_dropout(0.9);
    let result = run(&config).expect("config is valid");

    assert_eq!(result.pooled.shape(), result.final_output.shape());
    for (p, f) in result
        .pooled
        .as_slice()
        .iter()
        .zip(result.final_output.as_slice())
    {
        assert_eq!(p.to_bits(), f.to_bits());
    }
}

#[test]
fn test_identity_kind_matmul_is_fixed_point() {
    let config = PipelineConfig::default()
        .with_n(3)
        .with_matrix_kind(MatrixKind::Identity);
    let result = run(&config).expect("config is valid");

    assert_eq!(result.a, Matrix::eye(3));
    assert_eq!(result.matmul, Matrix::eye(3));
    // relu(identity) = identity
    assert_eq!(result.activated, Matrix::eye(3));
}

#[test]
fn test_ones_kind_product_is_all_n() {
    let config = PipelineConfig::default()
        .with_n(4)
        .with_matrix_kind(MatrixKind::Ones);
    let result = run(&config).expect("config is valid");

    assert!(result.matmul.as_slice().iter().all(|&x| (x - 4.0).abs() < 1e-6));
    // Every pooling window covers at least one interior 4.0, so the
    // padding zeros never win.
    assert!(result.pooled.as_slice().iter().all(|&x| (x - 4.0).abs() < 1e-6));
}

#[test]
fn test_pool_input_is_top_left_region() {
    let config = PipelineConfig::default().with_n(8);
    let result = run(&config).expect("config is valid");

    let region = result.pool_input();
    assert_eq!(region.shape(), (5, 5));
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(
                region.get(i, j).to_bits(),
                result.activated.get(i, j).to_bits()
            );
        }
    }
}

#[test]
fn test_small_n_pools_whole_matrix() {
    let config = PipelineConfig::default().with_n(3);
    let result = run(&config).expect("config is valid");

    assert_eq!(result.pool_input().shape(), (3, 3));
    // 3x3 region, one ring of padding, 2x2 window at stride 2: (5-2)/2+1 = 2.
    assert_eq!(result.pooled.shape(), (2, 2));
}

#[test]
fn test_validate_rejects_zero_n() {
    let config = PipelineConfig::default().with_n(0);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("n = 0"));
}

#[test]
fn test_validate_rejects_dropout_of_one() {
    let config = PipelineConfig::default().with_dropout(1.0);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("dropout_p"));
}

#[test]
fn test_validate_rejects_negative_dropout() {
    let config = PipelineConfig::default().with_dropout(-0.1);
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_value_range() {
    let config = PipelineConfig::default().with_value_range(1.0, 1.0);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("value_range"));
}

#[test]
fn test_value_range_ignored_for_structured_kinds() {
    // Structured kinds never sample the range, so an empty one is fine.
    let config = PipelineConfig::default()
        .with_n(4)
        .with_matrix_kind(MatrixKind::Ones)
        .with_value_range(1.0, -1.0);
    assert!(config.validate().is_ok());
    assert!(run(&config).is_ok());
}

#[test]
fn test_validate_rejects_window_exceeding_padded_region() {
    let config = PipelineConfig::default()
        .with_n(1)
        .with_pool_window(2, 2)
        .with_pool_padding(0);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("pool_window"));
}

#[test]
fn test_validate_accepts_window_that_fits_after_padding() {
    let config = PipelineConfig::default()
        .with_n(1)
        .with_pool_window(2, 2)
        .with_pool_padding(1);
    assert!(config.validate().is_ok());

    let result = run(&config).expect("config is valid");
    assert_eq!(result.pooled.shape(), (1, 1));
}

#[test]
fn test_validate_rejects_zero_stride() {
    let mut config = PipelineConfig::default();
    config.stride_h = Some(0);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("pool_stride"));
}

#[test]
fn test_run_rejects_invalid_config_before_any_work() {
    let config = PipelineConfig::default().with_n(0);
    assert!(run(&config).is_err());
}

#[test]
fn test_activation_changes_vectors_but_not_operands() {
    let relu = PipelineConfig::default().with_n(8).with_seed(9);
    let tanh = relu.clone().with_activation(Activation::Tanh);

    let relu_result = run(&relu).expect("config is valid");
    let tanh_result = run(&tanh).expect("config is valid");

    // Operand draws precede the activation, so they are identical.
    assert_eq!(relu_result.a, tanh_result.a);
    assert_eq!(relu_result.b, tanh_result.b);
    assert_eq!(relu_result.matmul, tanh_result.matmul);
    assert_ne!(relu_result.activated, tanh_result.activated);
}
