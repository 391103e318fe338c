use super::*;

#[test]
fn mse_loss_and_grad_test() {
    let y = array![[1.0, 0.0], [0.5, -1.0]];
    let y_hat = array![[0.5, 1.0], [0.5, 1.0]];

    let (loss, grad) = mean_squared_error(&y, &y_hat).unwrap();

    // squared differences: 0.25, 1, 0, 4 -> mean 1.3125 -> halved
    assert_relative_eq!(loss, 0.65625);
    // Gradient is the raw difference, not divided by the element count
    assert_eq!(grad, array![[-0.5, 1.0], [0.0, 2.0]]);
}

#[test]
fn mse_zero_when_equal_test() {
    let y = array![[0.3, -0.7, 1.2]];

    let (loss, grad) = mean_squared_error(&y, &y).unwrap();

    assert_eq!(loss, 0.0);
    assert!(grad.iter().all(|&g| g == 0.0));
}

#[test]
fn mse_trait_matches_free_function_test() {
    let y = array![[1.0], [2.0], [3.0]];
    let y_hat = array![[1.1], [2.2], [2.8]];
    let mse = MeanSquaredError::new();

    let (loss, grad) = mean_squared_error(&y, &y_hat).unwrap();

    assert_relative_eq!(mse.compute_loss(&y, &y_hat).unwrap(), loss);
    assert_eq!(mse.compute_grad(&y, &y_hat).unwrap(), grad);
    assert_relative_eq!(loss, 0.015, epsilon = 1e-12);
}

#[test]
fn mse_shape_mismatch_test() {
    let y = Array2::<f64>::zeros((3, 2));
    let y_hat = Array2::<f64>::zeros((2, 3));

    let result = mean_squared_error(&y, &y_hat);

    assert!(matches!(result, Err(ModelError::ShapeMismatch(_))));
}

#[test]
fn mse_empty_input_test() {
    let y = Array2::<f64>::zeros((0, 2));

    let result = mean_squared_error(&y, &y);

    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn bce_known_value_test() {
    let y = array![[1.0, 0.0]];
    let y_hat = array![[0.8, 0.4]];

    let (loss, grad) = binary_cross_entropy(&y, &y_hat).unwrap();

    let expected = (-(0.8f64).ln() - (0.6f64).ln()) / 2.0;
    assert_relative_eq!(loss, expected, epsilon = 1e-12);
    // (y_hat - y) / (y_hat * (1 - y_hat))
    assert_relative_eq!(grad[[0, 0]], -0.2 / (0.8 * 0.2), epsilon = 1e-12);
    assert_relative_eq!(grad[[0, 1]], 0.4 / (0.4 * 0.6), epsilon = 1e-12);
}

#[test]
fn bce_grad_matches_derivative_test() {
    // dJ/dy_hat of the per-element loss equals -y / y_hat + (1 - y) / (1 - y_hat)
    let y = array![[1.0, 0.0, 1.0], [0.0, 1.0, 0.0]];
    let y_hat = array![[0.1, 0.2, 0.9], [0.7, 0.55, 0.02]];

    let grad = BinaryCrossEntropy::new().compute_grad(&y, &y_hat).unwrap();

    for ((&t, &p), &g) in y.iter().zip(y_hat.iter()).zip(grad.iter()) {
        let expected = -t / p + (1.0 - t) / (1.0 - p);
        assert_relative_eq!(g, expected, epsilon = 1e-9);
    }
}

#[test]
fn bce_non_negative_and_sign_test() {
    let y = array![[0.0, 1.0, 1.0], [0.0, 0.0, 1.0]];
    let y_hat = array![[0.011, 0.5, 0.989], [0.98, 0.3, 0.02]];

    let (loss, grad) = binary_cross_entropy(&y, &y_hat).unwrap();

    assert!(loss >= 0.0);
    for ((&t, &p), &g) in y.iter().zip(y_hat.iter()).zip(grad.iter()) {
        assert_eq!(g.signum(), (p - t).signum());
    }
}

#[test]
fn bce_prediction_equals_target_test() {
    // Well defined (and zero) where prediction equals a soft target
    let y = array![[0.3, 0.75]];

    let grad = BinaryCrossEntropy::new().compute_grad(&y, &y).unwrap();

    assert_abs_diff_eq!(grad[[0, 0]], 0.0);
    assert_abs_diff_eq!(grad[[0, 1]], 0.0);
}

#[test]
fn bce_out_of_domain_test() {
    let y = array![[1.0, 0.0]];

    for y_hat in [array![[0.0, 0.5]], array![[0.5, 1.0]], array![[1.2, 0.5]]] {
        let result = binary_cross_entropy(&y, &y_hat);
        assert!(matches!(result, Err(ModelError::NumericDomainError(_))));
    }
}

#[test]
fn bce_shape_mismatch_test() {
    let y = Array2::<f64>::zeros((2, 1));
    let y_hat = Array2::from_elem((1, 2), 0.5);

    let result = binary_cross_entropy(&y, &y_hat);

    assert!(matches!(result, Err(ModelError::ShapeMismatch(_))));
}
