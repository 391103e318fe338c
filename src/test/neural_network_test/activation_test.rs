use super::*;

#[test]
fn relu_forward_test() {
    let z = array![[-2.0, -1.0, 0.0], [1.0, 2.0, 3.0]];
    let output = Activation::ReLU.apply(&z);

    // Negative values and zero become 0, positive values unchanged
    assert_eq!(output, array![[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]]);
}

#[test]
fn relu_derivative_test() {
    let z = array![[-2.0, -1.0, 0.0], [1.0, 2.0, 3.0]];
    let deriv = Activation::ReLU.derivative(&z);

    assert_eq!(deriv, array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
}

#[test]
fn relu_derivative_at_zero_test() {
    // The derivative uses a strict `> 0` test
    assert_eq!(Activation::ReLU.derivative_scalar(0.0), 0.0);
    assert_eq!(Activation::ReLU.derivative_scalar(-0.0), 0.0);
    assert_eq!(Activation::ReLU.derivative_scalar(1e-12), 1.0);
}

#[test]
fn sigmoid_forward_test() {
    let z = array![[0.0, 2.0], [-2.0, 10.0]];
    let output = Activation::Sigmoid.apply(&z);

    assert_relative_eq!(output[[0, 0]], 0.5);
    assert_relative_eq!(output[[0, 1]], 1.0 / (1.0 + (-2.0f64).exp()));
    assert_relative_eq!(output[[0, 1]] + output[[1, 0]], 1.0, epsilon = 1e-12);
    assert!(output[[1, 1]] < 1.0);
}

#[test]
fn sigmoid_derivative_test() {
    let z = array![[0.0, 1.5], [-3.0, 4.0]];
    let deriv = Activation::Sigmoid.derivative(&z);

    assert_relative_eq!(deriv[[0, 0]], 0.25);
    for (&v, &d) in z.iter().zip(deriv.iter()) {
        let s = 1.0 / (1.0 + (-v).exp());
        assert_relative_eq!(d, s * (1.0 - s), epsilon = 1e-12);
    }
}

#[test]
fn sigmoid_derivative_matches_finite_difference_test() {
    let eps = 1e-6;
    for &v in &[-4.0, -0.5, 0.0, 0.7, 3.0] {
        let numeric = (Activation::Sigmoid.apply_scalar(v + eps)
            - Activation::Sigmoid.apply_scalar(v - eps))
            / (2.0 * eps);
        assert_abs_diff_eq!(
            Activation::Sigmoid.derivative_scalar(v),
            numeric,
            epsilon = 1e-8
        );
    }
}

#[test]
fn identity_test() {
    let z = array![[-1.5, 0.0], [2.5, 7.0]];

    assert_eq!(Activation::Identity.apply(&z), z);
    assert_eq!(Activation::Identity.derivative(&z), Array2::<f64>::ones((2, 2)));
}

#[test]
fn large_input_matches_scalar_path_test() {
    // 12_000 elements, above the parallel threshold
    let z = Array2::from_shape_fn((200, 60), |(i, j)| {
        (i as f64 - 100.0) * 0.05 + j as f64 * 0.01
    });
    let output = Activation::Sigmoid.apply(&z);
    let deriv = Activation::ReLU.derivative(&z);

    for ((&v, &a), &d) in z.iter().zip(output.iter()).zip(deriv.iter()) {
        assert_relative_eq!(a, Activation::Sigmoid.apply_scalar(v));
        assert_eq!(d, Activation::ReLU.derivative_scalar(v));
    }
}

#[test]
fn parse_activation_test() {
    assert_eq!("relu".parse::<Activation>().unwrap(), Activation::ReLU);
    assert_eq!("Sigmoid".parse::<Activation>().unwrap(), Activation::Sigmoid);
    assert_eq!(" identity ".parse::<Activation>().unwrap(), Activation::Identity);
    assert_eq!("linear".parse::<Activation>().unwrap(), Activation::Identity);

    let err = "tanh".parse::<Activation>().unwrap_err();
    assert!(matches!(err, ModelError::InputValidationError(_)));
}

#[test]
fn display_parse_test() {
    for activation in [Activation::ReLU, Activation::Sigmoid, Activation::Identity] {
        assert_eq!(
            activation.to_string().parse::<Activation>().unwrap(),
            activation
        );
    }
}
