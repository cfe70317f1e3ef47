use super::*;

#[test]
fn test_quantile_endpoints() {
    let v = vec![5.0, 1.0, 4.0, 2.0, 3.0];
    assert_eq!(quantile(&v, 0.0).unwrap(), 1.0);
    assert_eq!(quantile(&v, 1.0).unwrap(), 5.0);
    assert_eq!(quantile(&v, 0.5).unwrap(), 3.0);
}

#[test]
fn test_quantile_interpolates_between_order_statistics() {
    let v = vec![10.0, 20.0, 30.0, 40.0];
    // rank 0.75 -> 10 + 0.75 * 10
    assert!((quantile(&v, 0.25).unwrap() - 17.5).abs() < 1e-12);
    assert!((quantile(&v, 0.5).unwrap() - 25.0).abs() < 1e-12);
    assert!((quantile(&v, 0.75).unwrap() - 32.5).abs() < 1e-12);
}

#[test]
fn test_quantile_two_points() {
    let v = vec![100.0, 0.0];
    assert_eq!(quantile(&v, 0.25).unwrap(), 25.0);
    assert_eq!(quantile(&v, 0.5).unwrap(), 50.0);
    assert_eq!(quantile(&v, 0.75).unwrap(), 75.0);
}

#[test]
fn test_quantile_does_not_mutate_input() {
    let v = vec![3.0, 1.0, 2.0];
    let _ = quantile(&v, 0.5).unwrap();
    assert_eq!(v, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_quantile_single_value() {
    assert_eq!(quantile(&[7.0], 0.25).unwrap(), 7.0);
}

#[test]
fn test_quantile_rejects_empty_and_bad_probability() {
    assert!(matches!(
        quantile(&[], 0.5),
        Err(ModerationError::InvalidInput(_))
    ));
    assert!(matches!(
        quantile(&[1.0], 1.5),
        Err(ModerationError::InvalidInput(_))
    ));
    assert!(matches!(
        quantile(&[1.0], -0.1),
        Err(ModerationError::InvalidInput(_))
    ));
    assert!(matches!(
        quantile(&[1.0, f64::NAN], 0.5),
        Err(ModerationError::InvalidInput(_))
    ));
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
}
