use airdoc_macros::Coefficients;

#[derive(Debug, Clone, Copy, Coefficients)]
pub struct TestCoefficients {
    pub labor: f64,
    pub material: f64,
    pub exponent: f64,
}

fn main() {
    let mut c = TestCoefficients { labor: 1.0, material: 2.0, exponent: 0.5 };
    assert_eq!(TestCoefficients::FIELD_COUNT, 3);
    assert_eq!(TestCoefficients::field_names(), &["labor", "material", "exponent"]);
    assert_eq!(c.get("material"), Some(2.0));
    assert_eq!(c.get("missing"), None);

    if let Some(v) = c.get_mut("exponent") {
        *v = 0.8;
    }
    assert_eq!(c.exponent, 0.8);
    assert_eq!(c.to_vec(), vec![1.0, 2.0, 0.8]);

    let pairs: Vec<(&str, f64)> = c.iter_named().collect();
    assert_eq!(pairs[0], ("labor", 1.0));
    assert_eq!(TestCoefficients::group_of("labor"), None);
}
