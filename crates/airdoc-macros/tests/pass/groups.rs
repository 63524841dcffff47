use airdoc_macros::Coefficients;

#[derive(Debug, Clone, Copy, Coefficients)]
pub struct GroupedCoefficients {
    #[coefficients(group = "airframe")]
    pub weight_coefficient: f64,
    #[coefficients(group = "engine")]
    pub thrust_exponent: f64,
    pub untagged: f64,
}

fn main() {
    let c = GroupedCoefficients { weight_coefficient: 9e-5, thrust_exponent: 0.4, untagged: 1.0 };
    assert_eq!(GroupedCoefficients::group_of("weight_coefficient"), Some("airframe"));
    assert_eq!(GroupedCoefficients::group_of("thrust_exponent"), Some("engine"));
    assert_eq!(GroupedCoefficients::group_of("untagged"), None);
    assert_eq!(c.get("thrust_exponent"), Some(0.4));
}
