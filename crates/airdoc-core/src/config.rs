//! TOML loading and saving of method coefficients.
//!
//! Every field is optional in the file; missing ones take their AEA 1989a
//! default. Unknown keys are rejected.
//!
//! ```toml
//! fuel_price_usd_per_kg = 0.75
//! delivery_price_method = "purchase_price_correlation"
//!
//! [maintenance]
//! airframe_labor_base_hours = 8.1
//! ```
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::method::MethodCoefficients;

impl MethodCoefficients {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading method coefficients");
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DocError;
    use crate::method::{DeliveryPriceMethod, MaintenanceCoefficients, MethodCoefficients};

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(
            MethodCoefficients::from_toml_str("").unwrap(),
            MethodCoefficients::default()
        );
    }

    #[test]
    fn partial_override() {
        let m = MethodCoefficients::from_toml_str(
            r#"
            fuel_price_usd_per_kg = 0.75
            delivery_price_method = "purchase_price_correlation"

            [maintenance]
            airframe_labor_base_hours = 8.1
            "#,
        )
        .unwrap();
        assert_eq!(m.fuel_price_usd_per_kg, 0.75);
        assert_eq!(m.delivery_price_method, DeliveryPriceMethod::PurchasePriceCorrelation);
        assert_eq!(m.maintenance.airframe_labor_base_hours, 8.1);
        assert_eq!(
            m.maintenance.engine_k1_base,
            MaintenanceCoefficients::default().engine_k1_base
        );
        assert_eq!(m.interest_rate, MethodCoefficients::default().interest_rate);
    }

    #[test]
    fn unknown_keys_rejected() {
        let top = MethodCoefficients::from_toml_str("fuel_price = 1.0");
        assert!(matches!(top, Err(DocError::Config(_))));
        let nested = MethodCoefficients::from_toml_str("[maintenance]\nengine_k9 = 1.0");
        assert!(matches!(nested, Err(DocError::Config(_))));
    }

    #[test]
    fn round_trip_through_toml() {
        let m = MethodCoefficients::default()
            .with_maintenance(MaintenanceCoefficients::fitted_regional_jets());
        let text = m.to_toml_string().unwrap();
        assert!(text.contains("[maintenance]"));
        assert_eq!(MethodCoefficients::from_toml_str(&text).unwrap(), m);
    }

    #[test]
    fn missing_file_is_io_error() {
        let r = MethodCoefficients::from_toml_file("/nonexistent/airdoc/method.toml");
        assert!(matches!(r, Err(DocError::Io(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = std::env::temp_dir().join(format!("airdoc-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("method.toml");
        std::fs::write(&path, "inflation_rate = 0.02\n").unwrap();
        let m = MethodCoefficients::from_toml_file(&path).unwrap();
        assert_eq!(m.inflation_rate, 0.02);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
