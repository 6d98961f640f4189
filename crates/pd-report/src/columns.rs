//! Canonical summary column schema.
//!
//! Order defines display order. Internal values are SI base units; columns
//! tagged `kPa` are rescaled from Pa on export.

/// One summary column: a key plus its display unit, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub unit: Option<&'static str>,
}

impl Column {
    /// Header label, decorated with the unit in brackets when one exists.
    pub fn header(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} [{}]", self.key, unit),
            None => self.key.to_string(),
        }
    }

    /// Whether this column displays in kilopascals (export rescales it).
    pub fn is_kilopascal(&self) -> bool {
        self.unit == Some("kPa")
    }
}

/// The full column catalog.
pub const ALL_COLUMNS: &[Column] = &[
    Column { key: "name", unit: None },
    Column { key: "mass_flow_rate", unit: Some("kg/s") },
    Column { key: "inlet_velocity", unit: Some("m/s") },
    Column { key: "outlet_velocity", unit: Some("m/s") },
    Column { key: "ref_velocity", unit: Some("m/s") },
    Column { key: "inlet_area", unit: Some("m^2") },
    Column { key: "outlet_area", unit: Some("m^2") },
    Column { key: "ref_area", unit: Some("m^2") },
    Column { key: "length", unit: Some("m") },
    Column { key: "hydraulic_diameter", unit: Some("m") },
    Column { key: "friction_factor", unit: Some("-") },
    Column { key: "form_loss", unit: Some("-") },
    Column { key: "dp_gravity", unit: Some("kPa") },
    Column { key: "dp_accel", unit: Some("kPa") },
    Column { key: "dp_loss", unit: Some("kPa") },
    Column { key: "inlet_pressure", unit: Some("kPa") },
    Column { key: "outlet_pressure", unit: Some("kPa") },
    Column { key: "pressure_drop", unit: Some("kPa") },
    Column { key: "cumulative_dp", unit: Some("kPa") },
];

/// Element-kind column, displayed between `name` and the numeric columns.
pub const TYPE_COLUMN: &str = "type";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_decorate_units() {
        assert_eq!(ALL_COLUMNS[0].header(), "name");
        let dp = ALL_COLUMNS
            .iter()
            .find(|c| c.key == "pressure_drop")
            .unwrap();
        assert_eq!(dp.header(), "pressure_drop [kPa]");
        let f = ALL_COLUMNS
            .iter()
            .find(|c| c.key == "friction_factor")
            .unwrap();
        assert_eq!(f.header(), "friction_factor [-]");
        assert!(!f.is_kilopascal());
        assert!(dp.is_kilopascal());
    }
}
