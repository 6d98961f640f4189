//! Row-oriented summary of an evaluated network.

use pd_network::{Element, ElementKind, Network};

/// One summary row. Fields that do not apply to the row's element kind stay
/// `None` and export as empty cells.
#[derive(Debug, Clone, Default)]
pub struct SummaryRow {
    pub name: String,
    pub kind: Option<ElementKind>,
    pub mass_flow_rate: Option<f64>,
    pub inlet_velocity: Option<f64>,
    pub outlet_velocity: Option<f64>,
    pub ref_velocity: Option<f64>,
    pub inlet_area: Option<f64>,
    pub outlet_area: Option<f64>,
    pub ref_area: Option<f64>,
    pub length: Option<f64>,
    pub hydraulic_diameter: Option<f64>,
    pub friction_factor: Option<f64>,
    pub form_loss: Option<f64>,
    pub dp_gravity: Option<f64>,
    pub dp_accel: Option<f64>,
    pub dp_loss: Option<f64>,
    pub inlet_pressure: Option<f64>,
    pub outlet_pressure: Option<f64>,
    pub pressure_drop: Option<f64>,
    pub cumulative_dp: Option<f64>,
}

impl SummaryRow {
    fn plenum(name: &str, kind: ElementKind) -> Self {
        SummaryRow {
            name: name.to_string(),
            kind: Some(kind),
            ..SummaryRow::default()
        }
    }

    /// Numeric cell for a schema column key, `None` when the column does not
    /// apply to this row.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        match key {
            "mass_flow_rate" => self.mass_flow_rate,
            "inlet_velocity" => self.inlet_velocity,
            "outlet_velocity" => self.outlet_velocity,
            "ref_velocity" => self.ref_velocity,
            "inlet_area" => self.inlet_area,
            "outlet_area" => self.outlet_area,
            "ref_area" => self.ref_area,
            "length" => self.length,
            "hydraulic_diameter" => self.hydraulic_diameter,
            "friction_factor" => self.friction_factor,
            "form_loss" => self.form_loss,
            "dp_gravity" => self.dp_gravity,
            "dp_accel" => self.dp_accel,
            "dp_loss" => self.dp_loss,
            "inlet_pressure" => self.inlet_pressure,
            "outlet_pressure" => self.outlet_pressure,
            "pressure_drop" => self.pressure_drop,
            "cumulative_dp" => self.cumulative_dp,
            _ => None,
        }
    }
}

/// Summary table: one row per element in chain order, plus the cumulative
/// pressure-drop column.
#[derive(Debug, Clone)]
pub struct Summary {
    network_name: String,
    rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn from_network(network: &Network) -> Summary {
        let mut rows: Vec<SummaryRow> = network.elements().iter().map(row_for).collect();

        // Cumulative pressure drop in chain order, unset drops counted as zero.
        let mut running = 0.0;
        for row in &mut rows {
            running += row.pressure_drop.unwrap_or(0.0);
            row.cumulative_dp = Some(running);
        }

        Summary {
            network_name: network.name().to_string(),
            rows,
        }
    }

    pub fn network_name(&self) -> &str {
        &self.network_name
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }
}

fn row_for(element: &Element) -> SummaryRow {
    match element {
        Element::Inlet(e) => SummaryRow::plenum(&e.name, ElementKind::Inlet),
        Element::Outlet(e) => SummaryRow::plenum(&e.name, ElementKind::Outlet),
        Element::Pipe(p) => SummaryRow {
            name: p.name.clone(),
            kind: Some(ElementKind::Pipe),
            mass_flow_rate: Some(p.mass_flow_rate),
            inlet_velocity: Some(p.inlet_velocity),
            outlet_velocity: Some(p.outlet_velocity),
            ref_velocity: Some(p.ref_velocity),
            inlet_area: Some(p.geometry.inlet_area),
            outlet_area: Some(p.geometry.outlet_area),
            ref_area: Some(p.geometry.ref_area),
            length: Some(p.geometry.length),
            hydraulic_diameter: Some(p.geometry.hydraulic_diameter),
            friction_factor: Some(p.friction_factor),
            form_loss: None,
            dp_gravity: Some(p.dp_gravity),
            dp_accel: Some(p.dp_accel),
            dp_loss: Some(p.dp_loss),
            inlet_pressure: Some(p.inlet_pressure),
            outlet_pressure: Some(p.outlet_pressure),
            pressure_drop: Some(p.pressure_drop),
            cumulative_dp: None,
        },
        Element::Junction(j) => SummaryRow {
            name: j.name.clone(),
            kind: Some(ElementKind::Junction),
            mass_flow_rate: Some(j.mass_flow_rate),
            ref_velocity: Some(j.ref_velocity),
            ref_area: Some(j.ref_area),
            form_loss: Some(j.form_loss),
            dp_loss: Some(j.dp_loss),
            inlet_pressure: Some(j.inlet_pressure),
            outlet_pressure: Some(j.outlet_pressure),
            pressure_drop: Some(j.pressure_drop),
            ..SummaryRow::default()
        },
    }
}
