//! The network aggregate: an immutable, ordered chain of evaluated elements.

use crate::element::Element;

/// An evaluated serial flow network.
///
/// Elements are appended once, in chain order, by the builder; each interior
/// element's `upstream` index points at the immediately preceding entry.
/// There is no mutation, re-computation, or removal after construction.
#[derive(Debug, Clone)]
pub struct Network {
    name: String,
    elements: Vec<Element>,
}

impl Network {
    pub(crate) fn new(name: String, elements: Vec<Element>) -> Self {
        Self { name, elements }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Outlet pressure of the last flow element in the chain (the pressure
    /// delivered to the outlet plenum).
    pub fn final_pressure(&self) -> Option<f64> {
        self.elements
            .iter()
            .rev()
            .find_map(|e| e.outlet_pressure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Inlet, Junction, Outlet};
    use approx::assert_relative_eq;

    #[test]
    fn final_pressure_reads_past_the_outlet_plenum() {
        let inlet = Element::Inlet(Inlet {
            name: "supply".to_string(),
            outlet_pressure: 200_000.0,
            mass_flow_rate: 1.0,
            density: 1.0,
            temperature: 300.0,
        });
        let junction =
            Junction::new("orifice", 0.01, 1.0, 1.0, 1.0, 0, &inlet).unwrap();
        let expected = junction.outlet_pressure;

        let network = Network::new(
            "test".to_string(),
            vec![
                inlet,
                Element::Junction(junction),
                Element::Outlet(Outlet {
                    name: "exhaust".to_string(),
                    upstream: 1,
                }),
            ],
        );

        assert_eq!(network.len(), 3);
        assert_relative_eq!(network.final_pressure().unwrap(), expected);
    }
}
