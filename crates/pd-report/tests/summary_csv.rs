use pd_network::build_network;
use pd_report::{Summary, to_csv_string};
use pd_spec::NetworkSpec;

const STRAIGHT_RUN: &str = r#"
name: straight_run
network:
  - type: inlet
    name: supply
    flow: {pressure: 500000.0, mass_flow_rate: 2.0, density: 1.2, temperature: 300.0}
  - type: pipe
    name: run
    geom:
      length: 1.0
      flow_direction: side
      hydraulic_diameter: 0.1
      inlet_area: {func: area_circle, params: {d: 0.1}}
      outlet_area: {func: area_circle, params: {d: 0.1}}
    loss:
      friction: 0.02
    ref_area: {station: inlet_area}
  - type: outlet
    name: exhaust
"#;

fn cell<'a>(csv: &'a str, row: usize, header: &str) -> &'a str {
    let mut lines = csv.lines();
    let headers: Vec<&str> = lines.next().unwrap().split(',').collect();
    let col = headers
        .iter()
        .position(|h| *h == header)
        .unwrap_or_else(|| panic!("no column '{header}' in {headers:?}"));
    let line = lines.nth(row).unwrap_or_else(|| panic!("no row {row}"));
    line.split(',').nth(col).unwrap()
}

#[test]
fn csv_export_end_to_end() {
    let spec: NetworkSpec = serde_yaml::from_str(STRAIGHT_RUN).unwrap();
    let network = build_network(&spec).unwrap();
    let summary = Summary::from_network(&network);
    let csv = to_csv_string(&summary);

    // Header plus exactly one row per element.
    assert_eq!(csv.lines().count(), 4);

    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("name,type,"));
    assert!(header.contains("outlet_pressure [kPa]"));
    assert!(header.contains("friction_factor [-]"));
    assert!(header.contains("length [m]"));

    assert_eq!(cell(&csv, 0, "name"), "supply");
    assert_eq!(cell(&csv, 0, "type"), "inlet");
    assert_eq!(cell(&csv, 1, "type"), "pipe");
    assert_eq!(cell(&csv, 2, "type"), "outlet");

    // Plenum rows leave flow cells empty but carry the running cumulative.
    assert_eq!(cell(&csv, 0, "mass_flow_rate [kg/s]"), "");
    assert_eq!(cell(&csv, 0, "cumulative_dp [kPa]"), "0");

    // Horizontal constant-area pipe: the only drop is friction.
    // dp = 0.02 * (1/0.1) * 0.5 * 1.2 * V^2 with V = 2 / (1.2 * area_circle(0.1)),
    // which is 5403.8 Pa -> 5.4 kPa at three significant figures.
    assert_eq!(cell(&csv, 1, "dp_loss [kPa]"), "5.4");
    assert_eq!(cell(&csv, 1, "pressure_drop [kPa]"), "5.4");
    assert_eq!(cell(&csv, 1, "cumulative_dp [kPa]"), "5.4");
    assert_eq!(cell(&csv, 1, "dp_gravity [kPa]"), "0");
    assert_eq!(cell(&csv, 1, "dp_accel [kPa]"), "0");

    // kPa columns are the base-unit values divided by 1000.
    assert_eq!(cell(&csv, 1, "inlet_pressure [kPa]"), "500");
    assert_eq!(cell(&csv, 1, "outlet_pressure [kPa]"), "495");

    // Dimensionless and geometric columns stay in base units.
    assert_eq!(cell(&csv, 1, "friction_factor [-]"), "0.02");
    assert_eq!(cell(&csv, 1, "length [m]"), "1");
    assert_eq!(cell(&csv, 1, "inlet_area [m^2]"), "0.00785");

    // The outlet row is name-only apart from the cumulative column.
    assert_eq!(cell(&csv, 2, "outlet_pressure [kPa]"), "");
    assert_eq!(cell(&csv, 2, "cumulative_dp [kPa]"), "5.4");
}

#[test]
fn write_csv_round_trips_through_the_filesystem() {
    let spec: NetworkSpec = serde_yaml::from_str(STRAIGHT_RUN).unwrap();
    let network = build_network(&spec).unwrap();
    let summary = Summary::from_network(&network);

    let path = std::env::temp_dir().join("pd_report_summary.csv");
    pd_report::write_csv(&summary, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_csv_string(&summary));
}
