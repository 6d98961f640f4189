use std::path::Path;

#[test]
fn demos_load_and_validate() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let demos = ["annular_test_loop.yaml"];

    for name in demos {
        let path = root.join(name);
        let spec = pd_spec::load_yaml(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        pd_spec::validate_spec(&spec)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
        assert_eq!(spec.name, "annular_test_loop");
        assert_eq!(spec.network.len(), 5);
    }
}
