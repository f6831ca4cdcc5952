// Validate the WGSL shader with naga so a broken shader fails in CI rather
// than at window creation.

#[test]
fn renderer_shader_parses_and_validates() {
    let shader_source = include_str!("../src/renderer.wgsl");

    let module = match naga::front::wgsl::parse_str(shader_source) {
        Ok(m) => m,
        Err(e) => {
            panic!(
                "WGSL parsing error:\n{error_report}",
                error_report = e.emit_to_string(shader_source)
            );
        }
    };

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );

    if let Err(e) = validator.validate(&module) {
        panic!(
            "WGSL validation error:\n{error_report}",
            error_report = e.emit_to_string(shader_source)
        );
    }
}
