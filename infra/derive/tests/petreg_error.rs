#[test]
fn petreg_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/petreg_error_pass.rs");
}
