#[test]
fn wordnum_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_with_source.rs");
    t.pass("tests/ui/error_without_source.rs");
}
