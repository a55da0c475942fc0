use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlideFxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SlideFxError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SlideFxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlideFxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
