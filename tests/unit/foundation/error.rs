use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AquariumError::invalid_color("x")
            .to_string()
            .contains("invalid color format:")
    );
    assert!(
        AquariumError::unknown_template("x")
            .to_string()
            .contains("unknown template:")
    );
    assert!(
        AquariumError::generation("x")
            .to_string()
            .contains("generation failure:")
    );
    assert!(
        AquariumError::catalog("x")
            .to_string()
            .contains("catalog error:")
    );
    assert!(
        AquariumError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AquariumError::storage("x")
            .to_string()
            .contains("storage error:")
    );
    assert!(
        AquariumError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AquariumError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
