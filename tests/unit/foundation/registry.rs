use super::*;

fn registry() -> Registry<str> {
    let mut reg = Registry::new("label", "plain", Arc::from("plain"));
    reg.insert("plain".to_string(), Arc::from("plain"));
    reg.insert("bold".to_string(), Arc::from("**bold**"));
    reg
}

#[test]
fn lookup_is_exact() {
    let reg = registry();
    assert_eq!(reg.lookup("bold"), Some("**bold**"));
    assert_eq!(reg.lookup("Bold"), None);
    assert_eq!(reg.names(), vec!["plain", "bold"]);
}

#[test]
fn unknown_names_use_the_fallback() {
    let reg = registry();
    assert_eq!(reg.get_or_fallback("italic"), "plain");
    let err = reg.try_get("italic").unwrap_err();
    assert_eq!(err.to_string(), "unknown template: label \"italic\"");
}

#[test]
fn reinserting_keeps_position() {
    let mut reg = registry();
    reg.insert("plain".to_string(), Arc::from("_plain_"));
    reg.insert("code".to_string(), Arc::from("`code`"));
    assert_eq!(reg.names(), vec!["plain", "bold", "code"]);
    assert_eq!(reg.lookup("plain"), Some("_plain_"));

    let copy = reg.clone();
    assert_eq!(copy.names(), reg.names());
}
