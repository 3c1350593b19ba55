use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  ada  ", "analytical1"),
        Ok(("ada".to_owned(), "analytical1".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_short_username() {
    assert_eq!(validate_login_input("ab", "analytical1"), Err("Username must be 3-150 characters."));
}

#[test]
fn validate_login_input_rejects_long_username() {
    let long = "a".repeat(151);
    assert_eq!(validate_login_input(&long, "analytical1"), Err("Username must be 3-150 characters."));
    assert!(validate_login_input(&"a".repeat(150), "analytical1").is_ok());
}

#[test]
fn validate_login_input_rejects_short_password() {
    assert_eq!(
        validate_login_input("ada", "short"),
        Err("Password must be at least 8 characters long.")
    );
}
