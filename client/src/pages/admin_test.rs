use super::*;
use content::StorageError;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  admin ", "natura2024"),
        Ok(("admin".to_owned(), "natura2024".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "x"), Err("Introduce usuario y contraseña."));
    assert_eq!(validate_login_input("admin", ""), Err("Introduce usuario y contraseña."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("admin", " pw "), Ok(("admin".to_owned(), " pw ".to_owned())));
}

#[test]
fn login_error_message_uses_spanish_copy() {
    assert_eq!(login_error_message(&SessionError::InvalidCredentials), "Credenciales incorrectas");
    let storage = SessionError::Storage(StorageError::Unavailable("no window".to_owned()));
    assert_eq!(login_error_message(&storage), "No se pudo guardar la sesión en este navegador.");
}

#[test]
fn tabs_start_at_overview_and_have_distinct_labels() {
    assert_eq!(AdminTab::default(), AdminTab::Overview);
    assert_eq!(AdminTab::ALL[0], AdminTab::Overview);
    let mut labels: Vec<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), AdminTab::ALL.len());
}
