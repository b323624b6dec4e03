//! Client-side Validation
//!
//! Checks that run before any network call. Failures surface inline near
//! the offending field and never reach the API client.

/// Maximum card description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Minimum password length accepted anywhere.
pub const MIN_PASSWORD_LEN: usize = 8;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Card description over the limit blocks submit in the card modal.
pub fn description_over_limit(description: &str) -> bool {
    description.chars().count() > MAX_DESCRIPTION_LEN
}

/// Loose `local@domain.tld` shape check, matching the login form.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let (Some(tld), Some(host)) = (domain_parts.next(), domain_parts.next()) else {
        return false;
    };
    !tld.is_empty()
        && !host.is_empty()
        && !domain.chars().any(char::is_whitespace)
}

/// Pre-network login validation. Returns the first inline error, if any.
pub fn validate_login(email: &str, password: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("Por favor, digite seu email.".to_string());
    }
    if !is_valid_email(email.trim()) {
        return Some("Por favor, digite um email válido.".to_string());
    }
    if password.trim().is_empty() {
        return Some("Por favor, digite sua senha.".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some("Senha deve ter pelo menos 8 caracteres.".to_string());
    }
    None
}

/// Strength check for new passwords. Returns the missing requirements,
/// empty when the password qualifies.
pub fn password_requirements(password: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        missing.push("pelo menos 8 caracteres");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("uma letra minúscula");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("uma letra maiúscula");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("um número");
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        missing.push("um caractere especial");
    }
    missing
}

/// Full validation for the change-password form.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Option<String> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Some("Por favor, preencha todos os campos de senha.".to_string());
    }
    if new != confirm {
        return Some("A nova senha e a confirmação não coincidem.".to_string());
    }
    let missing = password_requirements(new);
    if !missing.is_empty() {
        return Some(format!("A nova senha deve conter: {}.", missing.join(", ")));
    }
    if new == current {
        return Some("A nova senha deve ser diferente da senha atual.".to_string());
    }
    None
}

/// The typed account-deletion phrase must equal the server-issued one
/// byte-for-byte (input trimmed first).
pub fn confirmation_matches(typed: &str, issued: &str) -> bool {
    typed.trim() == issued
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_limit_is_100_chars() {
        assert!(!description_over_limit(&"a".repeat(100)));
        assert!(description_over_limit(&"a".repeat(101)));
        // Counted in characters, not bytes.
        assert!(!description_over_limit(&"ã".repeat(100)));
    }

    #[test]
    fn short_login_password_rejected_before_network() {
        let err = validate_login("user@example.com", "1234567");
        assert_eq!(err.as_deref(), Some("Senha deve ter pelo menos 8 caracteres."));
        assert_eq!(validate_login("user@example.com", "12345678"), None);
    }

    #[test]
    fn login_requires_valid_email() {
        assert!(validate_login("", "password1").is_some());
        assert!(validate_login("not-an-email", "password1").is_some());
        assert!(validate_login("a b@c.d", "password1").is_some());
    }

    #[test]
    fn password_requirements_list_missing_rules() {
        assert!(password_requirements("Abc123!@#").is_empty());
        let missing = password_requirements("abc");
        assert!(missing.contains(&"pelo menos 8 caracteres"));
        assert!(missing.contains(&"uma letra maiúscula"));
        assert!(missing.contains(&"um número"));
        assert!(missing.contains(&"um caractere especial"));
        assert!(!missing.contains(&"uma letra minúscula"));
    }

    #[test]
    fn password_change_rejects_mismatch_and_reuse() {
        assert!(validate_password_change("Old123!@#", "New123!@#", "Other").is_some());
        assert!(validate_password_change("Same123!@#", "Same123!@#", "Same123!@#").is_some());
        assert_eq!(validate_password_change("Old123!@#", "New123!@#", "New123!@#"), None);
    }

    #[test]
    fn confirmation_phrase_is_byte_exact() {
        assert!(confirmation_matches("  excluir minha conta  ", "excluir minha conta"));
        assert!(!confirmation_matches("Excluir minha conta", "excluir minha conta"));
        assert!(!confirmation_matches("excluir minha  conta", "excluir minha conta"));
    }
}
