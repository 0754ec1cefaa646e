//! Signup rules, applied server-side before an account is created.

/// Canonical form of an email address: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check a signup request. Returns the normalized email.
pub fn validate_signup(email: &str, password: &str, min_password_len: usize) -> Result<String, String> {
    let email = normalize_email(email);
    if email.is_empty() || !email.contains('@') {
        return Err("Invalid email address".to_string());
    }
    if password.chars().count() < min_password_len {
        return Err(format!(
            "Password must be at least {min_password_len} characters"
        ));
    }
    Ok(email)
}
