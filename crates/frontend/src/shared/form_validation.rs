//! Client-side form checks, run before any network call.

const MIN_PASSWORD_LEN: usize = 6;

/// Loose email shape check: something before the @, a dot somewhere in the
/// domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    validate_required(email, "Email")?;
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("Email is invalid".to_string())
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Optional password change: empty means "keep the old one", otherwise the
/// new password must be long enough and match its confirmation.
pub fn validate_new_password(new_password: &str, confirmation: &str) -> Result<(), String> {
    if new_password.is_empty() && confirmation.is_empty() {
        return Ok(());
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if new_password != confirmation {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn password_length_floor() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn new_password_rules() {
        assert!(validate_new_password("", "").is_ok());
        assert!(validate_new_password("secret1", "secret1").is_ok());
        assert!(validate_new_password("secret1", "secret2").is_err());
        assert!(validate_new_password("abc", "abc").is_err());
    }

    #[test]
    fn required_labels_the_error() {
        assert_eq!(
            validate_required("  ", "Name").unwrap_err(),
            "Name is required"
        );
    }
}
