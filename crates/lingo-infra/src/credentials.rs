//! Account password lookup.
//!
//! The password is read from `LINGO_PASSWORD` and wrapped in a
//! [`SecretString`] immediately, so it never appears in Debug output or logs.
//! Interactive prompting is left to the CLI.

use secrecy::SecretString;

/// Environment variable holding the account password.
pub const PASSWORD_ENV: &str = "LINGO_PASSWORD";

/// Read the password from `var`.
///
/// Unset, empty, or non-Unicode values are treated as absent.
pub fn password_from_env(var: &str) -> Option<SecretString> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn missing_var_is_none() {
        assert!(password_from_env("LINGO_TEST_PASSWORD_NEVER_SET").is_none());
    }

    #[test]
    fn set_var_is_wrapped() {
        let var = "LINGO_TEST_PASSWORD_SET";
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(var, "hunter2") };

        let secret = password_from_env(var).unwrap();
        assert_eq!(secret.expose_secret(), "hunter2");
        assert!(!format!("{secret:?}").contains("hunter2"));

        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn empty_var_is_none() {
        let var = "LINGO_TEST_PASSWORD_EMPTY";
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(var, "") };
        assert!(password_from_env(var).is_none());
        unsafe { std::env::remove_var(var) };
    }
}
