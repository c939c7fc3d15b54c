//! Error handling foundation for the portal.
//!
//! Only the `Result` alias lives here. Each crate defines its own error
//! enums and wraps them in a rootcause `Report` at the layer that raises them.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Failure;

    impl std::fmt::Display for Failure {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "failure")
        }
    }

    impl std::error::Error for Failure {}

    fn fails() -> Result<(), Failure> {
        Err(Failure.into())
    }

    #[test]
    fn ok_passes_through() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }

    #[test]
    fn context_converts_into_report() {
        let err = fails().expect_err("should fail");
        assert!(err.to_string().contains("failure"));
    }
}
