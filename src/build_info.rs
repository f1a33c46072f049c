//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn build_date_format() {
        // YYYY-MM-DD, or "unknown" in stripped environments.
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }
}
