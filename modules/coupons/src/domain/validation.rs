//! Field validation for coupon requests
//!
//! Validators never touch storage. They report every violation in rule
//! order; the service decides how many to expose.

use crate::contract::{CouponCreate, CouponUpdate};

pub const MIN_PERCENT: i32 = 1;
pub const MAX_PERCENT: i32 = 100;

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Wire name of the offending field
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a create request
pub fn validate_create(input: &CouponCreate) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_name(&input.name, &mut violations);
    check_percent(input.percent, &mut violations);
    violations
}

/// Validate an update request
pub fn validate_update(input: &CouponUpdate) -> Vec<Violation> {
    let mut violations = Vec::new();

    if input.id == 0 {
        violations.push(Violation::new("Id", "'Id' must not be empty."));
    }
    if input.id <= 0 {
        violations.push(Violation::new("Id", "'Id' must be greater than '0'."));
    }

    check_name(&input.name, &mut violations);
    check_percent(input.percent, &mut violations);
    violations
}

fn check_name(name: &str, violations: &mut Vec<Violation>) {
    if name.trim().is_empty() {
        violations.push(Violation::new("Name", "'Name' must not be empty."));
    }
}

fn check_percent(percent: i32, violations: &mut Vec<Violation>) {
    if !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) {
        violations.push(Violation::new(
            "Percent",
            format!(
                "'Percent' must be between {} and {}. You entered {}.",
                MIN_PERCENT, MAX_PERCENT, percent
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, percent: i32) -> CouponCreate {
        CouponCreate {
            name: name.to_string(),
            percent,
        }
    }

    fn update(id: i32, name: &str, percent: i32) -> CouponUpdate {
        CouponUpdate {
            id,
            name: name.to_string(),
            percent,
            is_active: true,
        }
    }

    #[test]
    fn test_valid_create() {
        assert!(validate_create(&create("SUMMER", 20)).is_empty());
        assert!(validate_create(&create("X", 1)).is_empty());
        assert!(validate_create(&create("X", 100)).is_empty());
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let violations = validate_create(&create("", 20));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "Name");
        assert_eq!(violations[0].message, "'Name' must not be empty.");

        assert_eq!(validate_create(&create("   ", 20)).len(), 1);
    }

    #[test]
    fn test_create_rejects_out_of_range_percent() {
        for percent in [0, -5, 101, 1000] {
            let violations = validate_create(&create("SUMMER", percent));
            assert_eq!(violations.len(), 1, "percent {} should fail", percent);
            assert_eq!(
                violations[0].message,
                format!("'Percent' must be between 1 and 100. You entered {}.", percent)
            );
        }
    }

    #[test]
    fn test_create_reports_violations_in_rule_order() {
        let violations = validate_create(&create("", 0));
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["Name", "Percent"]);
    }

    #[test]
    fn test_valid_update() {
        assert!(validate_update(&update(1, "SUMMER", 50)).is_empty());
    }

    #[test]
    fn test_update_zero_id_is_empty_and_not_positive() {
        let violations = validate_update(&update(0, "SUMMER", 50));
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].message, "'Id' must not be empty.");
        assert_eq!(violations[1].message, "'Id' must be greater than '0'.");
    }

    #[test]
    fn test_update_negative_id() {
        let violations = validate_update(&update(-3, "SUMMER", 50));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "'Id' must be greater than '0'.");
    }

    #[test]
    fn test_update_checks_name_and_percent() {
        let violations = validate_update(&update(7, " ", 0));
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["Name", "Percent"]);
    }
}
