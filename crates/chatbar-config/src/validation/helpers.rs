//! Shared validation helpers used by all domain validators.

/// Push an error unless `lower < upper`.
pub(crate) fn validate_strictly_below(
    errors: &mut Vec<String>,
    lower_name: &str,
    lower: i32,
    upper_name: &str,
    upper: i32,
) {
    if lower >= upper {
        errors.push(format!(
            "{lower_name} = {lower} must be less than {upper_name} = {upper}"
        ));
    }
}

/// Push an error if `value` is zero.
pub(crate) fn validate_nonzero(errors: &mut Vec<String>, name: &str, value: u64) {
    if value == 0 {
        errors.push(format!("{name} must be greater than 0"));
    }
}
