//! Shared validation helpers. Each returns the problem, if any.

/// `value` outside `[min, max]`.
pub(crate) fn out_of_range(name: &str, value: u32, min: u32, max: u32) -> Option<String> {
    (value < min || value > max).then(|| format!("{name} = {value} is out of range [{min}, {max}]"))
}

/// `value` blank.
pub(crate) fn blank(name: &str, value: &str) -> Option<String> {
    value
        .trim()
        .is_empty()
        .then(|| format!("{name} must not be empty"))
}

/// Record the problem `check` finds in `field` and put the default back.
pub(crate) fn reset_if<T: Clone>(
    problems: &mut Vec<String>,
    field: &mut T,
    default: &T,
    check: impl FnOnce(&T) -> Option<String>,
) {
    if let Some(problem) = check(field) {
        problems.push(problem);
        *field = default.clone();
    }
}
