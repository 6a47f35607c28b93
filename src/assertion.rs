//! Checked assertions
//!
//! [`assert!`](crate::assert) expands to a conditional call to
//! [`assertion_failure`]. With the `disable-assertions` feature it expands
//! to nothing that runs: the expression is type checked but never evaluated,
//! so callers must not rely on side effects inside an assertion.

use crate::mode::{self, Completion};
use core::fmt;

/// A failed assertion, captured at the call site.
///
/// Only ever built on the way to [`assertion_failure`], which never returns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Failure {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
    pub expression: &'static str,
}

impl Failure {
    pub const fn new(
        file: &'static str,
        line: u32,
        function: &'static str,
        expression: &'static str,
    ) -> Self {
        Failure {
            file,
            line,
            function,
            expression,
        }
    }
}

// Tooling greps for this exact layout
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "assertion failure in {}:{} ({}): '{}'",
            self.file, self.line, self.function, self.expression
        )
    }
}

/// Report a failed assertion and stop.
///
/// Writes the diagnostic line, hits the failure marker, then terminates
/// with a non-zero status (host) or parks under the debugger (target).
/// Client code need never call this directly.
#[cold]
#[inline(never)]
pub fn assertion_failure(
    file: &'static str,
    line: u32,
    function: &'static str,
    expression: &'static str,
) -> ! {
    fail_with::<mode::Active>(Failure::new(file, line, function, expression))
}

/// The shared failure path: one diagnostic line, then the failure marker.
pub(crate) fn fail_with<C: Completion>(failure: Failure) -> ! {
    C::diagnostic(format_args!("{}\n", failure));
    C::report_failure()
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    core::any::type_name::<T>()
}

/// Reduce the type name of a helper item nested in a function to that
/// function's bare name, e.g. `crate::tests::{{closure}}::f` -> `tests`.
#[doc(hidden)]
pub fn function_path(item: &'static str) -> &'static str {
    let mut name = item.strip_suffix("::f").unwrap_or(item);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

/// Name of the enclosing function, like C's `__FUNCTION__`.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        $crate::__private::function_path($crate::__private::type_name_of(f))
    }};
}

/// Check that a boolean expression holds.
///
/// On failure, reports file, line, enclosing function and the expression
/// text, then terminates the run. Nothing after the failing check executes.
#[cfg(not(feature = "disable-assertions"))]
#[macro_export]
macro_rules! assert {
    ($expression:expr $(,)?) => {{
        if !($expression) {
            $crate::assertion_failure(
                file!(),
                line!(),
                $crate::function_name!(),
                stringify!($expression),
            );
        }
    }};
}

/// Check that a boolean expression holds.
///
/// Assertions are disabled in this build; the expression is not evaluated.
#[cfg(feature = "disable-assertions")]
#[macro_export]
macro_rules! assert {
    ($expression:expr $(,)?) => {{
        if false {
            let _: bool = $expression;
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_layout() {
        let failure = Failure::new("tests/math.rs", 42, "tests", "2 == 3");
        assert_eq!(
            failure.to_string(),
            "assertion failure in tests/math.rs:42 (tests): '2 == 3'"
        );
    }

    #[test]
    fn function_path_trims_helper_item() {
        assert_eq!(function_path("my_crate::tests::f"), "tests");
        assert_eq!(function_path("my_crate::suite::check_math::f"), "check_math");
        assert_eq!(
            function_path("my_crate::tests::{{closure}}::{{closure}}::f"),
            "tests"
        );
        assert_eq!(function_path("main"), "main");
    }

    #[test]
    fn function_name_reports_enclosing_fn() {
        assert_eq!(crate::function_name!(), "function_name_reports_enclosing_fn");

        let from_closure = || crate::function_name!();
        assert_eq!(from_closure(), "function_name_reports_enclosing_fn");
    }

    #[cfg(not(feature = "disable-assertions"))]
    #[test]
    fn holding_assertion_is_silent() {
        let mut evaluated = 0;
        crate::assert!({
            evaluated += 1;
            1 == 1
        });
        crate::assert!(evaluated == 1,);
        assert_eq!(evaluated, 1);
    }

    #[test]
    fn assertion_is_a_statement() {
        let flag = true;
        if flag {
            crate::assert!(flag)
        } else {
            crate::assert!(!flag)
        }
        match flag {
            true => crate::assert!(flag),
            false => {}
        }
    }

    #[cfg(feature = "disable-assertions")]
    #[test]
    fn disabled_assertion_skips_expression() {
        let mut side_effect_flag = false;
        crate::assert!({
            side_effect_flag = true;
            side_effect_flag
        });
        crate::assert!(1 == 2);
        assert_eq!(side_effect_flag, false);
    }
}
