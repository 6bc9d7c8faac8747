// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Runs the given block only when the `DEBUG_*` flag passed in is `true`. This keeps the
/// noisy [`tracing`] calls in the edit path behind a module scoped switch.
///
/// ```
/// use diffable_text::call_if_true;
///
/// const DEBUG_SOMETHING: bool = true;
/// let mut count = 0;
/// call_if_true!(DEBUG_SOMETHING, {
///     count += 1;
/// });
/// assert_eq!(count, 1);
/// ```
#[macro_export]
macro_rules! call_if_true {
    ($cond:ident, $block: expr) => {{
        if $cond {
            $block
        }
    }};
}

/// A wrapper for `pretty_assertions::assert_eq!` macro. The crate that uses this macro
/// must have `pretty_assertions` as a (dev) dependency.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
