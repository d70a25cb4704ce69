/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, plus the
/// floored-modulus routines used by the `%` operator.
pub mod num;
