/// Reasons an explicit breakpoint table can not back an [`IntervalMap`].
///
/// Returned by [`IntervalMap::from_breakpoints`], which is also what the
/// `serde1` deserializer goes through.
///
/// [`IntervalMap`]: crate::IntervalMap
/// [`IntervalMap::from_breakpoints`]: crate::IntervalMap::from_breakpoints
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointError {
    /// The key at `index` is not strictly greater than the key before it.
    #[error("breakpoint {index} is not strictly after its predecessor")]
    Unordered { index: usize },
    /// The value at `index` is the value already in effect before it
    /// (the previous breakpoint's, or the default for the first one).
    #[error("breakpoint {index} repeats the value in effect before it")]
    Redundant { index: usize },
    /// The last breakpoint does not return to the default value.
    #[error("last breakpoint does not restore the default value")]
    Unterminated,
}
