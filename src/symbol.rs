use std::fmt::Debug;

/// One unit of the input alphabet.
///
/// Any small copyable value with a total order qualifies; `u8` and `char`
/// are the usual choices. The order decides how equal-weight leaves are
/// merged and the order in which tables are listed.
pub trait Symbol: Copy + Ord + Debug {}

impl<T: Copy + Ord + Debug> Symbol for T {}
