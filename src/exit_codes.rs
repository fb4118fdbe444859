//! Exit statuses of the `reverse` binary.

/// Every line was read and written.
pub const OK: i32 = 0;
/// Any failure: usage, open, same-file, allocation, read or write.
pub const FAILURE: i32 = 1;
