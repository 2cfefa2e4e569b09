/// File-level summary command.
pub mod info;
/// Single-chunk inspection command.
pub mod show;
/// Depth-first tree listing command.
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;
