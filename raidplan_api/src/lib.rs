pub mod config;
pub mod constants;
pub mod error;
pub mod provisioning;

/// Returns true when the value equals its type's default. Used to skip
/// serializing untouched optional sections.
pub(crate) fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    t == &T::default()
}
