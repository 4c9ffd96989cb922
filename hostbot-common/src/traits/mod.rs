// File: hostbot-common/src/traits/mod.rs
pub mod notify_traits;

pub use notify_traits::Notifier;
