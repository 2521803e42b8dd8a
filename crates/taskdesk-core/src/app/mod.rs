//! App - hosting the store outside a single thread of control.

pub mod shared;

pub use self::shared::SharedTaskStore;
