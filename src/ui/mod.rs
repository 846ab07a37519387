//! Terminal UI components.

mod spinner;

pub use spinner::Spinner;
