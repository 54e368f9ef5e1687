pub mod notifier;
pub mod surface;
