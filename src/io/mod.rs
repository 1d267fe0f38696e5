/// Image outputs and boot code sources

/// Resizable image output
pub mod output;
/// Sized boot code input
pub mod source;

pub use output::ImageOutput;
pub use source::BootSource;
