pub mod callout;
pub mod code_fence;
pub mod heading;
pub mod list_marker;

pub use callout::CalloutMarker;
pub use code_fence::CodeFence;
pub use heading::BoldHeading;
pub use list_marker::ListMarker;
