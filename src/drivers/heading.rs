//! External heading state provider

/// Source of the vehicle's compass heading.
///
/// The control loop reads the heading once per invocation, not continuously;
/// reorienting the vehicle is a higher-level action that happens between
/// invocations.
pub trait HeadingSource: Send {
    /// Current heading in raw degrees.
    fn current_heading(&self) -> u16;
}
