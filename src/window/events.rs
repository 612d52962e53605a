//! Window events.

/// Events the window reacts to.
///
/// Input devices are not tracked: the demo has no interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowEvent {
    /// The user asked to close the window.
    Close,
    /// The drawable size changed, in physical pixels.
    FramebufferSize(u32, u32),
}
