//! Side effects requested by the event handler.
//!
//! The handler never talks to Zellij directly. It returns a list of
//! [`Action`]s which `main.rs` translates into plugin API calls.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts receiving pointer (mouse) events.
    ///
    /// Emitted once when the controller is mounted. Outside-click detection
    /// only works while this subscription is held.
    SubscribePointer,

    /// Stops receiving pointer events.
    ///
    /// Emitted once when the controller is unmounted, so no click is ever
    /// routed to a menu that is no longer on screen.
    UnsubscribePointer,
}
