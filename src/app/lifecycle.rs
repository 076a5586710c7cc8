//! Pointer subscription tied to the controller's mount lifecycle.
//!
//! The outside-click listener is a scoped resource. It is acquired when the
//! menu becomes part of the visible interface and released when it leaves.
//! Each transition yields exactly one [`Action`], repeated calls yield none,
//! so the runtime never subscribes twice or unsubscribes something it does
//! not hold.

use super::actions::Action;

/// Whether the controller currently holds the pointer-event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSubscription {
    #[default]
    Released,
    Active,
}

impl PointerSubscription {
    /// Acquires the subscription on mount.
    ///
    /// ```
    /// use zelect::app::{Action, PointerSubscription};
    ///
    /// let mut pointer = PointerSubscription::default();
    /// assert_eq!(pointer.acquire(), Some(Action::SubscribePointer));
    /// assert_eq!(pointer.acquire(), None);
    /// ```
    pub fn acquire(&mut self) -> Option<Action> {
        match self {
            Self::Released => {
                *self = Self::Active;
                tracing::debug!("pointer subscription acquired");
                Some(Action::SubscribePointer)
            }
            Self::Active => None,
        }
    }

    /// Releases the subscription on unmount.
    pub fn release(&mut self) -> Option<Action> {
        match self {
            Self::Active => {
                *self = Self::Released;
                tracing::debug!("pointer subscription released");
                Some(Action::UnsubscribePointer)
            }
            Self::Released => None,
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
