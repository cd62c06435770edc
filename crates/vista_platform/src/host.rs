//! Host platform services consumed by UI components

use crate::dimensions::{Dimensions, ViewportDimensions};
use crate::error::Result;
use crate::os::PlatformOs;
use crate::subscription::Subscription;

/// Handler invoked with each viewport change
pub type DimensionsHandler = Box<dyn FnMut(ViewportDimensions)>;

/// Services a host environment provides to UI components
///
/// Implementations live on the UI thread. `subscribe` may deliver any number
/// of notifications until the returned [`Subscription`] is released.
pub trait HostServices {
    /// Current viewport dimensions
    fn dimensions(&self) -> ViewportDimensions;

    /// Register a handler for viewport changes
    fn subscribe(&self, handler: DimensionsHandler) -> Result<Subscription>;

    /// Identifier of the running operating system
    ///
    /// Constant for the lifetime of the process.
    fn platform(&self) -> PlatformOs;
}

/// In-process host backed by a [`Dimensions`] channel
///
/// Backends feed window changes in through [`Host::dimensions_channel`];
/// components consume them through [`HostServices`].
#[derive(Clone, Debug)]
pub struct Host {
    os: PlatformOs,
    dimensions: Dimensions,
}

impl Host {
    /// Create a host for the given platform with initial dimensions
    pub fn new(os: PlatformOs, initial: ViewportDimensions) -> Self {
        Self {
            os,
            dimensions: Dimensions::new(initial),
        }
    }

    /// Create a host for the compiled target
    pub fn current(initial: ViewportDimensions) -> Self {
        Self::new(PlatformOs::current(), initial)
    }

    /// The notification channel, for backends that publish changes
    pub fn dimensions_channel(&self) -> &Dimensions {
        &self.dimensions
    }
}

impl HostServices for Host {
    fn dimensions(&self) -> ViewportDimensions {
        self.dimensions.get()
    }

    fn subscribe(&self, handler: DimensionsHandler) -> Result<Subscription> {
        Ok(self.dimensions.add_listener(handler))
    }

    fn platform(&self) -> PlatformOs {
        self.os
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_host_reports_platform_and_dimensions() {
        let host = Host::new(PlatformOs::Ios, ViewportDimensions::new(375.0, 812.0));
        assert_eq!(host.platform(), PlatformOs::Ios);
        assert_eq!(host.dimensions(), ViewportDimensions::new(375.0, 812.0));
    }

    #[test]
    fn test_subscribe_receives_channel_updates() {
        let host = Host::current(ViewportDimensions::new(100.0, 100.0));
        let last = Rc::new(Cell::new(ViewportDimensions::default()));

        let sink = Rc::clone(&last);
        let sub = host
            .subscribe(Box::new(move |d| sink.set(d)))
            .unwrap();

        host.dimensions_channel().set(ViewportDimensions::new(640.0, 480.0));
        assert_eq!(last.get(), ViewportDimensions::new(640.0, 480.0));
        assert_eq!(host.dimensions(), ViewportDimensions::new(640.0, 480.0));

        drop(sub);
        assert_eq!(host.dimensions_channel().listener_count(), 0);
    }

    #[test]
    fn test_clones_share_channel() {
        let host = Host::new(PlatformOs::Android, ViewportDimensions::default());
        let other = host.clone();
        other.dimensions_channel().set(ViewportDimensions::new(1.0, 2.0));
        assert_eq!(host.dimensions(), ViewportDimensions::new(1.0, 2.0));
    }
}
