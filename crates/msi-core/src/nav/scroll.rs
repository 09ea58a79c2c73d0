//! Scoped handles on the host page: the scroll lock and scroll subscriptions.

use std::fmt;
use std::rc::Rc;

/// The host page whose scrolling can be suspended.
///
/// The desktop app implements this by toggling `overflow` on the document
/// body. Tests use a recording host.
pub trait ScrollHost {
    /// Stop the page behind the overlay from scrolling.
    fn suspend_scroll(&self);
    /// Undo a previous [`ScrollHost::suspend_scroll`].
    fn restore_scroll(&self);
}

impl<T: ScrollHost + ?Sized> ScrollHost for &T {
    fn suspend_scroll(&self) {
        (**self).suspend_scroll()
    }

    fn restore_scroll(&self) {
        (**self).restore_scroll()
    }
}

impl<T: ScrollHost + ?Sized> ScrollHost for Rc<T> {
    fn suspend_scroll(&self) {
        (**self).suspend_scroll()
    }

    fn restore_scroll(&self) {
        (**self).restore_scroll()
    }
}

/// Host that ignores lock requests (headless rendering, doc examples).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopScrollHost;

impl ScrollHost for NoopScrollHost {
    fn suspend_scroll(&self) {}
    fn restore_scroll(&self) {}
}

/// Guard that keeps host scrolling suspended while it is alive.
///
/// Acquiring suspends, dropping restores. Restore runs exactly once.
#[must_use = "dropping the lock restores scrolling immediately"]
pub struct ScrollLock<H: ScrollHost> {
    host: H,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        host.suspend_scroll();
        tracing::trace!("scroll lock acquired");
        Self { host }
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.restore_scroll();
        tracing::trace!("scroll lock released");
    }
}

impl<H: ScrollHost> fmt::Debug for ScrollLock<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock").finish_non_exhaustive()
    }
}

/// A registered listener that is deregistered when the guard goes away.
///
/// Wraps the release action for something like a window scroll listener.
/// The action runs once: on [`Subscription::release`] or on drop, whichever
/// comes first.
#[must_use = "dropping the subscription deregisters it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Deregister now instead of at drop.
    pub fn release(mut self) {
        self.run_release();
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
