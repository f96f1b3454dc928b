use crate::listeners::EventHub;
use crate::listeners::ListenerGuard;

/// A pointer-down anywhere in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerDown<T> {
    pub target: T,
}

/// The area that counts as "inside" the search box.
pub trait Region<T>: Send + Sync {
    fn contains(&self, target: &T) -> bool;
}

impl<T, F> Region<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn contains(&self, target: &T) -> bool {
        self(target)
    }
}

/// Hides suggestions when the user presses outside the search region.
///
/// The document listener is attached on [`OutsideDismissal::mount`] and
/// detached when the value is dropped or unmounted.
#[derive(Debug)]
pub struct OutsideDismissal {
    guard: ListenerGuard,
}

impl OutsideDismissal {
    pub fn mount<T, R, F>(hub: &EventHub<PointerDown<T>>, region: R, on_dismiss: F) -> Self
    where
        T: 'static,
        R: Region<T> + 'static,
        F: Fn() + Send + Sync + 'static,
    {
        let guard = hub.attach(move |event: &PointerDown<T>| {
            if !region.contains(&event.target) {
                on_dismiss();
            }
        });
        Self { guard }
    }

    pub fn unmount(self) {
        self.guard.detach();
    }
}
