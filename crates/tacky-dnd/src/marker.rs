//! Global "a drag is in progress" flag.
//!
//! A DOM host turns this into a class on `<body>` so hover styles, focus
//! rings and text selection are suppressed for the length of a gesture. The
//! flag is only ever raised through a [`DragMarkerGuard`], and dropping the
//! guard lowers it, so leaving a gesture by any path clears it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Cheap, cloneable handle to the shared flag.
#[derive(Debug, Clone, Default)]
pub struct DragMarker {
    holders: Arc<AtomicUsize>,
}

impl DragMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }

    #[must_use = "the marker is cleared as soon as the guard is dropped"]
    pub fn acquire(&self) -> DragMarkerGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        DragMarkerGuard {
            holders: Arc::clone(&self.holders),
        }
    }
}

#[derive(Debug)]
pub struct DragMarkerGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for DragMarkerGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}
