use maybe_sync::{MaybeSend, MaybeSync};

/// Notifies the host UI that the viewer state changed outside of a UI event, e.g. when the
/// terrain finished loading in the background.
pub trait Messenger: MaybeSend + MaybeSync {
    /// Ask the host to redraw the viewer.
    fn request_redraw(&self);
}

/// Messenger that ignores all requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn request_redraw(&self) {}
}
