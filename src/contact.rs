//! Contact modal state that does not depend on a browser.
//!
//! [`ModalLifecycle`] owns the document-level listeners and the body scroll
//! lock while the modal is open. Both are acquired when the modal opens and
//! released on every way out: a dismissal, the parent closing it, or the
//! lifecycle being dropped while still open.
//!
//! Opening is two steps: the modal first mounts without its entrance styles,
//! then [`ModalLifecycle::start_animation`] applies them once it is in the
//! document so the transition has a starting frame. Closing drops both at once.

/// Whether the modal is in the tree, and whether its entrance transition is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalVisibility {
    pub is_open: bool,
    pub is_animating: bool,
}

impl ModalVisibility {
    pub const CLOSED: Self = Self {
        is_open: false,
        is_animating: false,
    };
    /// Mounted, entrance styles not applied yet.
    pub const ENTERING: Self = Self {
        is_open: true,
        is_animating: false,
    };
    pub const OPEN: Self = Self {
        is_open: true,
        is_animating: true,
    };
}

/// What closed the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    OutsideClick,
    Escape,
    CloseButton,
    Parent,
}

impl Dismissal {
    /// A pointer-down only dismisses when it lands outside the modal root.
    pub fn from_pointer_down(inside_modal: bool) -> Option<Self> {
        (!inside_modal).then_some(Self::OutsideClick)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Self::Escape)
    }
}

/// The document the modal sits in.
pub trait ModalHost {
    /// Handles for the pointer-down and key listeners.
    type Listeners;

    fn attach_listeners(&mut self) -> Self::Listeners;
    fn detach_listeners(&mut self, listeners: Self::Listeners);
    fn set_scroll_locked(&mut self, locked: bool);
}

pub struct ModalLifecycle<H: ModalHost> {
    host: H,
    listeners: Option<H::Listeners>,
    visibility: ModalVisibility,
    last_dismissal: Option<Dismissal>,
}

impl<H: ModalHost> ModalLifecycle<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            listeners: None,
            visibility: ModalVisibility::CLOSED,
            last_dismissal: None,
        }
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.listeners.is_some()
    }

    /// What closed the modal most recently, if it has ever been dismissed.
    pub fn last_dismissal(&self) -> Option<Dismissal> {
        self.last_dismissal
    }

    /// Opens the modal. Opening an already open modal changes nothing.
    pub fn open(&mut self) {
        if self.listeners.is_some() {
            return;
        }
        self.listeners = Some(self.host.attach_listeners());
        self.host.set_scroll_locked(true);
        self.visibility = ModalVisibility::ENTERING;
    }

    /// Applies the entrance styles. Does nothing unless the modal is open.
    pub fn start_animation(&mut self) {
        if self.is_open() {
            self.visibility = ModalVisibility::OPEN;
        }
    }

    /// Closes the modal, releasing the listeners and the scroll lock.
    pub fn close(&mut self) {
        self.visibility = ModalVisibility::CLOSED;
        if let Some(listeners) = self.listeners.take() {
            self.host.detach_listeners(listeners);
            self.host.set_scroll_locked(false);
        }
    }

    /// Follows the open flag owned by the parent.
    pub fn sync(&mut self, is_open: bool) {
        if is_open {
            self.open();
        } else {
            self.dismiss(Dismissal::Parent);
        }
    }

    /// Closes the modal for `reason`. Returns whether it was open.
    pub fn dismiss(&mut self, reason: Dismissal) -> bool {
        let was_open = self.is_open();
        if was_open {
            log::debug!("contact modal dismissed: {reason:?}");
            self.last_dismissal = Some(reason);
        }
        self.close();
        was_open
    }
}

impl<H: ModalHost> Drop for ModalLifecycle<H> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Default)]
    struct Document {
        attached: usize,
        attach_calls: usize,
        scroll_locked: bool,
    }

    #[derive(Clone, Default)]
    struct RecordingHost(Rc<RefCell<Document>>);

    impl ModalHost for RecordingHost {
        type Listeners = usize;

        fn attach_listeners(&mut self) -> usize {
            let mut doc = self.0.borrow_mut();
            doc.attached += 2;
            doc.attach_calls += 1;
            doc.attach_calls
        }

        fn detach_listeners(&mut self, _: usize) {
            self.0.borrow_mut().attached -= 2;
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.0.borrow_mut().scroll_locked = locked;
        }
    }

    fn lifecycle() -> (ModalLifecycle<RecordingHost>, Rc<RefCell<Document>>) {
        let host = RecordingHost::default();
        let doc = host.0.clone();
        (ModalLifecycle::new(host), doc)
    }

    fn assert_released(modal: &ModalLifecycle<RecordingHost>, doc: &Rc<RefCell<Document>>) {
        assert_eq!(modal.visibility(), ModalVisibility::CLOSED);
        let doc = doc.borrow();
        assert_eq!(doc.attached, 0);
        assert!(!doc.scroll_locked);
    }

    #[test]
    fn test_starts_closed_without_listeners() {
        let (modal, doc) = lifecycle();
        assert_released(&modal, &doc);
        assert_eq!(doc.borrow().attach_calls, 0);
    }

    #[test]
    fn test_open_acquires_listeners_and_scroll_lock() {
        let (mut modal, doc) = lifecycle();
        modal.open();

        assert_eq!(modal.visibility(), ModalVisibility::ENTERING);
        assert_eq!(doc.borrow().attached, 2);
        assert!(doc.borrow().scroll_locked);
    }

    #[test]
    fn test_open_is_idempotent() {
        let (mut modal, doc) = lifecycle();
        modal.open();
        modal.open();
        modal.sync(true);

        assert_eq!(doc.borrow().attach_calls, 1);
        assert_eq!(doc.borrow().attached, 2);
    }

    #[test]
    fn test_every_dismissal_releases_everything() {
        let dismissals = [
            Dismissal::from_key("Escape"),
            Dismissal::from_pointer_down(false),
            Some(Dismissal::CloseButton),
        ];
        for reason in dismissals {
            let reason = reason.expect("event should dismiss");
            let (mut modal, doc) = lifecycle();
            modal.open();
            assert!(modal.dismiss(reason));
            assert_released(&modal, &doc);
            assert_eq!(modal.last_dismissal(), Some(reason));
        }
    }

    #[test]
    fn test_open_mounts_before_animating() {
        let (mut modal, _doc) = lifecycle();
        modal.sync(true);
        let entering = modal.visibility();
        assert!(entering.is_open);
        assert!(!entering.is_animating);

        modal.start_animation();
        assert_eq!(modal.visibility(), ModalVisibility::OPEN);

        // a repeated open while animating keeps the entrance styles
        modal.sync(true);
        assert_eq!(modal.visibility(), ModalVisibility::OPEN);
    }

    #[test]
    fn test_close_drops_animation_immediately() {
        let (mut modal, doc) = lifecycle();
        modal.open();
        modal.start_animation();
        modal.dismiss(Dismissal::Escape);
        assert_released(&modal, &doc);

        modal.start_animation();
        assert_eq!(modal.visibility(), ModalVisibility::CLOSED);
    }

    #[test]
    fn test_dismissing_closed_modal_is_not_recorded() {
        let (mut modal, _doc) = lifecycle();
        assert!(!modal.dismiss(Dismissal::Escape));
        assert_eq!(modal.last_dismissal(), None);

        modal.open();
        modal.dismiss(Dismissal::OutsideClick);
        assert!(!modal.dismiss(Dismissal::CloseButton));
        assert_eq!(modal.last_dismissal(), Some(Dismissal::OutsideClick));
    }

    #[test]
    fn test_parent_close_releases_everything() {
        let (mut modal, doc) = lifecycle();
        modal.sync(true);
        modal.sync(false);
        assert_released(&modal, &doc);
        assert_eq!(modal.last_dismissal(), Some(Dismissal::Parent));
    }

    #[test]
    fn test_events_that_do_not_dismiss() {
        assert_eq!(Dismissal::from_pointer_down(true), None);
        assert_eq!(Dismissal::from_key("Enter"), None);
        assert_eq!(Dismissal::from_key("escape"), None);
        assert_eq!(Dismissal::from_key("Esc"), None);
    }

    #[test]
    fn test_reopen_after_close() {
        let (mut modal, doc) = lifecycle();
        modal.open();
        modal.close();
        modal.open();

        assert_eq!(doc.borrow().attach_calls, 2);
        assert_eq!(doc.borrow().attached, 2);
        assert!(doc.borrow().scroll_locked);
    }

    #[test]
    fn test_close_when_closed_leaves_page_scroll_alone() {
        let (mut modal, doc) = lifecycle();
        doc.borrow_mut().scroll_locked = true; // locked by someone else
        modal.close();
        modal.sync(false);
        assert!(doc.borrow().scroll_locked);
    }

    #[test]
    fn test_drop_while_open_releases_everything() {
        let (mut modal, doc) = lifecycle();
        modal.open();
        drop(modal);

        let doc = doc.borrow();
        assert_eq!(doc.attached, 0);
        assert!(!doc.scroll_locked);
    }
}
