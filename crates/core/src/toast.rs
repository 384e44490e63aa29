//! Single-slot toast manager.
//!
//! At most one toast exists at a time. Showing a new toast replaces the
//! current one; timers scheduled for the replaced toast carry its id and
//! become no-ops when they fire.

use crate::config::ToastConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Displayed, entry animation running or finished.
    Visible,
    /// Exit animation running; removal pending.
    Exiting,
}

/// What the host must do after [`ToastSlot::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket {
    pub id: ToastId,
    /// Toast whose node must be removed immediately.
    pub replaced: Option<ToastId>,
    /// Delay before calling [`ToastSlot::begin_exit`].
    pub exit_after_ms: u32,
    /// Delay, after the exit starts, before calling [`ToastSlot::finish`].
    pub remove_after_ms: u32,
}

#[derive(Debug, Clone)]
pub struct ToastSlot {
    next_id: u64,
    current: Option<(ToastId, ToastPhase)>,
    display_ms: u32,
    exit_ms: u32,
}

impl ToastSlot {
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            next_id: 0,
            current: None,
            display_ms: config.display_ms,
            exit_ms: config.exit_ms,
        }
    }

    pub fn show(&mut self) -> ToastTicket {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let replaced = self.current.replace((id, ToastPhase::Visible)).map(|(old, _)| old);
        if let Some(old) = replaced {
            log::debug!("Toast {:?} replaced by {:?}", old, id);
        }
        ToastTicket {
            id,
            replaced,
            exit_after_ms: self.display_ms,
            remove_after_ms: self.exit_ms,
        }
    }

    /// Starts the exit phase of `id`. Returns `false` for stale ids.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match &mut self.current {
            Some((current, phase)) if *current == id && *phase == ToastPhase::Visible => {
                *phase = ToastPhase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Empties the slot if `id` is the exiting toast. Returns `false` for
    /// stale ids or a toast that has not started exiting.
    pub fn finish(&mut self, id: ToastId) -> bool {
        match self.current {
            Some((current, ToastPhase::Exiting)) if current == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Empties the slot unconditionally, returning the toast that was shown.
    pub fn clear(&mut self) -> Option<ToastId> {
        self.current.take().map(|(id, _)| id)
    }

    pub fn current(&self) -> Option<ToastId> {
        self.current.map(|(id, _)| id)
    }

    pub fn phase(&self) -> Option<ToastPhase> {
        self.current.map(|(_, phase)| phase)
    }
}
