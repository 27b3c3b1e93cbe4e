//! Render scheduler - coalesces repaint requests into at most one repaint per frame

/// Idempotent-until-consumed repaint flag
///
/// The first request in a frame arms the scheduler; further requests before
/// the frame runs are absorbed.
#[derive(Debug, Default)]
pub struct RenderScheduler {
    armed: bool,
    requests: u64,
    repaints: u64,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a repaint on the next frame; `true` if this call armed it
    pub fn request_repaint(&mut self) -> bool {
        self.requests += 1;
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Frame tick: disarm and report whether a repaint is due
    pub fn begin_frame(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.repaints += 1;
        true
    }

    /// Repaints granted so far
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    /// Repaint requests received so far, coalesced or not
    pub fn requests(&self) -> u64 {
        self.requests
    }
}
