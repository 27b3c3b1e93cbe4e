//! Image slots - one current handle per attachment point, guarded by a
//! generation counter so late decode completions can't resurrect a replaced
//! image.

use crate::assets::{Bitmap, ImageSource};
use crate::error::PosterResult;
use std::collections::VecDeque;
use std::fmt;

/// Named image attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Masthead,
    TopAd,
    BottomAd,
    PrimaryPhoto,
    SecondaryPhoto,
}

impl SlotId {
    pub const ALL: [SlotId; 5] = [
        SlotId::Masthead,
        SlotId::TopAd,
        SlotId::BottomAd,
        SlotId::PrimaryPhoto,
        SlotId::SecondaryPhoto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SlotId::Masthead => "masthead",
            SlotId::TopAd => "top_ad",
            SlotId::BottomAd => "bottom_ad",
            SlotId::PrimaryPhoto => "primary_photo",
            SlotId::SecondaryPhoto => "secondary_photo",
        }
    }

    /// Caption drawn while the slot has nothing to show
    pub fn placeholder_caption(self) -> &'static str {
        match self {
            SlotId::Masthead => "Masthead",
            SlotId::TopAd => "Top Ad",
            SlotId::BottomAd => "Bottom Ad",
            SlotId::PrimaryPhoto => "Upload primary photo",
            SlotId::SecondaryPhoto => "Upload secondary photo",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of the image currently attached to a slot
#[derive(Debug, Clone)]
pub enum ImageHandle {
    /// Decode issued, not yet complete
    Pending,
    Ready(Bitmap),
    /// Decode failed; rendered as a placeholder
    Failed(String),
}

impl ImageHandle {
    pub fn is_ready(&self) -> bool {
        matches!(self, ImageHandle::Ready(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageSlot {
    generation: u64,
    handle: Option<ImageHandle>,
}

impl ImageSlot {
    /// Replace the handle with a pending one; returns the new generation
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.handle = Some(ImageHandle::Pending);
        self.generation
    }

    /// Drop the handle; any in-flight decode becomes stale
    pub fn clear(&mut self) {
        self.generation += 1;
        self.handle = None;
    }

    /// Apply a decode result issued for `generation`
    ///
    /// Returns `false` when the completion is stale or the handle has already
    /// settled.
    pub fn complete(&mut self, generation: u64, result: PosterResult<Bitmap>) -> bool {
        if generation != self.generation {
            return false;
        }
        if !self.is_pending() {
            return false;
        }
        self.handle = Some(match result {
            Ok(bitmap) => ImageHandle::Ready(bitmap),
            Err(err) => ImageHandle::Failed(err.to_string()),
        });
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle(&self) -> Option<&ImageHandle> {
        self.handle.as_ref()
    }

    /// The bitmap, only once the decode has succeeded
    pub fn bitmap(&self) -> Option<&Bitmap> {
        match &self.handle {
            Some(ImageHandle::Ready(bitmap)) => Some(bitmap),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.bitmap().is_some()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.handle, Some(ImageHandle::Pending))
    }
}

/// A decode issued for a slot generation
#[derive(Debug, Clone)]
pub struct PendingDecode {
    pub slot: SlotId,
    pub generation: u64,
    pub source: ImageSource,
}

impl PendingDecode {
    pub fn run(self) -> DecodeCompletion {
        DecodeCompletion {
            slot: self.slot,
            generation: self.generation,
            result: self.source.load(),
        }
    }
}

/// Decode result tagged with the generation it was issued for
#[derive(Debug)]
pub struct DecodeCompletion {
    pub slot: SlotId,
    pub generation: u64,
    pub result: PosterResult<Bitmap>,
}

/// FIFO of decodes waiting for the session loop
#[derive(Debug, Default)]
pub struct DecodeQueue {
    pending: VecDeque<PendingDecode>,
}

impl DecodeQueue {
    pub fn push(&mut self, decode: PendingDecode) {
        self.pending.push_back(decode);
    }

    pub fn pop(&mut self) -> Option<PendingDecode> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
