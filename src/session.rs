//! Poster session - owns the state, the canvas and the repaint loop
//!
//! Every mutation goes through a setter that requests a repaint. Repaints
//! run on `frame()`, decodes on `pump_decodes()`; a host drives both (the
//! CLI simply calls `settle()`).

use crate::assets::ImageSource;
use crate::canvas::Canvas;
use crate::chrome::{draw_ad_band, draw_footer, draw_masthead, footer_text, format_timestamp};
use crate::collaborators::{AdFeed, ExportEvent, ExportLog, RotatingAdFeed, TracingExportLog};
use crate::config::{AdPair, StudioConfig};
use crate::context::{DrawContext, TextRun};
use crate::error::PosterResult;
use crate::export::{encode, export_file_name, ExportArtifact, ExportFormat};
use crate::layout::{Layout, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::scheduler::RenderScheduler;
use crate::slots::{DecodeCompletion, DecodeQueue, ImageSlot, PendingDecode, SlotId};
use crate::state::{PosterContent, PosterState, StaticAssets, DEFAULT_ACCENT, DEFAULT_BACKGROUND};
use crate::templates::{render_template, TemplateId};
use crate::text::FontFace;
use crate::Color;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

pub const STATUS_CLEARED: &str = "Cleared all fields.";
pub const STATUS_LOG_FAILED: &str = "Exported, but logging failed.";
pub const STATUS_EXPORT_FAILED: &str = "Export failed. Please try again.";

/// What the last repaint drew
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// 1-based repaint counter
    pub frame: u64,
    pub template: TemplateId,
    pub layout: Layout,
    pub runs: Vec<TextRun>,
}

impl RenderReport {
    pub fn contains_text(&self, needle: &str) -> bool {
        self.runs.iter().any(|run| run.text.contains(needle))
    }
}

pub struct PosterSession {
    config: StudioConfig,
    face: Box<dyn FontFace>,
    canvas: Canvas,
    state: PosterState,
    assets: StaticAssets,
    scheduler: RenderScheduler,
    decodes: DecodeQueue,
    ad_feed: Box<dyn AdFeed>,
    export_log: Box<dyn ExportLog>,
    clock: fn() -> DateTime<Utc>,
    report: Option<RenderReport>,
    status: String,
}

impl PosterSession {
    /// A session on the standard poster canvas with the bundled collaborators
    pub fn new(config: StudioConfig, face: Box<dyn FontFace>) -> Self {
        Self::with_canvas_size(config, face, CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub(crate) fn with_canvas_size(config: StudioConfig, face: Box<dyn FontFace>, width: u32, height: u32) -> Self {
        let ad_feed = RotatingAdFeed::new(config.ad_pairs.clone());
        let mut session = Self {
            config,
            face,
            canvas: Canvas::new(width, height),
            state: PosterState::default(),
            assets: StaticAssets::default(),
            scheduler: RenderScheduler::new(),
            decodes: DecodeQueue::default(),
            ad_feed: Box::new(ad_feed),
            export_log: Box::new(TracingExportLog),
            clock: Utc::now,
            report: None,
            status: String::new(),
        };
        session.scheduler.request_repaint();
        session
    }

    pub fn with_collaborators(mut self, ad_feed: Box<dyn AdFeed>, export_log: Box<dyn ExportLog>) -> Self {
        self.ad_feed = ad_feed;
        self.export_log = export_log;
        self
    }

    /// Replace the wall clock used for the footer and export names
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Queue the masthead and the feed's current ad pair
    pub fn start(&mut self) {
        let masthead = ImageSource::from_reference(&self.config.masthead);
        self.load_image(SlotId::Masthead, masthead);
        match self.ad_feed.current_pair() {
            Ok(pair) => {
                self.load_image(SlotId::TopAd, ImageSource::from_reference(&pair.top));
                self.load_image(SlotId::BottomAd, ImageSource::from_reference(&pair.bottom));
            }
            Err(err) => warn!(error = %err, "no ad pair available, drawing placeholders"),
        }
        info!(template = %self.state.template, "poster session started");
    }

    // ---- accessors ----

    pub fn state(&self) -> &PosterState {
        &self.state
    }

    pub fn assets(&self) -> &StaticAssets {
        &self.assets
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    pub fn pending_decodes(&self) -> usize {
        self.decodes.len()
    }

    pub fn render_report(&self) -> Option<&RenderReport> {
        self.report.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn slot(&self, slot: SlotId) -> &ImageSlot {
        match slot {
            SlotId::Masthead => &self.assets.masthead,
            SlotId::TopAd => &self.assets.top_ad,
            SlotId::BottomAd => &self.assets.bottom_ad,
            SlotId::PrimaryPhoto => &self.state.primary_photo,
            SlotId::SecondaryPhoto => &self.state.secondary_photo,
        }
    }

    fn slot_mut(&mut self, slot: SlotId) -> &mut ImageSlot {
        match slot {
            SlotId::Masthead => &mut self.assets.masthead,
            SlotId::TopAd => &mut self.assets.top_ad,
            SlotId::BottomAd => &mut self.assets.bottom_ad,
            SlotId::PrimaryPhoto => &mut self.state.primary_photo,
            SlotId::SecondaryPhoto => &mut self.state.secondary_photo,
        }
    }

    // ---- setters ----

    pub fn set_template(&mut self, template: TemplateId) {
        self.state.template = template;
        self.scheduler.request_repaint();
    }

    /// Select a template by id; unknown ids fall back to classic
    pub fn select_template(&mut self, id: &str) {
        self.set_template(TemplateId::resolve(id));
    }

    pub fn set_headline(&mut self, text: impl Into<String>) {
        self.state.headline = text.into();
        self.scheduler.request_repaint();
    }

    pub fn set_summary(&mut self, text: impl Into<String>) {
        self.state.summary = text.into();
        self.scheduler.request_repaint();
    }

    pub fn set_body(&mut self, text: impl Into<String>) {
        self.state.body = text.into();
        self.scheduler.request_repaint();
    }

    pub fn set_byline(&mut self, text: impl Into<String>) {
        self.state.byline = text.into();
        self.scheduler.request_repaint();
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.state.background = color;
        self.scheduler.request_repaint();
    }

    pub fn set_accent_color(&mut self, color: Color) {
        self.state.accent = color;
        self.scheduler.request_repaint();
    }

    /// Start loading `source` into `slot`, or clear the slot for `None`
    ///
    /// The slot shows a placeholder until the decode lands; completions for
    /// an older load are ignored.
    pub fn load_image(&mut self, slot: SlotId, source: Option<ImageSource>) {
        match source {
            Some(source) => {
                let generation = self.slot_mut(slot).begin_load();
                debug!(%slot, generation, source = %source.describe(), "image load queued");
                self.decodes.push(PendingDecode { slot, generation, source });
            }
            None => self.slot_mut(slot).clear(),
        }
        self.scheduler.request_repaint();
    }

    /// Load a new ad pair; blank references keep the current ad
    pub fn set_ad_pair(&mut self, pair: &AdPair) {
        for (slot, reference) in [(SlotId::TopAd, &pair.top), (SlotId::BottomAd, &pair.bottom)] {
            if let Some(source) = ImageSource::from_reference(reference) {
                self.load_image(slot, Some(source));
            }
        }
    }

    /// Apply a content snapshot field by field
    pub fn apply_content(&mut self, content: &PosterContent) {
        if let Some(id) = &content.template {
            self.select_template(id);
        }
        self.set_headline(content.headline.clone());
        self.set_summary(content.summary.clone());
        self.set_body(content.body.clone());
        self.set_byline(content.byline.clone());
        if let Some(color) = content.background_color {
            self.set_background_color(color);
        }
        if let Some(color) = content.accent_color {
            self.set_accent_color(color);
        }
        for (slot, reference) in content.photo_references() {
            self.load_image(slot, ImageSource::from_reference(reference));
        }
    }

    pub fn reset(&mut self) {
        self.state.template = TemplateId::Classic;
        self.state.headline.clear();
        self.state.summary.clear();
        self.state.body.clear();
        self.state.byline.clear();
        self.state.background = DEFAULT_BACKGROUND;
        self.state.accent = DEFAULT_ACCENT;
        self.state.primary_photo.clear();
        self.state.secondary_photo.clear();
        self.status = STATUS_CLEARED.to_string();
        self.scheduler.request_repaint();
    }

    // ---- loop ----

    /// Run up to `max` queued decodes; returns how many were applied
    ///
    /// Entries whose slot has moved to a newer generation are dropped before
    /// fetching and do not count against `max`.
    pub fn pump_decodes(&mut self, max: usize) -> usize {
        let mut ran = 0;
        let mut applied = 0;
        while ran < max {
            let Some(decode) = self.decodes.pop() else { break };
            if self.slot(decode.slot).generation() != decode.generation {
                debug!(slot = %decode.slot, generation = decode.generation, "stale decode skipped");
                continue;
            }
            ran += 1;
            if self.complete_decode(decode.run()) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply a decode completion produced outside the session
    pub fn complete_decode(&mut self, done: DecodeCompletion) -> bool {
        let DecodeCompletion { slot, generation, result } = done;
        if self.slot(slot).generation() != generation {
            debug!(%slot, generation, "stale decode completion ignored");
            return false;
        }
        if let Err(err) = &result {
            warn!(%slot, error = %err, "image unavailable, keeping placeholder");
        }
        let applied = self.slot_mut(slot).complete(generation, result);
        if applied {
            self.scheduler.request_repaint();
        }
        applied
    }

    /// Run the armed repaint, if any
    pub fn frame(&mut self) -> bool {
        if !self.scheduler.begin_frame() {
            return false;
        }
        self.repaint();
        true
    }

    /// Drain the decode queue, then run a frame
    pub fn tick(&mut self) -> bool {
        self.pump_decodes(usize::MAX);
        self.frame()
    }

    /// Tick until nothing is queued and no repaint is armed
    pub fn settle(&mut self) {
        while !self.decodes.is_empty() || self.scheduler.is_armed() {
            self.tick();
        }
    }

    fn repaint(&mut self) {
        let layout = Layout::compute(self.canvas.width() as f32, self.canvas.height() as f32);
        let stamp = format_timestamp((self.clock)(), self.config.utc_offset_minutes);
        let footer = footer_text(&self.config.site_name, &stamp, &self.config.username);

        self.canvas.clear(self.state.background);
        let mut ctx = DrawContext::new(&mut self.canvas, self.face.as_ref());
        draw_masthead(&mut ctx, &self.assets.masthead, &layout.masthead(), &self.config.brand_name);
        draw_ad_band(&mut ctx, &self.assets.top_ad, SlotId::TopAd, &layout.top_ad(), self.state.accent);
        draw_ad_band(&mut ctx, &self.assets.bottom_ad, SlotId::BottomAd, &layout.bottom_ad(), self.state.accent);
        render_template(&mut ctx, &self.state, &layout);
        draw_footer(&mut ctx, &layout, &footer);
        let runs = ctx.into_runs();

        let frame = self.scheduler.repaints();
        debug!(frame, template = %self.state.template, runs = runs.len(), "repainted poster");
        self.report = Some(RenderReport { frame, template: self.state.template, layout, runs });
    }

    // ---- export ----

    /// Settle, encode and report the export; rotates ads once it is logged
    pub fn export(&mut self, format: ExportFormat) -> PosterResult<ExportArtifact> {
        self.settle();
        let now = (self.clock)();
        let template = self.state.template;
        let bytes = match encode(&self.canvas, format, self.state.background) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, %format, "export failed");
                self.status = STATUS_EXPORT_FAILED.to_string();
                return Err(err);
            }
        };
        let artifact = ExportArtifact {
            template,
            format,
            file_name: export_file_name(template, format, now),
            bytes,
        };
        self.status = format!("Exported {} successfully.", format.as_str().to_ascii_uppercase());
        info!(file = %artifact.file_name, bytes = artifact.bytes.len(), "poster encoded");

        let event = ExportEvent {
            template,
            format,
            username: self.config.username.clone(),
            timestamp: now,
        };
        match self.export_log.record(&event) {
            Ok(()) => self.rotate_ads(),
            Err(err) => {
                warn!(error = %err, "export log failed");
                self.status = STATUS_LOG_FAILED.to_string();
            }
        }
        Ok(artifact)
    }

    fn rotate_ads(&mut self) {
        match self.ad_feed.advance() {
            Ok(pair) => {
                debug!(top = %pair.top, bottom = %pair.bottom, "ads rotated");
                self.set_ad_pair(&pair);
            }
            Err(err) => warn!(error = %err, "ad feed did not advance, keeping current ads"),
        }
    }
}
