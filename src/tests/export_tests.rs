//! Export encoding, file naming and collaborator hand-off tests

use super::{fixed_clock, png_data_uri, test_config, test_session};
use crate::collaborators::{AdFeed, ExportEvent, ExportLog, RotatingAdFeed};
use crate::config::AdPair;
use crate::error::{PosterError, PosterResult};
use crate::export::{encode, export_file_name, ExportFormat};
use crate::session::STATUS_LOG_FAILED;
use crate::slots::SlotId;
use crate::text::BlockFace;
use crate::{Canvas, Color, PosterSession, TemplateId};
use std::cell::RefCell;
use std::rc::Rc;

/// Export log double recording every event, optionally failing
#[derive(Clone, Default)]
struct RecordingLog {
    events: Rc<RefCell<Vec<ExportEvent>>>,
    fail: bool,
}

impl ExportLog for RecordingLog {
    fn record(&mut self, event: &ExportEvent) -> PosterResult<()> {
        if self.fail {
            return Err(PosterError::Collaborator("log unavailable".into()));
        }
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

/// Ad feed double counting `advance` calls
#[derive(Clone)]
struct CountingFeed {
    next: AdPair,
    advances: Rc<RefCell<usize>>,
}

impl AdFeed for CountingFeed {
    fn current_pair(&self) -> PosterResult<AdPair> {
        Ok(AdPair::default())
    }

    fn advance(&mut self) -> PosterResult<AdPair> {
        *self.advances.borrow_mut() += 1;
        Ok(self.next.clone())
    }
}

fn session_with(log: RecordingLog, feed: CountingFeed) -> PosterSession {
    PosterSession::new(test_config(), Box::new(BlockFace))
        .with_clock(fixed_clock)
        .with_collaborators(Box::new(feed), Box::new(log))
}

fn counting_feed(next: AdPair) -> CountingFeed {
    CountingFeed { next, advances: Rc::new(RefCell::new(0)) }
}

#[test]
fn test_format_parsing() {
    assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
    assert_eq!("JPEG".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
    assert_eq!("jpg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
    assert!("gif".parse::<ExportFormat>().is_err());
    assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
}

#[test]
fn test_file_name_replaces_separators() {
    let name = export_file_name(TemplateId::TwoColumn, ExportFormat::Jpeg, fixed_clock());
    assert_eq!(name, "poster-two_column-2026-10-16T10-15-30-000Z.jpg");
}

#[test]
fn test_png_encoding_roundtrips_pixels() {
    let mut canvas = Canvas::new(4, 3);
    canvas.clear(Color::from_hex(0x336699));
    let bytes = encode(&canvas, ExportFormat::Png, Color::WHITE).unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (4, 3));
    assert_eq!(decoded.get_pixel(2, 1).0, [0x33, 0x66, 0x99, 0xff]);
}

#[test]
fn test_jpeg_flattens_transparency() {
    // A never-painted canvas is fully transparent
    let canvas = Canvas::new(16, 16);
    let bytes = encode(&canvas, ExportFormat::Jpeg, Color::WHITE).unwrap();
    assert_eq!(&bytes[..2], &[0xff, 0xd8]);
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
    let pixel = decoded.get_pixel(8, 8).0;
    assert!(pixel.iter().all(|c| *c > 245), "got {pixel:?}");
}

#[test]
fn test_export_png_reports_and_rotates_ads() {
    let log = RecordingLog::default();
    let feed = counting_feed(AdPair::new(png_data_uri(8, 2, [0, 0, 255, 255]), ""));
    let mut session = session_with(log.clone(), feed.clone());
    session.set_template(TemplateId::Magazine);

    let artifact = session.export(ExportFormat::Png).unwrap();
    assert_eq!(artifact.file_name, "poster-magazine-2026-10-16T10-15-30-000Z.png");
    assert_eq!(artifact.template, TemplateId::Magazine);
    assert_eq!(&artifact.bytes[..4], &[0x89, b'P', b'N', b'G']);
    assert_eq!(session.status(), "Exported PNG successfully.");

    let events = log.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, TemplateId::Magazine);
    assert_eq!(events[0].format, ExportFormat::Png);
    assert_eq!(events[0].username, "editor");
    assert_eq!(events[0].timestamp, fixed_clock());

    assert_eq!(*feed.advances.borrow(), 1);
    // New top ad queued; blank bottom reference keeps the current one
    assert!(session.slot(SlotId::TopAd).is_pending());
    assert!(session.slot(SlotId::BottomAd).handle().is_none());
    session.settle();
    assert!(session.slot(SlotId::TopAd).is_ready());
}

#[test]
fn test_export_jpeg_status() {
    let mut session = test_session();
    let artifact = session.export(ExportFormat::Jpeg).unwrap();
    assert!(artifact.file_name.ends_with(".jpg"));
    assert_eq!(&artifact.bytes[..2], &[0xff, 0xd8]);
    assert_eq!(session.status(), "Exported JPEG successfully.");
}

#[test]
fn test_log_failure_keeps_export_and_ads() {
    let log = RecordingLog { fail: true, ..RecordingLog::default() };
    let feed = counting_feed(AdPair::new("ads/next-top.png", "ads/next-bottom.png"));
    let mut session = session_with(log, feed.clone());

    let artifact = session.export(ExportFormat::Png).unwrap();
    assert!(!artifact.bytes.is_empty());
    assert_eq!(session.status(), STATUS_LOG_FAILED);
    assert_eq!(*feed.advances.borrow(), 0);
    assert_eq!(session.pending_decodes(), 0);
}

#[test]
fn test_export_settles_pending_work() {
    let mut session = test_session();
    session.load_image(SlotId::PrimaryPhoto, crate::assets::ImageSource::from_reference(&png_data_uri(16, 9, [9, 9, 9, 255])));
    session.export(ExportFormat::Png).unwrap();
    assert!(session.slot(SlotId::PrimaryPhoto).is_ready());
    assert!(!session.render_report().unwrap().contains_text("Upload primary photo"));
}

#[test]
fn test_rotating_feed_wraps() {
    let mut feed = RotatingAdFeed::new(vec![AdPair::new("a1", "b1"), AdPair::new("a2", "b2")]);
    assert_eq!(feed.current_pair().unwrap().top, "a1");
    assert_eq!(feed.advance().unwrap().top, "a2");
    assert_eq!(feed.advance().unwrap().top, "a1");
    assert_eq!(feed.index(), 0);
}

#[test]
fn test_empty_feed_is_collaborator_error() {
    let mut feed = RotatingAdFeed::default();
    assert!(matches!(feed.current_pair(), Err(PosterError::Collaborator(_))));
    assert!(feed.advance().is_err());
}
