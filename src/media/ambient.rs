// SPDX-License-Identifier: MPL-2.0
//! Ambient looping video playback.
//!
//! Each player spawns one blocking decode worker for a muted, decorative
//! clip. The worker publishes RGBA frames into a shared cell at the clip's
//! native pace and loops indefinitely; the UI polls the cell on its animation
//! tick. There is no command channel: ambient playback is never paused,
//! seeked, or stopped before the process exits.
//!
//! Any failure — missing file, unsupported codec, decode error mid-stream —
//! marks the player failed and stops the worker. The owning section keeps
//! its placeholder; nothing is surfaced to the user.

use crate::error::MediaError;
use crate::media::frame_cache::{CacheConfig, FrameCache};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba: Arc<Vec<u8>>,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Presentation timestamp in seconds, relative to the loop start.
    pub pts_secs: f64,
}

impl DecodedFrame {
    /// Returns the total size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.rgba.len()
    }
}

#[derive(Debug, Default)]
struct Shared {
    frame: Mutex<Option<DecodedFrame>>,
    seq: AtomicU64,
    ready: AtomicBool,
    failed: AtomicBool,
}

impl Shared {
    fn publish(&self, frame: DecodedFrame) {
        if let Ok(mut slot) = self.frame.lock() {
            *slot = Some(frame);
        }
        self.seq.fetch_add(1, Ordering::Release);
        self.ready.store(true, Ordering::Release);
    }
}

/// Handle to one ambient clip's decode worker and its latest frame.
#[derive(Debug, Clone)]
pub struct AmbientPlayer {
    shared: Arc<Shared>,
    path: PathBuf,
}

impl AmbientPlayer {
    /// Spawns the decode worker for a looping, muted ambient clip.
    ///
    /// Must be called from within a Tokio runtime (the Iced executor
    /// provides one).
    pub fn spawn(path: PathBuf, cache: CacheConfig) -> Self {
        let shared = Arc::new(Shared::default());
        let worker = Arc::clone(&shared);
        let worker_path = path.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(err) = decode_loop(&worker_path, &worker, cache) {
                tracing::warn!(
                    path = %worker_path.display(),
                    error = %err,
                    "ambient clip unavailable, keeping placeholder"
                );
                worker.failed.store(true, Ordering::Release);
            }
        });
        Self { shared, path }
    }

    /// Whether the first frame has been decoded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.shared.ready.load(Ordering::Acquire)
    }

    /// Whether the worker gave up. A failed player never becomes ready.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.shared.failed.load(Ordering::Acquire)
    }

    /// Monotonic counter bumped on every published frame.
    #[must_use]
    pub fn frame_seq(&self) -> u64 {
        self.shared.seq.load(Ordering::Acquire)
    }

    /// Latest published frame, if any.
    #[must_use]
    pub fn latest_frame(&self) -> Option<DecodedFrame> {
        self.shared.frame.lock().ok().and_then(|slot| slot.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decodes the clip at its native pace, forever.
///
/// The first full pass fills the frame cache; once sealed, subsequent loops
/// replay cached frames without touching the decoder.
fn decode_loop(
    path: &Path,
    shared: &Shared,
    cache_config: CacheConfig,
) -> Result<(), MediaError> {
    ffmpeg_next::init()?;

    let mut ictx = ffmpeg_next::format::input(&path)?;

    let (video_stream_index, time_base_f64, parameters) = {
        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(MediaError::NoVideoStream)?;
        let time_base = input.time_base();
        let time_base_f64 =
            f64::from(time_base.numerator()) / f64::from(time_base.denominator());
        (input.index(), time_base_f64, input.parameters())
    };

    let context = ffmpeg_next::codec::context::Context::from_parameters(parameters)?;
    let mut decoder = context.decoder().video()?;

    let width = decoder.width();
    let height = decoder.height();
    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )?;

    let mut cache = FrameCache::new(cache_config);
    let mut frame_count: u64 = 0;

    loop {
        if cache.is_complete() {
            replay_from_cache(shared, &mut cache, frame_count);
            // replay_from_cache only returns if the cache went unusable.
            continue;
        }

        let loop_start = Instant::now();
        let mut first_pts: Option<f64> = None;
        let mut decoded_any = false;
        frame_count = 0;

        for (stream, packet) in ictx.packets() {
            if stream.index() != video_stream_index {
                continue;
            }

            decoder.send_packet(&packet)?;

            let mut decoded_frame = ffmpeg_next::frame::Video::empty();
            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                let mut rgba_frame = ffmpeg_next::frame::Video::empty();
                scaler.run(&decoded_frame, &mut rgba_frame)?;

                let pts_secs = decoded_frame
                    .timestamp()
                    .map_or(0.0, |pts| pts as f64 * time_base_f64);
                let first = *first_pts.get_or_insert(pts_secs);

                pace(loop_start, pts_secs - first);

                let frame = DecodedFrame {
                    rgba: Arc::new(extract_rgba_data(&rgba_frame)),
                    width,
                    height,
                    pts_secs: pts_secs - first,
                };
                cache.put(frame_count, frame.clone());
                shared.publish(frame);
                frame_count += 1;
                decoded_any = true;
            }
        }

        // Drain the frames buffered inside the decoder.
        decoder.send_eof()?;
        let mut decoded_frame = ffmpeg_next::frame::Video::empty();
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            let mut rgba_frame = ffmpeg_next::frame::Video::empty();
            scaler.run(&decoded_frame, &mut rgba_frame)?;
            let pts_secs = decoded_frame
                .timestamp()
                .map_or(0.0, |pts| pts as f64 * time_base_f64)
                - first_pts.unwrap_or(0.0);
            pace(loop_start, pts_secs);
            let frame = DecodedFrame {
                rgba: Arc::new(extract_rgba_data(&rgba_frame)),
                width,
                height,
                pts_secs,
            };
            cache.put(frame_count, frame.clone());
            shared.publish(frame);
            frame_count += 1;
            decoded_any = true;
        }

        if !decoded_any {
            return Err(MediaError::NoVideoStream);
        }

        cache.seal();
        if cache.is_complete() {
            tracing::debug!(
                path = %path.display(),
                frames = frame_count,
                bytes = cache.current_bytes(),
                "ambient loop fully cached"
            );
        }

        ictx.seek(0, ..0)?;
        decoder.flush();
    }
}

/// Replays sealed cache contents forever. Returns only if a cached frame
/// goes missing, letting the caller fall back to the decoder.
fn replay_from_cache(shared: &Shared, cache: &mut FrameCache, frame_count: u64) {
    loop {
        let loop_start = Instant::now();
        for index in 0..frame_count {
            let Some(frame) = cache.get(index) else {
                return;
            };
            pace(loop_start, frame.pts_secs);
            shared.publish(frame);
        }
    }
}

/// Sleeps until `offset_secs` past `loop_start`.
fn pace(loop_start: Instant, offset_secs: f64) {
    if offset_secs <= 0.0 {
        return;
    }
    let target = loop_start + Duration::from_secs_f64(offset_secs);
    let now = Instant::now();
    if target > now {
        std::thread::sleep(target - now);
    }
}

/// Extracts RGBA data from a decoded frame, handling stride correctly.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width();
    let height = frame.height();
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = (y * stride as u32) as usize;
        let row_end = row_start + (width * 4) as usize;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}
