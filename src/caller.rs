//! Caller depth resolution for source attribution.
//!
//! Sinks accept an explicit stack-frame skip count so an emitted record
//! attributes to the application call site rather than to adapter
//! internals. The number of frames to skip depends on how the adapter was
//! invoked - directly, or through a generated proxy shim - so it is
//! resolved per call by a bounded heuristic. Resolution sits behind a small
//! trait seam, which lets tests substitute fixed depths or fake stacks
//! instead of walking the real one.

use std::backtrace::Backtrace;

/// File name reported for stack frames that code generators synthesize.
///
/// A frame whose recorded source file equals this marker is a proxy shim
/// between the application and the adapter; the heuristic skips past it
/// when locating the true caller.
pub const PROXY_FRAME_FILE: &str = "<generated>";

/// Most wrapper frames that can intervene in supported call patterns.
const MAX_WRAPPER_FRAMES: usize = 2;

/// Source of per-frame file names, indexed by depth above the inspection
/// point.
pub trait FrameSource: Send + Sync {
    /// Source file recorded `depth` frames above the caller of this method,
    /// or `None` when no frame is recorded at that depth.
    fn file_at(&self, depth: usize) -> Option<String>;
}

/// Computes how many stack frames a sink must skip so a record attributes
/// to the application call site.
pub trait CallerResolver: Send + Sync {
    /// Number of frames between the adapter's entry point and the true
    /// caller.
    fn frames_to_caller(&self) -> usize;
}

/// Resolver returning a constant depth.
///
/// Useful in tests, and on platforms where stack capture yields nothing.
#[derive(Debug, Clone, Copy)]
pub struct FixedDepth(pub usize);

impl CallerResolver for FixedDepth {
    fn frames_to_caller(&self) -> usize {
        self.0
    }
}

/// Bounded heuristic resolver.
///
/// Candidate depths 1 and 2 are probed in order; the first whose recorded
/// source file is not [`PROXY_FRAME_FILE`] wins, including the case where
/// no frame is recorded at all. The bound encodes the assumption that at
/// most one wrapper frame intervenes in supported call patterns; if every
/// candidate looks generated, the safe default of 1 is returned.
pub struct HeuristicResolver<S: FrameSource = BacktraceFrames> {
    frames: S,
}

impl HeuristicResolver<BacktraceFrames> {
    /// Resolver backed by real stack capture.
    pub fn new() -> Self {
        Self {
            frames: BacktraceFrames,
        }
    }
}

impl Default for HeuristicResolver<BacktraceFrames> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FrameSource> HeuristicResolver<S> {
    /// Resolver probing the given frame source; tests inject fakes here.
    pub fn with_frames(frames: S) -> Self {
        Self { frames }
    }
}

impl<S: FrameSource> CallerResolver for HeuristicResolver<S> {
    fn frames_to_caller(&self) -> usize {
        for depth in 1..=MAX_WRAPPER_FRAMES {
            // +1 accounts for this resolver's own frame.
            match self.frames.file_at(depth + 1) {
                Some(file) if file == PROXY_FRAME_FILE => continue,
                _ => return depth,
            }
        }
        1
    }
}

/// Frame source backed by `std::backtrace`.
///
/// Capture is forced so the source works without `RUST_BACKTRACE` being
/// set. Frames that carry no file information (stripped or foreign code)
/// are not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceFrames;

/// Frames the capture call itself contributes to a snapshot.
const CAPTURE_FRAMES: usize = 2;

impl FrameSource for BacktraceFrames {
    fn file_at(&self, depth: usize) -> Option<String> {
        let snapshot = format!("{:?}", Backtrace::force_capture());
        let file = frame_files(&snapshot).nth(CAPTURE_FRAMES + depth);
        file
    }
}

/// Extract the `file: "..."` fields from a captured snapshot, in frame
/// order.
fn frame_files(snapshot: &str) -> impl Iterator<Item = String> + '_ {
    snapshot
        .split("file: \"")
        .skip(1)
        .map(|rest| rest.chars().take_while(|&c| c != '"').collect())
}
