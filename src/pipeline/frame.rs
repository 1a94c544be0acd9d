use crate::config::PipelineConfig;
use crate::error::PointerResult;
use crate::gesture::{GestureBridge, SwipeDirection};
use crate::pipeline::source::SensorEvent;
use crate::pointer::PointerSink;
use crate::processing::{ClickGate, ClickLatch, CoordinateMapper, PointSmoother};
use crate::skeleton::{select_primary, JointType, SkeletonFrame};
use serde::Serialize;
use std::sync::mpsc::Receiver;

/// Why a frame produced no pointer output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The sensor delivered an empty (null) frame
    NoFrame,
    /// No candidate was fully tracked
    NoTrackedSkeleton,
    /// The primary skeleton lacked a hand joint
    MissingHandJoint,
}

/// What one frame did to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FrameOutcome {
    Skipped { reason: SkipReason },
    Processed { cursor: (i32, i32), clicked: bool },
}

/// Running counters for a pipeline session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub frames: u64,
    pub skipped: u64,
    pub cursor_moves: u64,
    pub gesture_clicks: u64,
    pub swipe_clicks: u64,
}

/// Per-frame orchestration: select, map, smooth, move, click
///
/// Owns all cross-frame state (click latch, smoothing windows) and the sink.
/// Frames must be fed sequentially from a single thread.
pub struct FramePipeline<S: PointerSink> {
    mapper: CoordinateMapper,
    smoother: Option<PointSmoother>,
    gate: ClickGate,
    click_threshold: f64,
    bridge: GestureBridge,
    stats: PipelineStats,
    sink: S,
}

impl<S: PointerSink> FramePipeline<S> {
    pub fn new(config: &PipelineConfig, sink: S) -> PointerResult<Self> {
        config.validate()?;

        let mapper = CoordinateMapper::new(config.surface, config.input_range)
            .with_inverted_y(config.invert_y);
        let smoother = config
            .smoothing
            .enabled
            .then(|| PointSmoother::new(config.smoothing.window_size, config.smoothing.decay));

        tracing::info!(
            "Frame pipeline ready (surface={}x{}, band={}..{}, threshold={}, smoothing={})",
            config.surface.width,
            config.surface.height,
            config.input_range.min,
            config.input_range.max,
            config.click_threshold,
            smoother.is_some()
        );

        Ok(Self {
            mapper,
            smoother,
            gate: ClickGate::new(),
            click_threshold: config.click_threshold,
            bridge: GestureBridge::new(),
            stats: PipelineStats::default(),
            sink,
        })
    }

    /// Handle one sensor tick
    pub fn process_frame(&mut self, frame: Option<&SkeletonFrame>) -> FrameOutcome {
        self.stats.frames += 1;

        let outcome = self.evaluate_frame(frame);
        if let FrameOutcome::Skipped { reason } = outcome {
            self.stats.skipped += 1;
            tracing::trace!("Frame skipped: {:?}", reason);
        }
        outcome
    }

    fn evaluate_frame(&mut self, frame: Option<&SkeletonFrame>) -> FrameOutcome {
        let Some(frame) = frame else {
            return FrameOutcome::Skipped {
                reason: SkipReason::NoFrame,
            };
        };

        let Some(primary) = select_primary(&frame.skeletons) else {
            return FrameOutcome::Skipped {
                reason: SkipReason::NoTrackedSkeleton,
            };
        };

        let (Some(right), Some(left)) = (
            primary.joint(JointType::HandRight),
            primary.joint(JointType::HandLeft),
        ) else {
            return FrameOutcome::Skipped {
                reason: SkipReason::MissingHandJoint,
            };
        };

        let mut cursor = self.mapper.map(right.position);
        let left_mapped = self.mapper.map(left.position);

        if let Some(smoother) = self.smoother.as_mut() {
            cursor = smoother.push(cursor);
        }

        let (x, y) = cursor.to_pixel();
        if let Err(e) = self.sink.set_cursor_position(x, y) {
            tracing::warn!("Cursor move to ({}, {}) dropped: {}", x, y, e);
        }
        self.stats.cursor_moves += 1;

        let clicked = self.gate.evaluate(left_mapped.x, self.click_threshold);
        if clicked {
            tracing::debug!(
                "Left hand reach at x={:.1} (frame {}), clicking",
                left_mapped.x,
                frame.frame_number
            );
            if let Err(e) = self.sink.click_primary_button() {
                tracing::warn!("Reach click dropped: {}", e);
            }
            self.stats.gesture_clicks += 1;
        }

        FrameOutcome::Processed {
            cursor: (x, y),
            clicked,
        }
    }

    /// Click in response to a recogniser swipe, independent of the latch
    pub fn handle_swipe(&mut self, direction: SwipeDirection) {
        self.bridge.on_swipe(direction, &mut self.sink);
        self.stats.swipe_clicks += 1;
    }

    /// Dispatch one event from the sensor delivery channel
    pub fn handle_event(&mut self, event: &SensorEvent) -> Option<FrameOutcome> {
        match event {
            SensorEvent::Frame(frame) => Some(self.process_frame(frame.as_ref())),
            SensorEvent::Swipe(direction) => {
                self.handle_swipe(*direction);
                None
            }
        }
    }

    /// Drain events until every sender has hung up
    pub fn run(&mut self, events: Receiver<SensorEvent>) -> PipelineStats {
        tracing::info!("Frame pipeline started");

        for event in events {
            self.handle_event(&event);
        }

        tracing::info!(
            "Frame pipeline stopped (frames={}, skipped={}, moves={}, clicks={}, swipes={})",
            self.stats.frames,
            self.stats.skipped,
            self.stats.cursor_moves,
            self.stats.gesture_clicks,
            self.stats.swipe_clicks
        );
        self.stats
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    pub fn latch(&self) -> ClickLatch {
        self.gate.latch()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::{PointerEvent, RecordingSink};
    use crate::skeleton::{SkeletonCandidate, TrackingState, Vector3};

    /// 1000x1000 surface: sensor value v maps to (v - 0.2) * 5000 pixels
    fn config() -> PipelineConfig {
        PipelineConfig::for_surface(1000, 1000)
    }

    fn body(z: f64, right: (f64, f64), left_x: f64) -> SkeletonCandidate {
        SkeletonCandidate::new(TrackingState::Tracked, Vector3::new(0.0, 0.0, z))
            .with_joint(JointType::HandRight, Vector3::new(right.0, right.1, z))
            .with_joint(JointType::HandLeft, Vector3::new(left_x, 0.3, z))
    }

    fn frame(skeletons: Vec<SkeletonCandidate>) -> SkeletonFrame {
        SkeletonFrame::new(0, 0.0, skeletons)
    }

    fn pipeline(config: &PipelineConfig) -> (FramePipeline<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::new();
        (FramePipeline::new(config, sink.clone()).unwrap(), sink)
    }

    #[test]
    fn test_reach_moves_cursor_and_clicks_once() {
        let (mut pipeline, sink) = pipeline(&config());

        // right hand -> (300, 200), left hand x -> 150
        let outcome = pipeline.process_frame(Some(&frame(vec![body(2.0, (0.26, 0.24), 0.23)])));

        assert_eq!(
            outcome,
            FrameOutcome::Processed {
                cursor: (300, 200),
                clicked: true
            }
        );
        assert_eq!(
            sink.events(),
            vec![PointerEvent::CursorMove { x: 300, y: 200 }, PointerEvent::Click]
        );
    }

    #[test]
    fn test_null_and_empty_frames_are_skipped() {
        let (mut pipeline, sink) = pipeline(&config());

        assert_eq!(
            pipeline.process_frame(None),
            FrameOutcome::Skipped {
                reason: SkipReason::NoFrame
            }
        );
        assert_eq!(
            pipeline.process_frame(Some(&frame(vec![]))),
            FrameOutcome::Skipped {
                reason: SkipReason::NoTrackedSkeleton
            }
        );

        let untracked = SkeletonCandidate::new(TrackingState::PositionOnly, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(
            pipeline.process_frame(Some(&frame(vec![untracked]))),
            FrameOutcome::Skipped {
                reason: SkipReason::NoTrackedSkeleton
            }
        );

        assert!(sink.events().is_empty());
        assert_eq!(pipeline.stats().frames, 3);
        assert_eq!(pipeline.stats().skipped, 3);
    }

    #[test]
    fn test_missing_hand_joint_is_skipped() {
        let (mut pipeline, sink) = pipeline(&config());
        let right_only = SkeletonCandidate::new(TrackingState::Tracked, Vector3::new(0.0, 0.0, 2.0))
            .with_joint(JointType::HandRight, Vector3::new(0.3, 0.3, 2.0));

        assert_eq!(
            pipeline.process_frame(Some(&frame(vec![right_only]))),
            FrameOutcome::Skipped {
                reason: SkipReason::MissingHandJoint
            }
        );
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_closest_body_drives_cursor() {
        let (mut pipeline, sink) = pipeline(&config());
        let far = body(3.0, (0.4, 0.4), 0.2);
        let near = body(1.5, (0.3, 0.3), 0.2);

        pipeline.process_frame(Some(&frame(vec![far, near])));

        assert_eq!(sink.moves(), vec![(500, 500)]);
        assert_eq!(sink.click_count(), 0);
    }

    #[test]
    fn test_held_reach_does_not_repeat() {
        let (mut pipeline, sink) = pipeline(&config());
        // left x mapped: 50, 150, 150, 150, 50, 150
        for left in [0.21, 0.23, 0.23, 0.23, 0.21, 0.23] {
            pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), left)])));
        }

        assert_eq!(sink.moves().len(), 6);
        assert_eq!(sink.click_count(), 2);
        assert_eq!(pipeline.stats().gesture_clicks, 2);
        assert_eq!(pipeline.latch(), ClickLatch::Armed);
    }

    #[test]
    fn test_custom_threshold() {
        let mut config = config();
        config.click_threshold = 400.0;
        let (mut pipeline, sink) = pipeline(&config);

        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.25)])));
        assert_eq!(sink.click_count(), 0);

        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.3)])));
        assert_eq!(sink.click_count(), 1);
    }

    #[test]
    fn test_swipe_clicks_while_latched() {
        let (mut pipeline, sink) = pipeline(&config());

        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.23)])));
        assert_eq!(pipeline.latch(), ClickLatch::Armed);

        pipeline.handle_swipe(SwipeDirection::Left);
        pipeline.handle_swipe(SwipeDirection::Right);

        assert_eq!(sink.click_count(), 3);
        assert_eq!(pipeline.latch(), ClickLatch::Armed);
        assert_eq!(pipeline.stats().swipe_clicks, 2);
    }

    #[test]
    fn test_swipe_does_not_arm_gate() {
        let (mut pipeline, sink) = pipeline(&config());

        pipeline.handle_swipe(SwipeDirection::Right);
        assert_eq!(pipeline.latch(), ClickLatch::Disarmed);

        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.23)])));
        assert_eq!(sink.click_count(), 2);
    }

    #[test]
    fn test_smoothing_disabled_uses_raw_coordinates() {
        let (mut pipeline, sink) = pipeline(&config());

        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.2)])));
        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.4, 0.4), 0.2)])));

        assert_eq!(sink.moves(), vec![(500, 500), (1000, 1000)]);
    }

    #[test]
    fn test_smoothing_enabled_damps_jumps() {
        let mut config = config();
        config.smoothing.enabled = true;
        let (mut pipeline, sink) = pipeline(&config);

        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.2)])));
        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.4, 0.4), 0.2)])));

        let moves = sink.moves();
        assert_eq!(moves[0], (500, 500));
        assert!(
            moves[1].0 > 500 && moves[1].0 < 1000,
            "smoothed x {} should lag behind the raw jump",
            moves[1].0
        );
    }

    #[test]
    fn test_smoothing_does_not_affect_click_input() {
        let mut config = config();
        config.smoothing.enabled = true;
        let (mut pipeline, sink) = pipeline(&config);

        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.2)])));
        pipeline.process_frame(Some(&frame(vec![body(2.0, (0.3, 0.3), 0.23)])));

        assert_eq!(sink.click_count(), 1);
    }

    #[test]
    fn test_oversized_smoothing_window_fails_construction() {
        let mut config = config();
        config.smoothing.enabled = true;
        config.smoothing.window_size = usize::MAX;
        assert!(FramePipeline::new(&config, RecordingSink::new()).is_err());
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let mut config = config();
        config.input_range.min = 0.5;
        assert!(FramePipeline::new(&config, RecordingSink::new()).is_err());
    }
}
