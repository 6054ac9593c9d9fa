//! Per-entity keyframe buffer with temporal bracketing and render delay.

use motion_domain::Keyframe;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;
use uuid::Uuid;

use crate::interpolate::interpolate_keyframe;

/// Default playback lag behind the live clock, milliseconds.
pub const DEFAULT_RENDER_DELAY_MS: i64 = 1000;

/// Default bound on buffered keyframes per entity.
pub const DEFAULT_CAPACITY: usize = 60;

/// Buffer construction errors.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("render delay must be non-negative, got {0} ms")]
    NegativeRenderDelay(i64),

    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,
}

/// Ordered keyframe collection for one entity plus its last interpolated pose.
///
/// The buffer renders behind the live clock by a fixed delay so that a
/// bracketing pair of samples is very likely available at the render time,
/// trading a visible lag for jitter-free motion. One writer per buffer;
/// hosts with concurrent producers must serialize pushes externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpolationBuffer {
    entity_id: Uuid,
    keyframes: Vec<Keyframe>,
    current: Option<Keyframe>,
    render_delay_ms: i64,
    capacity: usize,
}

impl InterpolationBuffer {
    /// Create an empty buffer with the default render delay and capacity.
    #[must_use]
    pub fn new(entity_id: Uuid) -> Self {
        Self {
            entity_id,
            keyframes: Vec::new(),
            current: None,
            render_delay_ms: DEFAULT_RENDER_DELAY_MS,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create an empty buffer with explicit render delay and capacity.
    pub fn with_config(
        entity_id: Uuid,
        render_delay_ms: i64,
        capacity: usize,
    ) -> Result<Self, BufferError> {
        if render_delay_ms < 0 {
            return Err(BufferError::NegativeRenderDelay(render_delay_ms));
        }
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        Ok(Self {
            entity_id,
            keyframes: Vec::new(),
            current: None,
            render_delay_ms,
            capacity,
        })
    }

    /// Insert a keyframe, keeping the buffer sorted ascending by timestamp
    /// and bounded to its capacity. Samples may arrive in any order; the
    /// oldest entries beyond the bound are evicted, never the newest.
    pub fn push(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
        // stable sort keeps insertion order among duplicate timestamps
        self.keyframes.sort_by_key(|k| k.timestamp_ms);

        if self.keyframes.len() > self.capacity {
            let evicted = self.keyframes.len() - self.capacity;
            self.keyframes.drain(0..evicted);
            trace!(
                entity_id = %self.entity_id,
                evicted,
                "evicted oldest keyframes past capacity"
            );
        }
    }

    /// Recompute the interpolated pose for the clock value `now_ms`.
    ///
    /// The render time is `now_ms` minus the buffer's render delay. The pose
    /// is blended between the bracketing pair of keyframes around that
    /// instant; outside the buffered time range the pose clamps to the
    /// nearest sample, it is never extrapolated. Returns the new `current`
    /// pose, or `None` while the buffer holds no data.
    pub fn evaluate(&mut self, now_ms: i64) -> Option<&Keyframe> {
        let render_time = now_ms - self.render_delay_ms;

        self.current = match self.keyframes.len() {
            0 => None,
            1 => Some(self.keyframes[0]),
            len => {
                // last keyframe at or before the render time; defaults to the
                // oldest sample when the render time precedes the whole buffer
                let at_or_before = self
                    .keyframes
                    .partition_point(|k| k.timestamp_ms <= render_time);
                let prev = at_or_before.saturating_sub(1);
                let next = (prev + 1).min(len - 1);

                if prev == next {
                    Some(self.keyframes[prev])
                } else {
                    Some(interpolate_keyframe(
                        &self.keyframes[prev],
                        &self.keyframes[next],
                        render_time,
                    ))
                }
            }
        };

        self.current.as_ref()
    }

    /// Last interpolated pose, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Keyframe> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn entity_id(&self) -> Uuid {
        self.entity_id
    }

    #[must_use]
    pub fn render_delay_ms(&self) -> i64 {
        self.render_delay_ms
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Buffered keyframes, ascending by timestamp.
    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}
