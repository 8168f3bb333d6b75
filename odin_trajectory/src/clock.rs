/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the playback clock - a small state machine that advances a virtual time cursor over a dataset.
//!
//! The clock does not own a timer. Advancement is driven by a caller supplied [`FrameScheduler`] that
//! hands out a [`FrameHandle`] for each requested frame and later delivers the frame through
//! [`PlaybackClock::on_frame`]. The clock keeps at most one pending handle: starting playback while playing
//! does not create a second tick chain, and frames with a handle other than the pending one (late frames of a
//! canceled chain) are ignored, so they cannot resurrect a stopped clock.

use std::collections::VecDeque;
use serde::{Serialize,Deserialize};

use odin_common::{clamp_or_min, debug};
use crate::errors::{OdinTrajectoryError,Result,validation_error};

/// opaque id of a requested frame
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub struct FrameHandle(pub u64);

/// per-frame scheduling primitive supplied by the host (e.g. a display refresh callback or a timer)
pub trait FrameScheduler {
    /// request a single future frame
    fn request_frame (&mut self)->FrameHandle;

    /// cancel a previously requested frame. Canceling an already delivered frame is a no-op
    fn cancel_frame (&mut self, handle: FrameHandle);
}

/// observable playback state
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct PlaybackState {
    pub playing: bool,
    pub speed: f64,
    pub current_time: f64,
}

#[derive(Debug)]
pub struct PlaybackClock {
    state: PlaybackState,
    duration: f64,
    pending: Option<FrameHandle>,
    last_frame_secs: Option<f64>, // wall clock of previous frame within the current tick chain
}

impl PlaybackClock {
    pub fn new (duration: f64, speed: f64)->Self {
        PlaybackClock {
            state: PlaybackState { playing: false, speed: if is_valid_speed(speed) { speed } else { 1.0 }, current_time: 0.0 },
            duration: duration.max(0.0),
            pending: None,
            last_frame_secs: None,
        }
    }

    pub fn state (&self)->PlaybackState { self.state }
    pub fn is_playing (&self)->bool { self.state.playing }
    pub fn current_time (&self)->f64 { self.state.current_time }
    pub fn speed (&self)->f64 { self.state.speed }
    pub fn duration (&self)->f64 { self.duration }
    pub fn pending_frame (&self)->Option<FrameHandle> { self.pending }

    /// Stopped -> Playing. No-op if already playing
    pub fn play (&mut self, scheduler: &mut impl FrameScheduler) {
        if self.state.playing { return }

        self.state.playing = true;
        self.last_frame_secs = None;
        self.restart_chain( scheduler);
        debug!("playback started at {}s", self.state.current_time);
    }

    /// Playing -> Stopped, preserving the current time. No-op if already stopped
    pub fn pause (&mut self, scheduler: &mut impl FrameScheduler) {
        if !self.state.playing { return }

        self.state.playing = false;
        self.stop_chain( scheduler);
        debug!("playback paused at {}s", self.state.current_time);
    }

    /// move the time cursor, silently clamping to [0,duration]. Does not change play/pause state
    pub fn scrub (&mut self, t: f64) {
        self.state.current_time = clamp_or_min( t, 0.0, self.duration);
    }

    /// set the multiplier for subsequent advances. Needs to be a positive, finite number
    pub fn set_speed (&mut self, speed: f64)->Result<()> {
        if !is_valid_speed(speed) {
            return Err( validation_error!( None, "playback speed has to be positive: {}", speed))
        }
        self.state.speed = speed;
        Ok(())
    }

    /// switch to a new duration (i.e. a different dataset). This stops playback and resets the time to 0
    /// since the old time could exceed the new duration
    pub fn reset (&mut self, duration: f64, scheduler: &mut impl FrameScheduler) {
        self.state.playing = false;
        self.stop_chain( scheduler);
        self.duration = duration.max(0.0);
        self.state.current_time = 0.0;
    }

    /// process a delivered frame at wall clock time `now_secs`. Returns true if this frame advanced the clock.
    /// The first frame of a chain only establishes the wall clock reference
    pub fn on_frame (&mut self, handle: FrameHandle, now_secs: f64, scheduler: &mut impl FrameScheduler)->bool {
        if !self.state.playing || self.pending != Some(handle) { return false } // stale frame
        self.pending = None;

        let delta = (now_secs - self.last_frame_secs.unwrap_or(now_secs)).max(0.0);
        self.last_frame_secs = Some(now_secs);

        let next_time = self.state.current_time + delta * self.state.speed;

        if self.duration > 0.0 && next_time >= self.duration {
            self.state.current_time = self.duration;
            self.state.playing = false;
            self.last_frame_secs = None;
            debug!("playback reached end at {}s", self.duration);
        } else {
            // without duration there is nothing to advance over - keep the chain alive but the time at 0
            self.state.current_time = if self.duration > 0.0 { next_time } else { 0.0 };
            self.pending = Some( scheduler.request_frame());
        }
        true
    }

    fn restart_chain (&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(h) = self.pending.take() { scheduler.cancel_frame(h) }
        self.pending = Some( scheduler.request_frame());
    }

    fn stop_chain (&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(h) = self.pending.take() { scheduler.cancel_frame(h) }
        self.last_frame_secs = None;
    }
}

#[inline]
fn is_valid_speed (speed: f64)->bool {
    speed.is_finite() && speed > 0.0
}

/* #region ManualScheduler ***************************************************************************/

/// a deterministic scheduler that just records requests. Hosts (and tests) pop pending frames and
/// deliver them with their own notion of wall clock time
#[derive(Debug,Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: VecDeque<FrameHandle>,
}

impl ManualScheduler {
    pub fn new ()->Self { ManualScheduler::default() }

    /// the oldest outstanding frame request
    pub fn next_frame (&mut self)->Option<FrameHandle> { self.pending.pop_front() }

    pub fn pending_count (&self)->usize { self.pending.len() }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame (&mut self)->FrameHandle {
        self.next_id += 1;
        let h = FrameHandle(self.next_id);
        self.pending.push_back(h);
        h
    }

    fn cancel_frame (&mut self, handle: FrameHandle) {
        self.pending.retain( |h| *h != handle);
    }
}

/* #endregion ManualScheduler */
