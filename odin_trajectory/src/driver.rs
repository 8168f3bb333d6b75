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

//! a tokio timer based frame scheduler and the async playback loop that drives a controller with it

use std::time::Duration;
use tokio::time::{interval,Instant,Interval,MissedTickBehavior};

use odin_common::debug;
use crate::clock::{FrameHandle,FrameScheduler};
use crate::controller::TrajectoryController;

/// frame scheduler that delivers at most one pending frame per interval tick.
/// Has to be created from within a tokio runtime
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Interval,
    start: Instant,
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl IntervalScheduler {
    pub fn new (frame_interval: Duration)->Self {
        let mut interval = interval( frame_interval);
        interval.set_missed_tick_behavior( MissedTickBehavior::Delay);

        IntervalScheduler { interval, start: Instant::now(), next_id: 0, pending: None }
    }

    pub fn from_millis (millis: u64)->Self {
        IntervalScheduler::new( Duration::from_millis( millis.max(1)))
    }

    pub fn has_pending (&self)->bool { self.pending.is_some() }

    /// wait for the next tick and return the pending frame together with the elapsed seconds since
    /// this scheduler was created. Returns `None` right away if there is no pending frame
    pub async fn next_frame (&mut self)->Option<(FrameHandle,f64)> {
        self.pending?;
        self.interval.tick().await;
        let handle = self.pending.take()?; // could have been canceled while we were waiting
        Some( (handle, self.start.elapsed().as_secs_f64()))
    }
}

impl FrameScheduler for IntervalScheduler {
    fn request_frame (&mut self)->FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame (&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) { self.pending = None }
    }
}

/// drive the controller until playback stops (end of dataset or pause from within `on_advance`).
/// `on_advance` is called after each frame that advanced the clock
pub async fn run_playback<F> (ctrl: &mut TrajectoryController<IntervalScheduler>, mut on_advance: F)
    where F: FnMut(&mut TrajectoryController<IntervalScheduler>)
{
    while let Some((handle, now)) = ctrl.scheduler_mut().next_frame().await {
        if ctrl.on_frame( handle, now) {
            on_advance( ctrl);
        }
        if !ctrl.is_playing() { break }
    }
    debug!("playback loop terminated at {}s", ctrl.playback_state().current_time);
}
