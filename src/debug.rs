/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that collects performance metrics
 * and wrap statistics for display in the UI:
 * - FPS, averaged over a half-second window
 * - Frame time and geometry emission time
 * - Near-plane wrap counts, including ticks where several stars wrapped at
 *   once (those frames draw in only approximately sorted order)
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub emit_time: Duration,
    pub wraps_last_tick: usize,
    pub multi_wrap_ticks: usize,
    frame_sum: f32,
    frame_count: u32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            emit_time: Duration::ZERO,
            wraps_last_tick: 0,
            multi_wrap_ticks: 0,
            frame_sum: 0.0,
            frame_count: 0,
        }
    }
}

impl DebugInfo {
    // Refresh the displayed FPS every 500 ms instead of every frame
    pub fn record_frame(&mut self, delta_time: f32) {
        self.frame_time = Duration::from_secs_f32(delta_time.max(0.0));
        self.frame_sum += delta_time;
        self.frame_count += 1;

        if self.frame_sum > 0.5 {
            let average_frame_time = self.frame_sum / self.frame_count as f32;
            if average_frame_time > 0.0 {
                self.fps = 1.0 / average_frame_time;
            }
            self.frame_sum = 0.0;
            self.frame_count = 0;
        }
    }

    pub fn note_wraps(&mut self, wraps: usize) {
        self.wraps_last_tick = wraps;
        if wraps > 1 {
            self.multi_wrap_ticks += 1;
        }
    }
}
