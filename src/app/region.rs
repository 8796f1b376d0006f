// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/region.rs
//
// The region model: question bands, the optional width band, and the
// operations the editor and sidebar perform on them.

use crate::constant::{FIRST_BAND_BOTTOM, FIRST_BAND_TOP, X_BAND_LEFT, X_BAND_RIGHT};

/// Stable identity for a question band, independent of position and list
/// order. Assigned from a monotonically increasing counter so selection
/// survives removals and export-time reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

/// Which part of a band a drag grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandHandle {
    /// The edge stored first (`top` / `left`).
    Start,
    /// The edge stored second (`bottom` / `right`).
    End,
    /// The band interior; both edges shift together.
    Move,
}

/// What a drag is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Y { id: RegionId, handle: BandHandle },
    X { handle: BandHandle },
}

/// A horizontal question band in image-row coordinates.
///
/// Endpoints are stored as grabbed: `top` may exceed `bottom` mid-drag.
/// `normalized` sorts them; nothing downstream reads the raw order.
#[derive(Debug, Clone, Copy)]
pub struct YRegion {
    id: RegionId,
    pub top: f32,
    pub bottom: f32,
}

impl YRegion {
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Sorted, rounded endpoints.
    pub fn normalized(&self) -> (i64, i64) {
        normalize(self.top, self.bottom)
    }

    /// Sorted endpoints clamped to `[0, height]`.
    pub fn clamped(&self, height: u32) -> (u32, u32) {
        clamp_interval(self.top, self.bottom, height)
    }
}

/// The single vertical width band in image-column coordinates.
#[derive(Debug, Clone, Copy)]
pub struct XRegion {
    pub left: f32,
    pub right: f32,
}

impl XRegion {
    pub fn normalized(&self) -> (i64, i64) {
        normalize(self.left, self.right)
    }

    pub fn clamped(&self, width: u32) -> (u32, u32) {
        clamp_interval(self.left, self.right, width)
    }
}

fn normalize(a: f32, b: f32) -> (i64, i64) {
    let a = a.round() as i64;
    let b = b.round() as i64;
    if a <= b { (a, b) } else { (b, a) }
}

fn clamp_interval(a: f32, b: f32, limit: u32) -> (u32, u32) {
    let (lo, hi) = normalize(a, b);
    let lo = lo.clamp(0, i64::from(limit)) as u32;
    let hi = hi.clamp(0, i64::from(limit)) as u32;
    (lo, hi)
}

/// Apply a drag delta to an interval, clamping live to `[0, limit]`.
///
/// Edge drags move one endpoint and may cross the other; interior drags
/// shift both endpoints, limited so the band stays inside the image.
pub fn drag_interval(handle: BandHandle, origin: (f32, f32), delta: f32, limit: f32) -> (f32, f32) {
    match handle {
        BandHandle::Start => ((origin.0 + delta).clamp(0.0, limit), origin.1),
        BandHandle::End => (origin.0, (origin.1 + delta).clamp(0.0, limit)),
        BandHandle::Move => {
            let lo = origin.0.min(origin.1);
            let hi = origin.0.max(origin.1);
            let shift = delta.clamp(-lo, limit - hi);
            (origin.0 + shift, origin.1 + shift)
        }
    }
}

/// The session's regions: question bands in creation order plus at most one
/// width band. Single source of truth for the editor overlay and the sidebar.
#[derive(Debug, Default)]
pub struct RegionSet {
    regions: Vec<YRegion>,
    x_region: Option<XRegion>,
    next_id: u64,
}

impl RegionSet {
    /// Add a question band with explicit endpoints.
    pub fn add(&mut self, top: f32, bottom: f32) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.push(YRegion { id, top, bottom });
        id
    }

    /// Add a question band directly below the most recently created one with
    /// the same height, pushed up if it would run past the bottom edge. The
    /// first band covers the center of the image.
    pub fn add_auto(&mut self, img_height: u32) -> RegionId {
        let h = img_height as f32;
        let (top, bottom) = match self.regions.last() {
            Some(last) => {
                let (y1, y2) = min_max(last.top, last.bottom);
                let span = y2 - y1;
                let top = y2.min(h - span);
                (top, top + span)
            }
            None => (h * FIRST_BAND_TOP, h * FIRST_BAND_BOTTOM),
        };
        self.add(top, bottom)
    }

    /// Remove by identity; no-op if the id is gone already.
    pub fn remove(&mut self, id: RegionId) {
        self.regions.retain(|r| r.id != id);
    }

    /// Remove every question band. The width band is untouched.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Create the default width band, or remove the existing one.
    /// Returns whether a width band exists afterwards.
    pub fn toggle_x(&mut self, img_width: u32) -> bool {
        match self.x_region {
            Some(_) => {
                self.x_region = None;
                false
            }
            None => {
                let w = img_width as f32;
                self.x_region = Some(XRegion {
                    left: w * X_BAND_LEFT,
                    right: w * X_BAND_RIGHT,
                });
                true
            }
        }
    }

    /// Drop everything, as when a new image replaces the session.
    pub fn reset(&mut self) {
        self.regions.clear();
        self.x_region = None;
        self.next_id = 0;
    }

    pub fn get(&self, id: RegionId) -> Option<&YRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut YRegion> {
        self.regions.iter_mut().find(|r| r.id == id)
    }

    pub fn x_region(&self) -> Option<&XRegion> {
        self.x_region.as_ref()
    }

    pub fn x_region_mut(&mut self) -> Option<&mut XRegion> {
        self.x_region.as_mut()
    }

    /// Question bands in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &YRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Sidebar labels, one per band in creation order, recomputed from the
    /// current (normalized) bounds.
    pub fn labels(&self) -> Vec<String> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let (top, bottom) = r.normalized();
                format!("{}: {top}-{bottom}px", i + 1)
            })
            .collect()
    }
}

fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_auto_band_covers_center() {
        let mut set = RegionSet::default();
        let id = set.add_auto(1000);
        let region = set.get(id).unwrap();
        assert_eq!(region.normalized(), (250, 750));
    }

    #[test]
    fn auto_band_stacks_below_previous_with_same_height() {
        let mut set = RegionSet::default();
        set.add(100.0, 300.0);
        let id = set.add_auto(1000);
        assert_eq!(set.get(id).unwrap().normalized(), (300, 500));
    }

    #[test]
    fn auto_band_is_pushed_up_at_the_bottom_edge() {
        let mut set = RegionSet::default();
        set.add(600.0, 900.0);
        let id = set.add_auto(1000);
        assert_eq!(set.get(id).unwrap().normalized(), (700, 1000));
    }

    #[test]
    fn auto_band_follows_the_most_recently_created_band() {
        let mut set = RegionSet::default();
        set.add(500.0, 600.0);
        set.add(50.0, 150.0);
        let id = set.add_auto(1000);
        assert_eq!(set.get(id).unwrap().normalized(), (150, 250));
    }

    #[test]
    fn labels_follow_creation_order_and_normalize_bounds() {
        let mut set = RegionSet::default();
        set.add(300.0, 100.0);
        set.add(200.4, 450.6);
        assert_eq!(set.labels(), vec!["1: 100-300px", "2: 200-451px"]);
    }

    #[test]
    fn labels_track_edits_in_place() {
        let mut set = RegionSet::default();
        let id = set.add(100.0, 200.0);
        set.get_mut(id).unwrap().bottom = 420.0;
        assert_eq!(set.labels(), vec!["1: 100-420px"]);
    }

    #[test]
    fn remove_keeps_other_bands_untouched() {
        let mut set = RegionSet::default();
        let a = set.add(10.0, 20.0);
        let b = set.add(30.0, 40.0);
        let c = set.add(50.0, 60.0);
        set.remove(b);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(a).unwrap().normalized(), (10, 20));
        assert_eq!(set.get(c).unwrap().normalized(), (50, 60));
        assert!(set.get(b).is_none());

        // Removing an already-gone id is a no-op.
        set.remove(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn identities_are_not_reused_after_removal() {
        let mut set = RegionSet::default();
        let a = set.add(0.0, 10.0);
        set.remove(a);
        let b = set.add(0.0, 10.0);
        assert_ne!(a, b);
    }

    #[test]
    fn toggle_x_creates_default_band_then_removes_it() {
        let mut set = RegionSet::default();
        assert!(set.toggle_x(800));
        let x = set.x_region().unwrap();
        assert_eq!(x.normalized(), (80, 720));
        assert!(!set.toggle_x(800));
        assert!(set.x_region().is_none());
    }

    #[test]
    fn clamped_handles_out_of_range_and_crossed_endpoints() {
        let region = YRegion {
            id: RegionId(0),
            top: 200.0,
            bottom: -50.0,
        };
        assert_eq!(region.clamped(1000), (0, 200));

        let region = YRegion {
            id: RegionId(0),
            top: 900.0,
            bottom: 1200.0,
        };
        assert_eq!(region.clamped(1000), (900, 1000));
    }

    #[test]
    fn drag_edges_clamp_live_and_may_cross() {
        // Edge dragged past the image top stops at 0.
        assert_eq!(
            drag_interval(BandHandle::Start, (100.0, 300.0), -250.0, 1000.0),
            (0.0, 300.0)
        );
        // Edge dragged past the other endpoint crosses it.
        assert_eq!(
            drag_interval(BandHandle::End, (100.0, 300.0), -280.0, 1000.0),
            (100.0, 20.0)
        );
    }

    #[test]
    fn drag_move_shifts_both_edges_within_bounds() {
        assert_eq!(
            drag_interval(BandHandle::Move, (100.0, 300.0), 50.0, 1000.0),
            (150.0, 350.0)
        );
        // Shift is limited so the band stays inside the image.
        assert_eq!(
            drag_interval(BandHandle::Move, (100.0, 300.0), 900.0, 1000.0),
            (800.0, 1000.0)
        );
        assert_eq!(
            drag_interval(BandHandle::Move, (100.0, 300.0), -900.0, 1000.0),
            (0.0, 200.0)
        );
    }

    #[test]
    fn reset_drops_bands_width_band_and_counter() {
        let mut set = RegionSet::default();
        set.add(10.0, 20.0);
        set.toggle_x(800);
        set.reset();
        assert!(set.is_empty());
        assert!(set.x_region().is_none());
    }
}
