use crate::rect::Rect;

/// Screen regions and what they stand for.
///
/// Regions pushed later are on top.
#[derive(Debug, Clone)]
pub struct HitMap<T> {
    regions: Vec<(Rect, T)>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<T> HitMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, target: T) {
        if !rect.is_empty() {
            self.regions.push((rect, target));
        }
    }

    pub fn extend(&mut self, other: HitMap<T>) {
        self.regions.extend(other.regions);
    }

    /// Topmost target containing the point.
    pub fn at(&self, x: u16, y: u16) -> Option<&T> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| target)
    }

    pub fn map<U>(self, f: impl Fn(T) -> U) -> HitMap<U> {
        HitMap {
            regions: self.regions.into_iter().map(|(r, t)| (r, f(t))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
