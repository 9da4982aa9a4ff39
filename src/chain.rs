//! Segment chain: the creature body, stored in an arena with O(1) growth at
//! either end and O(1) shrink at the tail.

use crate::error::MotionError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Layout of a freshly spawned chain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainConfig<F: Float> {
    /// Position of the tail; the body extends along +y from here.
    pub origin: Vec2<F>,
    pub segment_count: usize,
    /// Sum of all rest lengths; each segment gets `total_length / segment_count`.
    pub total_length: F,
    /// Rendering radius. Ignored by the solver.
    pub thickness: F,
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        ChainConfig {
            origin: Vec2::new(F::from_f32(250.0), F::from_f32(100.0)),
            segment_count: 50,
            total_length: F::from_f32(100.0),
            thickness: F::from_f32(10.0),
        }
    }
}

/// Handle to a segment slot. Handles of removed segments may be reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentId(usize);

impl SegmentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One link of the body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment<F: Float> {
    pub position: Vec2<F>,
    /// Maximum distance to the next segment toward the head.
    pub rest_length: F,
    next: Option<SegmentId>,
    live: bool,
}

impl<F: Float> Segment<F> {
    fn new(position: Vec2<F>, rest_length: F, next: Option<SegmentId>) -> Self {
        Segment { position, rest_length, next, live: true }
    }

    /// Neighbor one step closer to the head, `None` for the head itself.
    pub fn next(&self) -> Option<SegmentId> {
        self.next
    }

    pub fn is_head(&self) -> bool {
        self.next.is_none()
    }
}

/// Read-only view of a segment handed to renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentView<F: Float> {
    /// Distance from the head in segments (head = 0). Stable for color cycling.
    pub index: usize,
    pub position: Vec2<F>,
    pub rest_length: F,
    pub is_head: bool,
}

/// Ordered chain of segments, tail to head.
///
/// Invariants: at least one segment; the head has no `next`; following
/// `next` from the tail reaches the head in exactly `len() - 1` hops.
#[derive(Clone, Debug)]
pub struct SegmentChain<F: Float> {
    slots: Vec<Segment<F>>,
    free: Vec<usize>,
    head: SegmentId,
    tail: SegmentId,
    len: usize,
    thickness: F,
}

impl<F: Float> SegmentChain<F> {
    /// Lay `count` segments along +y starting at `origin` (the tail), each
    /// with rest length `total_length / count`.
    pub fn new(
        origin: Vec2<F>,
        count: usize,
        total_length: F,
        thickness: F,
    ) -> Result<Self, MotionError> {
        if count == 0 || !total_length.is_finite() || total_length <= F::zero() {
            return Err(MotionError::InvalidChain);
        }

        let n = F::from_f32(count as f32);
        let rest_length = total_length / n;

        let mut chain = Self::single(origin, rest_length, thickness);
        chain.slots.reserve(count - 1);
        for i in 1..count {
            let offset = total_length * F::from_f32(i as f32) / n;
            chain.append_at_head(origin + Vec2::new(F::zero(), offset), rest_length);
        }
        Ok(chain)
    }

    pub fn from_config(config: &ChainConfig<F>) -> Result<Self, MotionError> {
        Self::new(config.origin, config.segment_count, config.total_length, config.thickness)
    }

    /// A chain holding only a head.
    pub fn single(position: Vec2<F>, rest_length: F, thickness: F) -> Self {
        let mut slots = Vec::new();
        slots.push(Segment::new(position, rest_length, None));
        SegmentChain {
            slots,
            free: Vec::new(),
            head: SegmentId(0),
            tail: SegmentId(0),
            len: 1,
            thickness,
        }
    }

    fn alloc(&mut self, segment: Segment<F>) -> SegmentId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = segment;
                SegmentId(index)
            }
            None => {
                self.slots.push(segment);
                SegmentId(self.slots.len() - 1)
            }
        }
    }

    /// Insert a new head. The previous head now points at it.
    pub fn append_at_head(&mut self, position: Vec2<F>, rest_length: F) -> SegmentId {
        let id = self.alloc(Segment::new(position, rest_length, None));
        self.slots[self.head.0].next = Some(id);
        self.head = id;
        self.len += 1;
        id
    }

    /// Insert a new tail that trails the previous tail.
    pub fn append_at_tail(&mut self, position: Vec2<F>, rest_length: F) -> SegmentId {
        let id = self.alloc(Segment::new(position, rest_length, Some(self.tail)));
        self.tail = id;
        self.len += 1;
        id
    }

    /// Drop the tail segment and return it. Fails on a single-segment chain.
    pub fn remove_at_tail(&mut self) -> Result<Segment<F>, MotionError> {
        let old = self.tail;
        let next = match self.slots[old.0].next {
            Some(next) if self.len > 1 => next,
            _ => return Err(MotionError::ChainUnderflow { len: self.len }),
        };

        let slot = &mut self.slots[old.0];
        let removed = *slot;
        slot.live = false;
        slot.next = None;
        self.free.push(old.0);

        self.tail = next;
        self.len -= 1;
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a chain keeps at least one segment.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn thickness(&self) -> F {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: F) {
        self.thickness = thickness;
    }

    pub fn head_id(&self) -> SegmentId {
        self.head
    }

    pub fn tail_id(&self) -> SegmentId {
        self.tail
    }

    pub fn head(&self) -> &Segment<F> {
        &self.slots[self.head.0]
    }

    pub fn tail(&self) -> &Segment<F> {
        &self.slots[self.tail.0]
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment<F>> {
        self.slots.get(id.0).filter(|s| s.live)
    }

    pub fn get_mut(&mut self, id: SegmentId) -> Option<&mut Segment<F>> {
        self.slots.get_mut(id.0).filter(|s| s.live)
    }

    /// Handles are only produced by this chain, so indexing cannot miss.
    pub(crate) fn segment(&self, id: SegmentId) -> &Segment<F> {
        &self.slots[id.0]
    }

    pub(crate) fn segment_mut(&mut self, id: SegmentId) -> &mut Segment<F> {
        &mut self.slots[id.0]
    }

    /// Segments from tail to head.
    pub fn iter(&self) -> Iter<'_, F> {
        Iter { chain: self, cursor: Some(self.tail), remaining: self.len }
    }

    /// Renderer views from tail to head, indexed from the head.
    pub fn views(&self) -> impl Iterator<Item = SegmentView<F>> + '_ {
        let last = self.len - 1;
        self.iter().enumerate().map(move |(i, s)| SegmentView {
            index: last - i,
            position: s.position,
            rest_length: s.rest_length,
            is_head: s.is_head(),
        })
    }

    /// Copy of all positions, tail first.
    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.iter().map(|s| s.position).collect()
    }

    /// Move every segment by `offset`.
    pub fn translate(&mut self, offset: Vec2<F>) {
        let mut cursor = Some(self.tail);
        while let Some(id) = cursor {
            let segment = self.segment_mut(id);
            segment.position += offset;
            cursor = segment.next;
        }
    }
}

impl<'a, F: Float> IntoIterator for &'a SegmentChain<F> {
    type Item = &'a Segment<F>;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Iter<'a, F> {
        self.iter()
    }
}

/// Tail-to-head iterator over a [`SegmentChain`].
pub struct Iter<'a, F: Float> {
    chain: &'a SegmentChain<F>,
    cursor: Option<SegmentId>,
    remaining: usize,
}

impl<'a, F: Float> Iterator for Iter<'a, F> {
    type Item = &'a Segment<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let segment = self.chain.segment(self.cursor?);
        self.cursor = segment.next;
        self.remaining -= 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<F: Float> ExactSizeIterator for Iter<'_, F> {}
