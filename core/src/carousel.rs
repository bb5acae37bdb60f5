/// Signed slot distance from `center` to `index` on a ring of `len` items.
///
/// The forward circular distance is folded so that items closer going
/// backward come out negative. For even `len` the item exactly opposite the
/// center keeps the positive sign (strict `>`), so it always renders on the
/// right. Results lie in `[-(len / 2), (len - 1) / 2]`.
pub fn circular_offset(index: usize, center: usize, len: usize) -> i32 {
    debug_assert!(len >= 1);
    debug_assert!(index < len && center < len);
    let len = len as i32;
    let mut d = (index as i32 - center as i32 + len) % len;
    if d > len / 2 {
        d -= len;
    }
    d
}

/// What a click on a carousel item should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselClick {
    /// The clicked item is already centered; open it full size.
    Zoom(usize),
    /// Bring the clicked item to the center.
    Recenter(usize),
}

/// Center-focused circular picker over a fixed item list.
///
/// Holds only the list length and the focused index; per-item offsets are
/// derived. Callers with an empty item list must not construct this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    center: usize,
}

impl CarouselState {
    pub fn new(len: usize, center: usize) -> Self {
        debug_assert!(len >= 1);
        Self {
            len,
            center: center.min(len - 1),
        }
    }

    pub fn item_count(&self) -> usize {
        self.len
    }

    pub fn center(&self) -> usize {
        self.center
    }

    pub fn offset_of(&self, index: usize) -> i32 {
        circular_offset(index, self.center, self.len)
    }

    /// Resolves a click on `index`. Recentering is a plain state set, so
    /// repeated clicks before an animation settles are last-click-wins.
    pub fn click(&mut self, index: usize) -> CarouselClick {
        debug_assert!(index < self.len);
        if index == self.center {
            CarouselClick::Zoom(index)
        } else {
            self.center = index;
            CarouselClick::Recenter(index)
        }
    }
}
