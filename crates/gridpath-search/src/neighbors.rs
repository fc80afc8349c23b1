use gridpath_core::Point;

/// Lattice adjacency used when wiring a [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Cardinal neighbours only.
    #[default]
    Four,
    /// Cardinal and diagonal neighbours.
    Eight,
}

const CARDINAL: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

// Clockwise from up-left.
const ALL: [Point; 8] = [
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
];

impl Connectivity {
    /// Neighbour offsets in the order they are attached to each node.
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Connectivity::Four => &CARDINAL,
            Connectivity::Eight => &ALL,
        }
    }

    /// In-bounds neighbours of `p`, in attachment order, keeping only those
    /// for which `keep` returns `true`.
    pub fn around(self, p: Point, keep: impl Fn(Point) -> bool) -> impl Iterator<Item = Point> {
        self.offsets()
            .iter()
            .map(move |&d| p + d)
            .filter(move |&n| keep(n))
    }
}
