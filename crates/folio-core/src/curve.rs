use glam::Vec3;

/// A smooth path sampled by normalized progress.
pub trait CurvePath {
    /// Point at `t`, where 0 is the start and 1 the end.
    fn point_at(&self, t: f32) -> Vec3;
}

/// Uniform Catmull-Rom spline through its control points.
///
/// End segments use mirrored phantom points so the curve starts and ends
/// exactly on the first and last control points.
#[derive(Clone, Debug, PartialEq)]
pub struct CatmullRomPath {
    points: Vec<Vec3>,
}

impl CatmullRomPath {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    fn control(&self, i: isize) -> Vec3 {
        let n = self.points.len() as isize;
        if i < 0 {
            // reflect p1 through p0
            2.0 * self.points[0] - self.points[1.min(n as usize - 1)]
        } else if i >= n {
            let last = self.points[(n - 1) as usize];
            let prev = self.points[(n - 2).max(0) as usize];
            2.0 * last - prev
        } else {
            self.points[i as usize]
        }
    }
}

impl CurvePath for CatmullRomPath {
    fn point_at(&self, t: f32) -> Vec3 {
        match self.points.len() {
            0 => return Vec3::ZERO,
            1 => return self.points[0],
            _ => {}
        }
        let segments = (self.points.len() - 1) as f32;
        let scaled = t.clamp(0.0, 1.0) * segments;
        let seg = (scaled.floor() as isize).min(self.points.len() as isize - 2);
        let u = scaled - seg as f32;

        let p0 = self.control(seg - 1);
        let p1 = self.control(seg);
        let p2 = self.control(seg + 1);
        let p3 = self.control(seg + 2);

        let u2 = u * u;
        let u3 = u2 * u;
        0.5 * ((2.0 * p1)
            + (p2 - p0) * u
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
            + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u3)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(pub usize);

/// Curves referenced by flow particles.
#[derive(Default)]
pub struct PathSet {
    paths: Vec<Box<dyn CurvePath>>,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl CurvePath + 'static) -> PathId {
        self.paths.push(Box::new(path));
        PathId(self.paths.len() - 1)
    }

    pub fn get(&self, id: PathId) -> Option<&dyn CurvePath> {
        self.paths.get(id.0).map(|p| p.as_ref())
    }

    pub fn contains(&self, id: PathId) -> bool {
        id.0 < self.paths.len()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
