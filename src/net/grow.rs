use std::f64::consts::PI;

use nalgebra::Complex;
use tracing::{debug, warn};

use crate::error::{NetError, Result};
use crate::math::polygon::newell_vector;
use crate::math::{Point3, Vector3};
use crate::operations::creation::{MakePolygon, MakeRegularPolygon};
use crate::operations::query::FacePoints;
use crate::operations::transform::{Mirror, Translate};
use crate::shape::Shape;
use crate::topology::TopologyStore;

use super::{sew_shell, FaceNode, FoldState, Hinge, NetOptions, PlanarNet};

impl PlanarNet {
    /// Seeds a net with a regular `sides`-gon of the given edge length,
    /// centred at the origin in the XY plane.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::InvalidSideCount`] for fewer than three sides, or
    /// a geometry error for a non-positive edge length.
    pub fn regular(sides: usize, edge_length: f64) -> Result<Self> {
        Self::from_points(MakeRegularPolygon::new(sides, edge_length).points()?)
    }

    /// Seeds a net with the unit equilateral triangle.
    ///
    /// # Errors
    ///
    /// See [`PlanarNet::regular`].
    pub fn unit_triangle() -> Result<Self> {
        Self::regular(3, 1.0)
    }

    /// Seeds a net with an explicit polygon. A closing point equal to the
    /// first one is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the points do not form a simple planar polygon.
    pub fn from_points(points: Vec<Point3>) -> Result<Self> {
        let options = NetOptions::default();
        let mut store = TopologyStore::new();
        let face = MakePolygon::new(points).execute(&mut store)?;
        let root = FaceNode::measure(&store, face)?;
        let sides = FacePoints::new(face).execute(&store)?.len();

        let (assembly, shell) = sew_shell(&options, &store, vec![face])?;

        debug!(sides, "seeded planar net");
        Ok(Self {
            store,
            nodes: vec![root],
            hinges: Vec::new(),
            state: FoldState::Unfolded,
            assembly,
            shell,
            options,
        })
    }

    /// Replaces the options and re-sews the shell with them.
    ///
    /// # Errors
    ///
    /// Returns an error if sewing fails under the new tolerance.
    pub fn with_options(mut self, options: NetOptions) -> Result<Self> {
        self.options = options;
        let (assembly, shell) = sew_shell(&self.options, &self.store, self.face_ids())?;
        self.assembly = assembly;
        self.shell = shell;
        Ok(self)
    }

    /// Attaches the mirror image of face `face` across its boundary edge
    /// `edge`, hinged on that edge with the given fold angle.
    ///
    /// The new face lies in its parent's plane with the same normal. Its
    /// edge 0 is the hinge, traversed the other way, and both hinge
    /// endpoints are the parent's own coordinates. Returns the new node
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::FaceIndexOutOfRange`] or
    /// [`NetError::EdgeIndexOutOfRange`] for bad indices; the net is left
    /// unchanged on any error.
    pub fn replicate(&mut self, face: usize, edge: usize, angle: f64) -> Result<usize> {
        let parent = self.face_id(face)?;
        let (a, b) = self.edge_points(face, edge)?;
        let points = self.face_points(face)?;
        let n = points.len();
        let normal = self.nodes[face].normal;

        let mirror = Mirror::new(Shape::Face(parent), a, (b - a).cross(&normal)).matrix()?;
        // child[k] = mirror(p[e + 1 - k]): reversed traversal keeps the normal.
        let child = (0..n)
            .map(|k| match (edge + 1 + n - k) % n {
                i if i == edge => a,
                i if i == (edge + 1) % n => b,
                i => mirror.transform_point(&points[i]),
            })
            .collect();

        self.attach(face, edge, angle, child)
    }

    /// Attaches a fresh regular polygon of `sides` sides along boundary edge
    /// `edge` of face `face`.
    ///
    /// The polygon is laid out in the parent's plane by walking from the
    /// hinge edge and turning by `sign * (sides - 2) * PI / sides` at each
    /// corner; `sign = 1` places it outside the parent. Its winding is
    /// chosen so its normal matches the parent's, with edge 0 on the hinge
    /// whenever that winding allows. Returns the new node index.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::InvalidSideCount`], [`NetError::InvalidWindingSign`]
    /// or an index error for bad arguments, and a construction error if the
    /// resulting polygon is rejected; the net is left unchanged on any error.
    pub fn expand(
        &mut self,
        face: usize,
        edge: usize,
        sides: usize,
        sign: i32,
        angle: f64,
    ) -> Result<usize> {
        if sides < 3 {
            return Err(NetError::InvalidSideCount { sides }.into());
        }
        if sign != 1 && sign != -1 {
            return Err(NetError::InvalidWindingSign { sign }.into());
        }
        let (a, b) = self.edge_points(face, edge)?;
        let normal = self.nodes[face].normal;

        let length = (b - a).norm();
        let u = (b - a) / length;
        let v = normal.cross(&u);
        let walk = regular_walk(length, sides, sign);

        let mut ring: Vec<Point3> = walk.iter().map(|z| a + u * z.re + v * z.im).collect();
        ring[0] = a;
        ring[1] = b;
        if newell_vector(&ring).dot(&normal) < 0.0 {
            ring[2..].reverse();
            ring.swap(0, 1);
        }

        self.attach(face, edge, angle, ring).inspect_err(|err| {
            warn!(face, edge, sides, sign, %err, "expanded face rejected");
        })
    }

    /// Moves every face of the net by `displacement`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be re-sewn; the net is left
    /// unchanged on any error.
    pub fn translate(&mut self, displacement: Vector3) -> Result<()> {
        let mut store = self.store.clone();
        for node in &self.nodes {
            Translate::new(Shape::Face(node.face), displacement).execute(&mut store)?;
        }
        let nodes = self
            .nodes
            .iter()
            .map(|node| FaceNode::measure(&store, node.face))
            .collect::<Result<Vec<_>>>()?;
        let (assembly, shell) = sew_shell(&self.options, &store, self.face_ids())?;

        self.store = store;
        self.nodes = nodes;
        self.assembly = assembly;
        self.shell = shell;
        Ok(())
    }

    /// A copy of the net moved by `displacement`.
    ///
    /// # Errors
    ///
    /// See [`PlanarNet::translate`].
    pub fn translated(&self, displacement: Vector3) -> Result<Self> {
        let mut net = self.clone();
        net.translate(displacement)?;
        Ok(net)
    }

    /// Builds the new face, re-sews, then commits node, hinge and shell.
    fn attach(&mut self, parent: usize, edge: usize, angle: f64, points: Vec<Point3>) -> Result<usize> {
        let mut store = self.store.clone();
        let face = MakePolygon::new(points).execute(&mut store)?;
        let node = FaceNode::measure(&store, face)?;
        let mut faces = self.face_ids();
        faces.push(face);
        let (assembly, shell) = sew_shell(&self.options, &store, faces)?;

        let index = self.nodes.len();
        self.store = store;
        self.nodes.push(node);
        self.hinges.push(Hinge {
            from: parent,
            to: index,
            edge,
            angle,
        });
        self.assembly = assembly;
        self.shell = shell;
        debug!(node = index, parent, edge, angle, "attached face");
        Ok(index)
    }
}

/// Corners of a regular polygon in the complex plane, starting with the
/// hinge `0 -> length` and turning by the interior angle at each corner.
#[allow(clippy::cast_precision_loss)]
fn regular_walk(length: f64, sides: usize, sign: i32) -> Vec<Complex<f64>> {
    let turn = f64::from(sign) * (sides - 2) as f64 * PI / sides as f64;
    let mut ring = vec![Complex::new(0.0, 0.0), Complex::new(length, 0.0)];
    while ring.len() < sides {
        let last = ring[ring.len() - 1];
        let back = ring[ring.len() - 2] - last;
        ring.push(last + Complex::from_polar(back.norm(), back.arg() + turn));
    }
    ring
}
