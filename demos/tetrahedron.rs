//! Folds the classic four-triangle net into a regular tetrahedron.
//!
//! Usage:
//! ```text
//! cargo run --example tetrahedron
//! RUST_LOG=netfold=debug cargo run --example tetrahedron
//! ```

use std::f64::consts::PI;

use netfold::operations::query::{Explore, FacePoints};
use netfold::topology::TopologyStore;
use netfold::{PlanarNet, Result, Shape, ShapeKind, Viewer};

/// Prints every face of the shell as a list of corners.
struct TextViewer;

impl Viewer for TextViewer {
    fn show(&mut self, store: &TopologyStore, shape: Shape) -> Result<()> {
        for (index, face) in Explore::new(shape, ShapeKind::Face)
            .execute(store)?
            .into_iter()
            .enumerate()
        {
            let Shape::Face(face) = face else { continue };
            let corners: Vec<String> = FacePoints::new(face)
                .execute(store)?
                .iter()
                .map(|p| format!("({:.3}, {:.3}, {:.3})", p.x, p.y, p.z))
                .collect();
            println!("face {index}: {}", corners.join(" "));
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for netfold.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("netfold=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let angle = PI - (1.0_f64 / 3.0).acos();
    let mut net = PlanarNet::unit_triangle()?;
    for edge in 0..3 {
        net.replicate(0, edge, angle)?;
    }
    print!("{net}");

    let outcome = net.fold()?;
    if let Some(report) = outcome.report {
        println!(
            "closed: {}  outward: {}  V={} E={} F={}  V-E+F={}",
            report.is_closed_solid,
            report.is_outward,
            report.vertex_count,
            report.edge_count,
            report.face_count,
            report.euler_characteristic()
        );
    }
    net.display(&mut TextViewer)
}
