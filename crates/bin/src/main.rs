//! Quadtree demo: fills a tree with random points and reports how the
//! approximate queries behave.

use std::time::Instant;

use glam::Vec2;
use quadtree::{Positioned, QuadTree, Rectangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Config, DemoConfig};

mod config;

const DEFAULT_CONFIG_PATH: &str = "quadtree.toml";

/// A stored point with an identity.
#[derive(Debug, Clone, Copy)]
struct Marker {
    id: usize,
    position: Vec2,
}

impl Positioned for Marker {
    fn position(&self) -> Vec2 {
        self.position
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Quadtree demo v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&path)?;
    info!("Loaded configuration from {path}");
    info!("  Area: {}x{}", config.tree.width, config.tree.height);
    info!("  Capacity: {}", config.tree.capacity);
    info!("  Max depth: {:?}", config.tree.max_depth);

    let mut rng = match config.demo.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut tree = QuadTree::with_config(config.tree.clone())?;
    populate(&mut tree, &config.demo, &mut rng);
    run_queries(&tree, &config.demo, &mut rng);

    Ok(())
}

fn populate(tree: &mut QuadTree<Marker>, demo: &DemoConfig, rng: &mut StdRng) {
    let (width, height) = (tree.width(), tree.height());
    let start = Instant::now();
    for id in 0..demo.points {
        tree.insert(Marker {
            id,
            position: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
        });
    }

    info!(
        "Inserted {} points in {:?} ({} nodes, {} leaves, depth {})",
        tree.len(),
        start.elapsed(),
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );
}

fn run_queries(tree: &QuadTree<Marker>, demo: &DemoConfig, rng: &mut StdRng) {
    if demo.queries == 0 {
        return;
    }

    let (width, height) = (tree.width(), tree.height());
    let mut reported = 0usize;
    let mut inside = 0usize;
    let mut cell_total = 0usize;
    let start = Instant::now();

    for _ in 0..demo.queries {
        let center = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
        let rect = Rectangle::from_center(center, demo.query_size);

        let neighbourhood = tree.get_neighbourhood(&rect);
        let exact = neighbourhood
            .iter()
            .filter(|marker| rect.contains(marker.position))
            .count();
        let cell = tree.get_objects_in_cell(&center);
        debug!(
            x = center.x,
            y = center.y,
            reported = neighbourhood.len(),
            inside = exact,
            cell = cell.len(),
            first = ?cell.first().map(|marker| marker.id),
            "query"
        );

        reported += neighbourhood.len();
        inside += exact;
        cell_total += cell.len();
    }

    let precision = if reported == 0 {
        1.0
    } else {
        inside as f64 / reported as f64
    };
    info!(
        "Ran {} queries in {:?}: avg {:.1} reported, {:.1} inside, precision {:.2}, avg cell {:.1}",
        demo.queries,
        start.elapsed(),
        reported as f64 / demo.queries as f64,
        inside as f64 / demo.queries as f64,
        precision,
        cell_total as f64 / demo.queries as f64
    );
}
