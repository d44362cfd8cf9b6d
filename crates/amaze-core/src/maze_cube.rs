//! End-to-end maze cube pipeline

use std::path::Path;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{ConfigError, MazeConfig};
use crate::inset::{InsetError, InsetReport, inset_faces};
use crate::labyrinth::{CubeLabyrinth, LabyrinthError, generate_cube_labyrinth};
use crate::mesh::{IndexedMesh, StlError, compute_tangents, remove_unused_vertices, save_stl};
use crate::primitive::generate_subdivided_cube;

/// A cube with a labyrinth carved into its surface
#[derive(Debug, Clone)]
pub struct MazeCube {
    config: MazeConfig,
    seed: u64,
    labyrinth: CubeLabyrinth,
    report: InsetReport,
    mesh: IndexedMesh,
}

impl MazeCube {
    /// Build a maze cube from a config
    ///
    /// Runs config validation, labyrinth generation, the inset pass, vertex
    /// compaction and tangent computation in that order.
    pub fn generate(config: &MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;

        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                tracing::info!("No seed configured, using {}", seed);
                seed
            }
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let mut mesh = generate_subdivided_cube(config.cube_size, config.segments);
        let labyrinth = generate_cube_labyrinth(config.segments, &mut rng, config.max_attempts)?;
        let report = inset_faces(&mut mesh, config.segments, config.cube_size, &labyrinth.faces)?;

        let removed = remove_unused_vertices(&mut mesh);
        compute_tangents(&mut mesh);

        tracing::info!(
            "Generated maze cube (segments {}, size {}, seed {}): {} cells, {} vertices, {} triangles",
            config.segments,
            config.cube_size,
            seed,
            labyrinth.cell_count(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        tracing::debug!("Removed {} unused vertices", removed);

        Ok(Self {
            config: config.clone(),
            seed,
            labyrinth,
            report,
            mesh,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Seed actually used, whether configured or drawn
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn labyrinth(&self) -> &CubeLabyrinth {
        &self.labyrinth
    }

    pub fn report(&self) -> &InsetReport {
        &self.report
    }

    pub fn mesh(&self) -> &IndexedMesh {
        &self.mesh
    }

    /// Export the mesh as binary STL
    pub fn save_stl(&self, path: impl AsRef<Path>) -> Result<(), MazeError> {
        save_stl(&self.mesh, path)?;
        Ok(())
    }
}

/// Pipeline errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum MazeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Labyrinth(#[from] LabyrinthError),
    #[error(transparent)]
    Inset(#[from] InsetError),
    #[error(transparent)]
    Stl(#[from] StlError),
}
