//! `demo` command

use crate::cli::summary::PrimitiveSummary;
use crate::creation::MeshPrimitiveBuilder;
use crate::model::{MeshPrimitiveModel, POSITION};

/// Unit quad in the XY plane, counter-clockwise from the origin.
const QUAD_POSITIONS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
];
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Build the demo quad, with an optional morph target.
pub fn build_quad(morph: bool) -> crate::Result<MeshPrimitiveModel> {
    let mut builder = MeshPrimitiveBuilder::new();
    builder
        .set_int_indices_as_short(&QUAD_INDICES)
        .add_positions_3d(&QUAD_POSITIONS)
        .add_normals_3d(&[[0.0, 0.0, 1.0]; 4])
        .add_tex_coords0_2d(&QUAD_UVS);

    if morph {
        // top edge moves towards the viewer
        let deltas = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        builder.add_morph_target_f32(0, POSITION, &deltas)?;
    }

    Ok(builder.build())
}

pub fn execute(morph: bool) -> anyhow::Result<()> {
    let primitive = build_quad(morph)?;
    super::write_summary(&PrimitiveSummary::from(&primitive), None)
}
