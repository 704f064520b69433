use meshprim::prelude::*;
use meshprim::utils::{bytes_to_u16, bytes_to_u32, f32_to_bytes};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

#[test]
fn test_index_widths() {
    let source = [0u32, 1, 2, 3, 2, 1];
    let mut builder = MeshPrimitiveBuilder::new();

    builder.set_int_indices(&source);
    let indices = builder.indices().unwrap();
    assert_eq!(indices.component_type(), ComponentType::UnsignedInt);
    assert_eq!(indices.byte_length(), source.len() * 4);
    assert_eq!(bytes_to_u32(indices.data()), source.to_vec());

    builder.set_int_indices_as_short(&source);
    let indices = builder.indices().unwrap();
    assert_eq!(indices.component_type(), ComponentType::UnsignedShort);
    assert_eq!(indices.byte_length(), source.len() * 2);

    builder.set_int_indices_as_byte(&source);
    let indices = builder.indices().unwrap();
    assert_eq!(indices.component_type(), ComponentType::UnsignedByte);
    assert_eq!(indices.byte_length(), source.len());
    assert_eq!(indices.data(), &[0, 1, 2, 3, 2, 1]);
}

#[test]
fn test_short_cast_is_modulo_2_16() {
    let mut builder = MeshPrimitiveBuilder::new();
    builder.set_int_indices_as_short(&[0, 1, 2, 65536]);
    let primitive = builder.build();
    let indices = primitive.indices.unwrap();
    assert_eq!(bytes_to_u16(indices.data()), vec![0, 1, 2, 0]);
}

#[test]
fn test_unsupported_index_type_keeps_state() {
    let mut builder = MeshPrimitiveBuilder::new();
    builder.set_int_indices(&[0, 1, 2]);

    let err = builder
        .set_indices_as(&[5, 6, 7, 8], ComponentType::Float)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedIndexComponentType { .. }));
    assert_eq!(
        err.to_string(),
        "the component type must be GL_UNSIGNED_BYTE, GL_UNSIGNED_SHORT or GL_UNSIGNED_INT, but is GL_FLOAT"
    );
    assert_eq!(bytes_to_u32(builder.indices().unwrap().data()), vec![0, 1, 2]);
}

#[test]
fn test_prebuilt_indices() {
    let accessor =
        AccessorModel::new(ComponentType::UnsignedShort, ElementType::Scalar, false, vec![1, 0, 2, 0])
            .unwrap();
    let mut builder = MeshPrimitiveBuilder::new();
    builder.set_indices(accessor.clone());
    assert_eq!(builder.build().indices, Some(accessor));
}

#[test]
fn test_attribute_last_write_wins() {
    let mut builder = MeshPrimitiveBuilder::new();
    builder
        .add_positions_3d(&TRIANGLE)
        .add_tex_coords0_2d(&[[0.0, 0.0]; 3])
        .add_positions_4d(&[[0.0; 4]; 3]);

    let primitive = builder.build();
    let names: Vec<&str> = primitive.attributes.keys().map(String::as_str).collect();
    assert_eq!(names, vec![POSITION, TEXCOORD_0]);
    assert_eq!(primitive.attribute(POSITION).unwrap().element_type(), ElementType::Vec4);
}

#[test]
fn test_generic_attribute_name() {
    let colors =
        AccessorModel::new(ComponentType::UnsignedByte, ElementType::Vec4, true, vec![255; 12])
            .unwrap();
    let mut builder = MeshPrimitiveBuilder::new();
    builder.add_attribute("COLOR_0", colors);
    let primitive = builder.build();
    let color = primitive.attribute("COLOR_0").unwrap();
    assert!(color.is_normalized());
    assert_eq!(color.count(), 3);
}

#[test]
fn test_morph_target_requires_base_attribute() {
    let mut builder = MeshPrimitiveBuilder::new();
    builder.add_positions_3d(&TRIANGLE);

    let err = builder
        .add_morph_target_bytes(0, NORMAL, f32_to_bytes(&[0.0; 9]))
        .unwrap_err();
    assert_eq!(err.to_string(), "the mesh primitive does not contain a NORMAL attribute");
    assert_eq!(builder.target_count(), 0);
}

#[test]
fn test_morph_target_mismatch_message() {
    let mut builder = MeshPrimitiveBuilder::new();
    builder.add_positions_3d(&TRIANGLE);
    let deltas =
        AccessorModel::new(ComponentType::Float, ElementType::Vec2, false, f32_to_bytes(&[0.0; 6]))
            .unwrap();

    let err = builder.add_morph_target(0, POSITION, deltas).unwrap_err();
    assert_eq!(
        err.to_string(),
        "attribute POSITION has element type VEC3, but the morphed attribute data has element type VEC2"
    );
}

#[test]
fn test_morph_target_gap_and_overwrite() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut builder = MeshPrimitiveBuilder::new()
        .with_diagnostics(move |d: &BuilderDiagnostic| sink.lock().unwrap().push(d.to_string()));
    builder.add_positions_3d(&TRIANGLE);

    builder.add_morph_target_f32(5, POSITION, &[0.0; 9]).unwrap();
    builder.add_morph_target_f32(5, POSITION, &[1.0; 9]).unwrap();
    assert_eq!(builder.target_count(), 6);

    let primitive = builder.build();
    assert_eq!(primitive.targets.len(), 6);
    assert!(primitive.targets[..5].iter().all(AttributeMap::is_empty));
    assert_eq!(
        primitive.target(5).unwrap()[POSITION].data(),
        f32_to_bytes(&[1.0; 9]).as_slice()
    );

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            "setting attribute in morph target 5, even though only 0 targets have been created until now"
                .to_string(),
            "overwriting existing POSITION in morph target 5".to_string(),
        ]
    );
}

#[test]
fn test_repeated_build() {
    let mut builder = MeshPrimitiveBuilder::new();
    builder
        .set_points()
        .set_int_indices(&[0, 1, 2])
        .add_positions_3d(&TRIANGLE);
    builder.add_morph_target_f32(0, POSITION, &[0.0; 9]).unwrap();

    let first = builder.build();
    assert_eq!(first.vertex_count(), Some(3));

    let second = builder.build();
    assert_eq!(
        second,
        MeshPrimitiveModel {
            mode: PrimitiveMode::Points,
            ..MeshPrimitiveModel::default()
        }
    );
}
