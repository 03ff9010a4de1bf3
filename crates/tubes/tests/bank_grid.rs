//! Integration tests for whole-instrument pixel generation

use approx::assert_relative_eq;
use nalgebra::Vector3;
use nxgeom_tubes::{
    bank_specs, generate_detector, local_bank_offsets, place_bank, InstrumentConstants,
    TubeGeometry,
};
use rstest::{fixture, rstest};

#[fixture]
fn reference() -> InstrumentConstants {
    InstrumentConstants::default()
}

#[rstest]
#[case(1, 1, 1, 1)] // case 1
#[case(1, 1, 3, 2)] // case 2
#[case(3, 2, 3, 2)] // case 3
#[case(9, 5, 3, 100)] // case 4
#[case(4, 7, 2, 33)] // case 5
fn pixel_count_and_ids(
    reference: InstrumentConstants,
    #[case] columns: usize,
    #[case] rows: usize,
    #[case] tubes: usize,
    #[case] pixels: usize,
) {
    let constants = InstrumentConstants {
        tube: TubeGeometry {
            tubes_per_bank: tubes,
            pixels_per_tube: pixels,
            ..reference.tube.clone()
        },
        columns,
        rows,
        radial_offsets: vec![1.0; columns],
        curvature: vec![0.01; rows],
        ..reference
    };

    let detector = generate_detector(&constants).unwrap();
    assert_eq!(detector.len(), columns * rows * tubes * pixels);

    // dense, 0-based, no duplicates or gaps
    for (i, pixel) in detector.pixels.iter().enumerate() {
        assert_eq!(pixel.id as usize, i);
    }
}

#[rstest]
fn concatenation_preserves_bank_order(reference: InstrumentConstants) {
    let detector = generate_detector(&reference).unwrap();
    let local = local_bank_offsets(&reference.tube);
    let per_bank = reference.tube.pixels_per_bank();

    for (b, spec) in bank_specs(&reference).iter().enumerate() {
        let expected = place_bank(&local, spec);
        let chunk = &detector.pixels[b * per_bank..(b + 1) * per_bank];
        for (pixel, position) in chunk.iter().zip(&expected) {
            assert_eq!(pixel.position, *position);
        }
    }
}

#[test]
fn single_bank_scenario() {
    let tube = TubeGeometry {
        tube_radius: 0.0127,
        pixel_length: 0.004,
        tubes_per_bank: 3,
        tube_gap: 0.002,
        pixels_per_tube: 2,
    };

    let constants = InstrumentConstants {
        tube: tube.clone(),
        columns: 1,
        rows: 1,
        min_angle: 0.0,
        max_angle: 0.0,
        nominal_radial_distance: 0.0,
        radial_offsets: vec![1.0],
        curvature: vec![0.0],
    };

    // two columns in x, three rows in y, flat in z before the correction
    let local = local_bank_offsets(&tube);
    let xs = local.iter().map(|p| p.x).collect::<Vec<f64>>();
    let ys = local.iter().map(|p| p.y).collect::<Vec<f64>>();
    assert_eq!(xs, vec![0.0, 0.004, 0.0, 0.004, 0.0, 0.004]);
    assert_relative_eq!(ys[2], 0.0254 + 0.002, epsilon = 1e-15);
    assert_relative_eq!(ys[4], 2.0 * (0.0254 + 0.002), epsilon = 1e-15);
    assert!(local.iter().all(|p| p.z == 0.0));

    // the only bank sits at rotation 0, position [0, 0, 1]
    let specs = bank_specs(&constants);
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].rotation, 0.0);
    assert_eq!(specs[0].position, Vector3::new(0.0, 0.0, 1.0));

    let detector = generate_detector(&constants).unwrap();
    assert_eq!(detector.len(), 6);
    assert_relative_eq!(
        detector.pixels[5].position,
        Vector3::new(0.004, 0.0, 1.0 + 2.0 * (0.0254 + 0.002)),
        epsilon = 1e-12
    );
}
