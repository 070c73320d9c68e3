//! Wire protocol integration tests.
//!
//! Checks record layouts end to end: sizes, schema strings, byte order and
//! nested-type resolution through the registry.

mod common;

use gati::core::{ChassisSpeeds, Pose2D, Rotation2D, Translation2D};
use gati::trajectory::{ChassisAccelerations, Sample};
use gati::wire::{
    PackBuffer, StructCodec, StructRegistry, UnpackBuffer, WireError, pack_slice, parse_schema,
    unpack_slice,
};

fn assert_round_trip<T: StructCodec + PartialEq + std::fmt::Debug>(value: T) {
    let bytes = value.to_bytes().unwrap();
    assert_eq!(bytes.len(), T::SIZE, "{} size", T::TYPE_NAME);
    assert_eq!(T::from_bytes(&bytes).unwrap(), value, "{} round trip", T::TYPE_NAME);
}

#[test]
fn test_every_record_round_trips() {
    assert_round_trip(Translation2D::new(1.5, -2.25));
    assert_round_trip(Rotation2D::new(0.8));
    assert_round_trip(Pose2D::new(3.0, 4.0, -1.2));
    assert_round_trip(ChassisSpeeds::new(0.5, 0.1, -0.3));
    assert_round_trip(ChassisAccelerations::new(1.0, 2.0, 3.0));
    assert_round_trip(common::busy_sample(2.5));
}

#[test]
fn test_record_layouts() {
    let expected: [(&str, usize, String); 6] = [
        ("Translation2d", 16, Translation2D::schema()),
        ("Rotation2d", 8, Rotation2D::schema()),
        ("Pose2d", 24, Pose2D::schema()),
        ("ChassisSpeeds", 24, ChassisSpeeds::schema()),
        ("ChassisAccelerations", 24, ChassisAccelerations::schema()),
        ("TrajectorySample", 80, Sample::schema()),
    ];

    let registry = StructRegistry::with_builtin().unwrap();
    assert_eq!(registry.len(), expected.len());

    for (name, size, schema) in expected {
        let descriptor = registry.get(name).unwrap();
        assert_eq!(descriptor.size, size, "{name}");
        assert_eq!(descriptor.schema, schema, "{name}");
        // Size additivity, recomputed down to primitives.
        assert_eq!(registry.resolved_size(name).unwrap(), size, "{name}");
    }

    assert_eq!(Pose2D::schema(), "Translation2d translation;Rotation2d rotation");
    assert_eq!(Translation2D::schema(), "double x;double y");
}

#[test]
fn test_sample_byte_layout() {
    let sample = common::busy_sample(0.5);
    let bytes = sample.to_bytes().unwrap();

    let expected: Vec<f64> = vec![
        sample.time,
        sample.pose.translation.x,
        sample.pose.translation.y,
        sample.pose.rotation.radians(),
        sample.speed.vx,
        sample.speed.vy,
        sample.speed.omega,
        sample.accel.ax,
        sample.accel.ay,
        sample.accel.alpha,
    ];
    let flat: Vec<u8> = expected.iter().flat_map(|v| v.to_be_bytes()).collect();
    assert_eq!(bytes, flat);
}

#[test]
fn test_every_schema_parses() {
    let registry = StructRegistry::with_builtin().unwrap();
    for name in registry.type_names() {
        let descriptor = registry.get(name).unwrap();
        let fields = parse_schema(&descriptor.schema).unwrap();
        assert_eq!(fields.len(), descriptor.fields.len(), "{name}");
    }
}

#[test]
fn test_foreign_schema_resolves_through_builtin() {
    let mut registry = StructRegistry::with_builtin().unwrap();
    registry
        .register_schema("Waypoint", "Pose2d pose;ChassisSpeeds speed;double dwell")
        .unwrap();

    assert_eq!(registry.resolved_size("Waypoint").unwrap(), 24 + 24 + 8);

    let err = registry
        .register_schema("Broken", "Pose3d pose")
        .unwrap_err();
    assert_eq!(err, WireError::UnknownType("Pose3d".to_string()));
}

#[test]
fn test_conflicting_registration() {
    let mut registry = StructRegistry::with_builtin().unwrap();
    let err = registry
        .register_schema("Pose2d", "double x;double y")
        .unwrap_err();
    assert!(matches!(err, WireError::SchemaConflict { .. }));

    // Same layout again is accepted.
    registry
        .register_schema("Translation2d", "double x;double y")
        .unwrap();
}

#[test]
fn test_stream_of_samples() {
    let samples: Vec<Sample> = (0..4).map(|i| common::busy_sample(i as f64)).collect();

    let mut bytes = vec![0u8; Sample::SIZE * samples.len()];
    let mut writer = PackBuffer::new(&mut bytes);
    pack_slice(&mut writer, &samples).unwrap();
    assert_eq!(writer.remaining(), 0);

    let mut reader = UnpackBuffer::new(&bytes);
    let decoded: Vec<Sample> = unpack_slice(&mut reader, samples.len()).unwrap();
    assert_eq!(decoded, samples);

    // One record too many fails before reading anything.
    let mut reader = UnpackBuffer::new(&bytes);
    let err = unpack_slice::<Sample>(&mut reader, samples.len() + 1).unwrap_err();
    assert!(matches!(err, WireError::BufferUnderflow { .. }));
    assert_eq!(reader.position(), 0);
}

#[test]
fn test_short_buffers_fail() {
    let sample = common::busy_sample(1.0);
    let mut bytes = [0u8; 79];
    let mut writer = PackBuffer::new(&mut bytes);
    assert_eq!(
        sample.pack(&mut writer).unwrap_err(),
        WireError::BufferUnderflow {
            needed: 80,
            remaining: 79
        }
    );
    assert_eq!(writer.position(), 0);
    assert!(bytes.iter().all(|&b| b == 0));

    assert!(matches!(
        Sample::from_bytes(&[0u8; 40]),
        Err(WireError::BufferUnderflow { .. })
    ));
}
