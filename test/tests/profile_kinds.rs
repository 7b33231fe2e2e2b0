/// Integration tests covering every profile kind through one listener

use tuio_client::{
    Blob25D, Blob2D, Blob3D, Cursor25D, Cursor2D, Cursor3D, ListenerProfile, Object25D,
    Object2D, Object3D, Profile, ProfileKind, Vec2, Vec3,
};
use tuio_shared::{OscMessage, OscType};
use tuio_test::{
    bundle, frame, set_blob_2d, set_cursor_2d, set_cursor_3d, set_object_2d, source, Event,
    Recorder, TestListener,
};

fn generic_set(kind: ProfileKind, session_id: i32) -> OscMessage {
    let mut args = vec![OscType::String("set".into()), OscType::Int(session_id)];
    let object_class = matches!(
        kind,
        ProfileKind::Object2D | ProfileKind::Object25D | ProfileKind::Object3D
    );
    if object_class {
        args.push(OscType::Int(1));
    }
    while args.len() < kind.set_arity() {
        args.push(OscType::Float(0.5));
    }
    OscMessage {
        addr: kind.address().to_string(),
        args,
    }
}

fn assert_kind_lifecycle<P: ListenerProfile>() {
    let test = TestListener::new();
    let recorder = Recorder::<P>::attach(&test.listener);
    let kind = P::KIND;

    test.send(frame(kind, "A", vec![generic_set(kind, 1)], &[1], 1));
    test.send(frame(kind, "A", vec![generic_set(kind, 1)], &[1], 2));
    test.send(frame(kind, "A", vec![], &[], 3));

    assert_eq!(
        recorder.events(),
        vec![
            Event::Added(vec![1]),
            Event::Updated(vec![1]),
            Event::Removed(vec![1]),
        ],
        "lifecycle of {}",
        kind
    );
}

#[test]
fn every_kind_runs_the_same_lifecycle() {
    assert_kind_lifecycle::<Cursor2D>();
    assert_kind_lifecycle::<Cursor25D>();
    assert_kind_lifecycle::<Cursor3D>();
    assert_kind_lifecycle::<Object2D>();
    assert_kind_lifecycle::<Object25D>();
    assert_kind_lifecycle::<Object3D>();
    assert_kind_lifecycle::<Blob2D>();
    assert_kind_lifecycle::<Blob25D>();
    assert_kind_lifecycle::<Blob3D>();
}

#[test]
fn kinds_are_isolated_by_address() {
    let test = TestListener::new();
    let cursors = Recorder::<Cursor2D>::attach(&test.listener);
    let objects = Recorder::<Object2D>::attach(&test.listener);

    test.send(frame(
        ProfileKind::Object2D,
        "A",
        vec![set_object_2d(4, 12, 0.2, 0.3, 1.5)],
        &[4],
        1,
    ));

    assert!(cursors.is_empty());
    assert_eq!(objects.events(), vec![Event::Added(vec![4])]);
    let object = &objects.batch(0)[0];
    assert_eq!(object.class_id(), 12);
    assert_eq!(object.position(), Vec2::new(0.2, 0.3));
    assert_eq!(object.angle(), 1.5);
}

#[test]
fn cursor_25d_and_3d_are_distinct_kinds() {
    let test = TestListener::new();
    let cursors_25d = Recorder::<Cursor25D>::attach(&test.listener);
    let cursors_3d = Recorder::<Cursor3D>::attach(&test.listener);

    test.send(frame(
        ProfileKind::Cursor3D,
        "A",
        vec![set_cursor_3d(2, 0.1, 0.2, 0.3)],
        &[2],
        1,
    ));

    assert!(cursors_25d.is_empty());
    assert_eq!(cursors_3d.batch(0)[0].position(), Vec3::new(0.1, 0.2, 0.3));
}

#[test]
fn blob_geometry_is_decoded() {
    let test = TestListener::new();
    let blobs = Recorder::<Blob2D>::attach(&test.listener);

    test.send(frame(
        ProfileKind::Blob2D,
        "A",
        vec![set_blob_2d(6, 0.5, 0.5, 0.2, 0.4)],
        &[6],
        1,
    ));

    let blob = &blobs.batch(0)[0];
    assert_eq!(blob.dimensions(), Vec2::new(0.2, 0.4));
    assert_eq!(blob.area(), 0.2f32 * 0.4f32);
}

#[test]
fn malformed_set_is_dropped_without_side_effects() {
    let _ = env_logger::builder().is_test(true).try_init();
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);
    let short = OscMessage {
        addr: ProfileKind::Cursor2D.address().to_string(),
        args: vec![OscType::String("set".into()), OscType::Int(1), OscType::Float(0.1)],
    };

    test.send(bundle(vec![
        source(ProfileKind::Cursor2D, "A"),
        short,
        set_cursor_2d(2, 0.0, 0.0),
        tuio_test::alive(ProfileKind::Cursor2D, &[2]),
        tuio_test::fseq(ProfileKind::Cursor2D, 1),
    ]));

    assert_eq!(recorder.events(), vec![Event::Added(vec![2])]);
    let active = test.listener.get_active_profiles::<Cursor2D>();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].session_id(), 2);
}

#[test]
fn unknown_commands_are_ignored() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);

    test.send_all(vec![OscMessage {
        addr: ProfileKind::Cursor2D.address().to_string(),
        args: vec![OscType::String("frame".into()), OscType::Int(1)],
    }]);
    test.send(frame(ProfileKind::Cursor2D, "A", vec![set_cursor_2d(1, 0.0, 0.0)], &[1], 1));

    assert_eq!(recorder.events(), vec![Event::Added(vec![1])]);
}

#[test]
fn unsupported_address_is_rejected() {
    assert!(ProfileKind::from_address("/tuio/2Dpen").is_err());
    for kind in ProfileKind::ALL {
        assert_eq!(ProfileKind::from_address(kind.address()), Ok(kind));
    }
}
