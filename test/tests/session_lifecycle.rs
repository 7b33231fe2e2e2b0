/// Integration tests for the add/update/remove lifecycle of 2D cursors
/// delivered through a listening Listener

use tuio_client::{Cursor2D, Profile, ProfileKind, Vec2};
use tuio_test::{alive, fseq, frame, set_cursor_2d, source, Event, Recorder, TestListener};

const CUR: ProfileKind = ProfileKind::Cursor2D;

#[test]
fn cursor_lifecycle_fires_each_event_once() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);

    test.send(frame(CUR, "A", vec![set_cursor_2d(1, 0.1, 0.2)], &[1], 1));
    assert_eq!(recorder.events(), vec![Event::Added(vec![1])]);
    assert_eq!(recorder.batch(0)[0].position(), Vec2::new(0.1, 0.2));

    test.send(frame(CUR, "A", vec![set_cursor_2d(1, 0.5, 0.5)], &[1], 2));
    assert_eq!(recorder.events()[1], Event::Updated(vec![1]));
    assert_eq!(recorder.batch(1)[0].position(), Vec2::new(0.5, 0.5));

    test.send(frame(CUR, "A", vec![], &[], 3));
    assert_eq!(recorder.events()[2], Event::Removed(vec![1]));
    assert_eq!(recorder.len(), 3);
    assert!(test.listener.get_active_profiles::<Cursor2D>().is_empty());
}

#[test]
fn removed_batch_carries_last_known_value() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);

    test.send(frame(CUR, "A", vec![set_cursor_2d(4, 0.3, 0.3)], &[4], 1));
    test.send(frame(CUR, "A", vec![set_cursor_2d(4, 0.7, 0.1)], &[4], 2));
    test.send(frame(CUR, "A", vec![], &[], 3));

    let removed = recorder.last_batch().unwrap();
    assert_eq!(removed[0].position(), Vec2::new(0.7, 0.1));
    assert_eq!(removed[0].source(), "A");
}

#[test]
fn batches_group_a_whole_frame() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);

    test.send(frame(
        CUR,
        "A",
        vec![
            set_cursor_2d(3, 0.0, 0.0),
            set_cursor_2d(1, 0.0, 0.0),
            set_cursor_2d(2, 0.0, 0.0),
        ],
        &[1, 2, 3],
        1,
    ));

    assert_eq!(recorder.events(), vec![Event::Added(vec![3, 1, 2])]);
    let active: Vec<i32> = test
        .listener
        .get_active_profiles::<Cursor2D>()
        .iter()
        .map(|cursor| cursor.session_id())
        .collect();
    assert_eq!(active, vec![1, 2, 3]);
}

#[test]
fn mixed_frame_reports_all_three_events() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);
    test.send(frame(
        CUR,
        "A",
        vec![set_cursor_2d(1, 0.0, 0.0), set_cursor_2d(2, 0.0, 0.0)],
        &[1, 2],
        1,
    ));
    recorder.clear();

    test.send(frame(
        CUR,
        "A",
        vec![set_cursor_2d(2, 0.4, 0.4), set_cursor_2d(5, 0.0, 0.0)],
        &[2, 5],
        2,
    ));

    assert_eq!(
        recorder.events(),
        vec![
            Event::Added(vec![5]),
            Event::Updated(vec![2]),
            Event::Removed(vec![1]),
        ]
    );
}

#[test]
fn set_before_first_flush_is_reported_once_as_added() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);

    test.send_all(vec![
        source(CUR, "A"),
        set_cursor_2d(1, 0.1, 0.1),
        set_cursor_2d(1, 0.2, 0.2),
        set_cursor_2d(1, 0.9, 0.8),
        alive(CUR, &[1]),
        fseq(CUR, 1),
    ]);

    assert_eq!(recorder.events(), vec![Event::Added(vec![1])]);
    assert_eq!(recorder.batch(0)[0].position(), Vec2::new(0.9, 0.8));
}

#[test]
fn frame_without_changes_fires_nothing() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);

    test.send(frame(CUR, "A", vec![], &[], 1));
    test.send(frame(CUR, "A", vec![], &[], 2));

    assert!(recorder.is_empty());
}

#[test]
fn item_callbacks_fire_once_per_profile() {
    use std::sync::{Arc, Mutex};

    let test = TestListener::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    test.listener
        .set_added_item_callback::<Cursor2D, _>(move |cursor| sink.lock().unwrap().push(cursor.session_id()));

    test.send(frame(
        CUR,
        "A",
        vec![set_cursor_2d(7, 0.0, 0.0), set_cursor_2d(8, 0.0, 0.0)],
        &[7, 8],
        1,
    ));

    assert_eq!(*seen.lock().unwrap(), vec![7, 8]);
}

#[test]
fn replacing_a_callback_stops_the_old_one() {
    let test = TestListener::new();
    let first = Recorder::<Cursor2D>::attach(&test.listener);
    let second = Recorder::<Cursor2D>::attach(&test.listener);

    test.send(frame(CUR, "A", vec![set_cursor_2d(1, 0.0, 0.0)], &[1], 1));

    assert!(first.is_empty());
    assert_eq!(second.events(), vec![Event::Added(vec![1])]);
}

#[test]
fn callback_can_query_active_profiles() {
    use std::sync::{Arc, Mutex};

    let test = TestListener::new();
    let handler = test.listener.track::<Cursor2D>();
    let counts = Arc::new(Mutex::new(Vec::new()));
    let sink = counts.clone();
    test.listener.set_removed_callback::<Cursor2D, _>(move |_| {
        sink.lock().unwrap().push(handler.active_profiles().len());
    });

    test.send(frame(
        CUR,
        "A",
        vec![set_cursor_2d(1, 0.0, 0.0), set_cursor_2d(2, 0.0, 0.0)],
        &[1, 2],
        1,
    ));
    test.send(frame(CUR, "A", vec![], &[2], 2));

    assert_eq!(*counts.lock().unwrap(), vec![1]);
}

#[test]
fn closed_listener_ignores_traffic() {
    let test = TestListener::new();
    let recorder = Recorder::<Cursor2D>::attach(&test.listener);

    test.listener.close().unwrap();
    let delivered = test
        .sender
        .send(&frame(CUR, "A", vec![set_cursor_2d(1, 0.0, 0.0)], &[1], 1));

    assert!(!delivered);
    assert!(recorder.is_empty());
}
