/// Integration tests for the touch-event view of 2D cursors

use std::sync::{Arc, Mutex};

use tuio_client::{Cursor2D, ProfileKind, TouchEvent, Vec2};
use tuio_shared::{OscMessage, OscType};
use tuio_test::{alive, fseq, frame, set_cursor_2d, source, TestListener};

const CUR: ProfileKind = ProfileKind::Cursor2D;

fn moving_cursor(session_id: i32) -> OscMessage {
    OscMessage {
        addr: CUR.address().to_string(),
        args: vec![
            OscType::String("set".into()),
            OscType::Int(session_id),
            OscType::Float(0.5),
            OscType::Float(0.5),
            OscType::Float(0.25),
            OscType::Float(0.125),
            OscType::Float(0.0),
        ],
    }
}

fn touch_sink() -> (Arc<Mutex<Vec<TouchEvent>>>, impl FnMut(&TouchEvent) + Send + 'static) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    (events, move |event: &TouchEvent| {
        sink.lock().unwrap().push(event.clone())
    })
}

#[test]
fn touches_began_carry_previous_position() {
    let test = TestListener::new();
    let (events, callback) = touch_sink();
    test.listener.set_touches_added_callback(callback);

    test.send_all(vec![
        source(CUR, "A"),
        moving_cursor(3),
        alive(CUR, &[3]),
        fseq(CUR, 1),
    ]);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let touch = &events[0].touches()[0];
    assert_eq!(touch.id, 3);
    assert_eq!(touch.position, Vec2::new(0.5, 0.5));
    assert_eq!(touch.previous_position, Vec2::new(0.25, 0.375));
    assert!(touch.time >= 0.0);
    assert_eq!(touch.source, "A");
}

#[test]
fn one_event_per_frame_and_type() {
    let test = TestListener::new();
    let (moved, on_moved) = touch_sink();
    let (ended, on_ended) = touch_sink();
    test.listener.set_touches_updated_callback(on_moved);
    test.listener.set_touches_removed_callback(on_ended);

    test.send(frame(
        CUR,
        "A",
        vec![set_cursor_2d(1, 0.0, 0.0), set_cursor_2d(2, 0.0, 0.0)],
        &[1, 2],
        1,
    ));
    test.send(frame(
        CUR,
        "A",
        vec![set_cursor_2d(1, 0.1, 0.0), set_cursor_2d(2, 0.1, 0.0)],
        &[1, 2],
        2,
    ));
    test.send(frame(CUR, "A", vec![], &[], 3));

    assert_eq!(moved.lock().unwrap().len(), 1);
    assert_eq!(moved.lock().unwrap()[0].len(), 2);
    assert_eq!(ended.lock().unwrap().len(), 1);
    assert_eq!(ended.lock().unwrap()[0].len(), 2);
}

#[test]
fn touch_time_does_not_go_backwards() {
    let test = TestListener::new();
    let (events, callback) = touch_sink();
    test.listener.set_touches_updated_callback(callback);

    test.send(frame(CUR, "A", vec![set_cursor_2d(1, 0.0, 0.0)], &[1], 1));
    for frame_id in 2..5 {
        test.send(frame(CUR, "A", vec![set_cursor_2d(1, 0.0, 0.0)], &[1], frame_id));
    }

    let times: Vec<f64> = events
        .lock()
        .unwrap()
        .iter()
        .map(|event| event.touches()[0].time)
        .collect();
    assert_eq!(times.len(), 3);
    assert!(times.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(times[2] <= test.listener.elapsed_seconds());
}

#[test]
fn touch_callback_replaces_cursor_callback() {
    let test = TestListener::new();
    let cursor_calls = Arc::new(Mutex::new(0));
    let counter = cursor_calls.clone();
    test.listener
        .set_added_callback::<Cursor2D, _>(move |_| *counter.lock().unwrap() += 1);
    let (events, callback) = touch_sink();
    test.listener.set_touches_added_callback(callback);

    test.send(frame(CUR, "A", vec![set_cursor_2d(1, 0.0, 0.0)], &[1], 1));

    assert_eq!(*cursor_calls.lock().unwrap(), 0);
    assert_eq!(events.lock().unwrap().len(), 1);
}
