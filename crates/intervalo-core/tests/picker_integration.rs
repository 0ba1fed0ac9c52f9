use std::cell::RefCell;
use std::rc::Rc;

use intervalo_core::{
    JsonStore, Picker, PickerConfig, PickerTuning, PointerKind, SettingsField, SettingsForm,
    WorkoutSettings,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Up(u32),
    Down(u32),
    Drag(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..80).prop_map(Op::Up),
        (0u32..80).prop_map(Op::Down),
        (-120.0f64..120.0).prop_map(Op::Drag),
    ]
}

fn apply(p: &mut Picker, op: &Op, at_ms: &mut u64) {
    match *op {
        Op::Up(n) => {
            p.up(n);
        }
        Op::Down(n) => {
            p.down(n);
        }
        Op::Drag(dy) => {
            p.pointer_down(PointerKind::Mouse, 500.0, *at_ms);
            p.pointer_move(500.0 - dy / 2.0);
            p.pointer_move(500.0 - dy);
            *at_ms += 150;
            p.pointer_up(*at_ms);
        }
    }
}

proptest! {
    #[test]
    fn bounded_picker_never_leaves_its_range(ops in prop::collection::vec(op(), 1..40)) {
        let mut p = Picker::new(PickerConfig::bounded(1, 20, false), PickerTuning::default()).unwrap();
        let mut at = 0;
        for op in &ops {
            apply(&mut p, op, &mut at);
            prop_assert!((1..=20).contains(&p.get()));
        }
    }

    #[test]
    fn window_is_centered_on_value(ops in prop::collection::vec(op(), 1..40)) {
        let mut p = Picker::new(PickerConfig::looped(0, 59, true), PickerTuning::default()).unwrap();
        let mut at = 0;
        for op in &ops {
            apply(&mut p, op, &mut at);
            prop_assert!((0..=59).contains(&p.get()));
            prop_assert_eq!(p.window().len(), 15);
            prop_assert_eq!(p.window().current(), Some(p.get()));
            let labels = p.window_labels();
            prop_assert_eq!(&labels[7], &p.label());
        }
    }

    #[test]
    fn looping_moves_are_modular(ups in 0u32..500, downs in 0u32..500) {
        let mut p = Picker::new(PickerConfig::looped(0, 59, true), PickerTuning::default()).unwrap();
        p.up(ups);
        p.down(downs);
        let expected = (i64::from(ups) - i64::from(downs)).rem_euclid(60);
        prop_assert_eq!(p.get(), expected);
    }
}

#[test]
fn flick_on_the_seconds_wheel_is_saved() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonStore::open(dir.path().join("store.json")).unwrap();
    let mut form = SettingsForm::new(&WorkoutSettings::default(), PickerTuning::default()).unwrap();

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    form.picker_mut(SettingsField::ActivitySeconds)
        .changes_mut()
        .subscribe_fn(move |v| sink.borrow_mut().push(*v));

    // Touch drag 100 units up in 200 ms: one drag step, then a five step flick.
    let seconds = form.picker_mut(SettingsField::ActivitySeconds);
    seconds.pointer_down(PointerKind::Touch, 300.0, 1_000);
    assert_eq!(seconds.pointer_move(200.0), 1);
    let flick = seconds.pointer_up(1_200).unwrap();
    assert_eq!(flick.steps, 5);
    assert_eq!(flick.applied, 5);

    assert_eq!(form.picker(SettingsField::ActivitySeconds).get(), 26);
    assert_eq!(*changes.borrow(), vec![21, 26]);

    let saved = form.commit(&mut store).unwrap();
    assert_eq!(saved.activity_secs, 26);
}

#[test]
fn slow_drag_on_sets_wheel_has_no_flick() {
    let mut form = SettingsForm::new(&WorkoutSettings::default(), PickerTuning::default()).unwrap();
    let sets = form.picker_mut(SettingsField::Sets);

    sets.pointer_down(PointerKind::Mouse, 400.0, 0);
    let mut y = 400.0;
    let mut stepped = 0;
    for _ in 0..4 {
        y -= 6.0;
        stepped += sets.pointer_move(y);
    }
    assert_eq!(stepped, 4);
    let flick = sets.pointer_up(2_000).unwrap();
    assert_eq!(flick.steps, 0);
    assert_eq!(form.current().set_count, 12);
}

#[test]
fn minutes_wheel_stops_at_bounds_during_flick() {
    let mut form = SettingsForm::new(&WorkoutSettings::default(), PickerTuning::default()).unwrap();
    let minutes = form.picker_mut(SettingsField::IntervalMinutes);
    assert_eq!(minutes.get(), 0);

    // Downward flick at the minimum.
    minutes.pointer_down(PointerKind::Touch, 100.0, 0);
    assert_eq!(minutes.pointer_move(160.0), 0);
    let flick = minutes.pointer_up(100).unwrap();
    assert_eq!(flick.steps, 6);
    assert_eq!(flick.applied, 0);
    assert_eq!(minutes.get(), 0);
    assert_eq!(minutes.window_labels()[..7], vec![String::new(); 7][..]);
}
