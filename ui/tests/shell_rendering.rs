//! The shell rendered in a headless `VirtualDom`: screens survive width
//! changes, and the list-width animation retargets smoothly.

use std::cell::RefCell;
use std::time::Duration;

use compass::testing::FakeSensor;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use ui::core::config::ShellConfig;
use ui::core::window::WidthClass;
use ui::hooks::use_list_width_fraction;
use ui::nav::COMPASS_ROUTE;
use ui::CatalogApp;

thread_local! {
    static SENSOR: FakeSensor = FakeSensor::new();
    static WIDTH: RefCell<Option<Signal<WidthClass>>> = const { RefCell::new(None) };
    static AT_ROOT: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
    static FRACTIONS: RefCell<Vec<f32>> = const { RefCell::new(Vec::new()) };
}

const ANIMATION_MS: u64 = 600;

fn sensor() -> FakeSensor {
    SENSOR.with(Clone::clone)
}

fn width_signal() -> Signal<WidthClass> {
    WIDTH.with(|slot| slot.borrow().expect("harness mounted"))
}

fn root_signal() -> Signal<bool> {
    AT_ROOT.with(|slot| slot.borrow().expect("harness mounted"))
}

fn recorded() -> Vec<f32> {
    FRACTIONS.with(|values| values.borrow().clone())
}

/// Drive renders, tasks and timers for `ms` of wall-clock time.
async fn run_for(dom: &mut VirtualDom, ms: u64) {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
    loop {
        let woke = tokio::select! {
            _ = dom.wait_for_work() => true,
            _ = tokio::time::sleep_until(deadline) => false,
        };
        if !woke {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

#[allow(non_snake_case)]
fn ShellHarness() -> Element {
    let width = use_signal(|| WidthClass::Compact);
    use_hook(|| WIDTH.with(|slot| *slot.borrow_mut() = Some(width)));

    rsx! {
        CatalogApp { width_class: width(), start_route: COMPASS_ROUTE }
    }
}

#[tokio::test]
async fn compass_screen_survives_width_changes() {
    ui::sensors::register_sensor(|| Box::new(sensor()));
    let sensor = sensor();

    let mut dom = VirtualDom::new(ShellHarness);
    dom.rebuild_in_place();
    run_for(&mut dom, 30).await;
    assert_eq!(sensor.registration_count(), 1);

    for class in [WidthClass::Expanded, WidthClass::Medium, WidthClass::Compact] {
        dom.in_runtime(|| width_signal().set(class));
        run_for(&mut dom, 30).await;
        assert_eq!(sensor.registration_count(), 1, "remounted on {class:?}");
        assert_eq!(sensor.unregistration_count(), 0, "stopped on {class:?}");
        assert!(sensor.is_registered());
    }
}

#[allow(non_snake_case)]
fn FractionHarness() -> Element {
    let width = use_signal(|| WidthClass::Expanded);
    let at_root = use_signal(|| true);
    use_hook(|| {
        WIDTH.with(|slot| *slot.borrow_mut() = Some(width));
        AT_ROOT.with(|slot| *slot.borrow_mut() = Some(at_root));
    });

    let is_root = use_memo(move || at_root());
    let config = ShellConfig {
        list_width_animation_ms: ANIMATION_MS,
        ..ShellConfig::default()
    };
    let fraction = use_list_width_fraction(is_root, config);

    let value = fraction();
    FRACTIONS.with(|values| values.borrow_mut().push(value));

    rsx! {
        div { "{width:?} {value}" }
    }
}

fn assert_monotonic(values: &[f32], rising: bool) {
    for pair in values.windows(2) {
        let ok = if rising { pair[1] >= pair[0] - 1e-5 } else { pair[1] <= pair[0] + 1e-5 };
        assert!(ok, "not monotonic ({}): {values:?}", if rising { "up" } else { "down" });
    }
}

#[tokio::test]
async fn list_width_retargets_from_the_displayed_value() {
    let min = ShellConfig::default().list_min_width_fraction;

    let mut dom = VirtualDom::new(FractionHarness);
    dom.rebuild_in_place();
    run_for(&mut dom, 30).await;
    assert_eq!(recorded().last().copied(), Some(1.0));

    // Leave root: shrink towards the minimum, stop about a third of the way.
    let shrink_from = recorded().len();
    dom.in_runtime(|| root_signal().set(false));
    run_for(&mut dom, ANIMATION_MS / 4).await;

    // Width class changes must not restart the tween.
    for class in [WidthClass::Medium, WidthClass::Expanded] {
        dom.in_runtime(|| width_signal().set(class));
        run_for(&mut dom, 20).await;
    }
    let shrinking = recorded()[shrink_from..].to_vec();
    assert_monotonic(&shrinking, false);
    let midway = *shrinking.last().expect("frames while shrinking");
    assert!(midway > min && midway < 1.0, "expected mid-flight value, got {midway}");

    // Back to root mid-flight: grow again starting from what is displayed.
    let grow_from = recorded().len();
    dom.in_runtime(|| root_signal().set(true));
    run_for(&mut dom, ANIMATION_MS * 3).await;

    let growing = recorded()[grow_from..].to_vec();
    assert!(growing[0] >= midway - 1e-4, "jumped from {midway} to {}", growing[0]);
    assert_monotonic(&growing, true);
    assert_eq!(growing.last().copied(), Some(1.0));

    let all = recorded();
    assert!(all.iter().all(|v| (min..=1.0).contains(v)), "out of range: {all:?}");
}
