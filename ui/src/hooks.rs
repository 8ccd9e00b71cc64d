//! Dioxus hooks bridging the pure shell logic into signals.

use std::rc::Rc;

use compass::{watch, Compass, CompassConfig, Heading, Position, SensorHealth};
use dioxus::prelude::*;

use crate::core::animation::FractionTween;
use crate::core::config::ShellConfig;
use crate::core::layout::list_width_target;
use crate::core::timing;
use crate::sensors;

/// Animated width fraction of the catalog list.
///
/// Retargets whenever `is_root` flips; width-class changes never restart it.
/// A retarget mid-flight continues from the value currently displayed.
pub fn use_list_width_fraction(is_root: Memo<bool>, config: ShellConfig) -> Signal<f32> {
    let mut fraction = use_signal(|| list_width_target(*is_root.peek(), &config));
    let mut running = use_signal(|| Option::<Task>::None);

    use_effect(move || {
        let target = list_width_target(is_root(), &config);
        if let Some(task) = running.write().take() {
            task.cancel();
        }

        let tween = FractionTween::new(*fraction.peek(), target, config.list_width_animation_ms);
        if tween.is_noop() {
            return;
        }

        let started = timing::now();
        let task = spawn(async move {
            loop {
                let elapsed = timing::now().elapsed_since(started);
                fraction.set(tween.value_at(elapsed));
                if tween.is_finished(elapsed) {
                    break;
                }
                timing::sleep_ms(timing::FRAME_MS).await;
            }
        });
        running.set(Some(task));
    });

    fraction
}

/// Readings of a screen-owned compass.
#[derive(Clone, Copy)]
pub struct CompassSignals {
    pub orientation: Signal<Option<Heading>>,
    pub position: Signal<Option<Position>>,
    pub health: Signal<SensorHealth>,
    pub config: CompassConfig,
}

/// Create a compass for the calling component, started while it is mounted
/// and stopped when it unmounts.
pub fn use_compass() -> CompassSignals {
    let config = try_use_context::<CompassConfig>().unwrap_or_default();
    let compass = use_hook(|| {
        let compass = Rc::new(Compass::new(sensors::create_sensor(), config));
        compass.start();
        compass
    });

    let orientation = use_signal(|| compass.orientation());
    let position = use_signal(|| compass.position());
    let health = use_signal(|| compass.health());

    use_future({
        let compass = compass.clone();
        move || mirror(compass.subscribe_orientation(), orientation)
    });
    use_future({
        let compass = compass.clone();
        move || mirror(compass.subscribe_position(), position)
    });
    use_future({
        let compass = compass.clone();
        move || mirror(compass.subscribe_health(), health)
    });

    use_drop({
        let compass = compass.clone();
        move || compass.stop()
    });

    CompassSignals {
        orientation,
        position,
        health,
        config: compass.config(),
    }
}

/// Copy every published value into `target` until the sender goes away.
async fn mirror<T: Clone + 'static>(mut rx: watch::Receiver<T>, mut target: Signal<T>) {
    loop {
        let latest = rx.borrow_and_update().clone();
        target.set(latest);
        if rx.changed().await.is_err() {
            break;
        }
    }
}
