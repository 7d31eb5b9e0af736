//! Delayed scene-restart scheduling.

use bevy::prelude::*;

use super::events::RestartEvent;

/// A pending delayed restart.
///
/// The timer ticks against real elapsed time, so it keeps running while
/// the physics pipeline is paused. Scheduling while a restart is already
/// pending overwrites the previous timer; the restart itself clears it,
/// so a timer never outlives the scene that scheduled it.
#[derive(Resource, Default)]
pub struct PendingRestart {
    timer: Option<Timer>,
}

impl PendingRestart {
    /// Schedule a restart `delay` seconds from now.
    pub fn schedule(&mut self, delay: f32) {
        self.timer = Some(Timer::from_seconds(delay, TimerMode::Once));
    }

    /// Drop any pending restart.
    pub fn clear(&mut self) {
        self.timer = None;
    }

    /// Whether a restart is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// Seconds left on the pending restart, if one is scheduled.
    pub fn remaining_secs(&self) -> Option<f32> {
        self.timer.as_ref().map(Timer::remaining_secs)
    }
}

/// Fire the restart once the scheduled delay has elapsed.
pub fn tick_pending_restart(
    time: Res<Time<Real>>,
    mut pending: ResMut<PendingRestart>,
    mut restarts: EventWriter<RestartEvent>,
) {
    let Some(timer) = pending.timer.as_mut() else {
        return;
    };

    if timer.tick(time.delta()).finished() {
        pending.clear();
        restarts.send(RestartEvent);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<PendingRestart>()
            .insert_resource(Time::<Real>::default())
            .add_event::<RestartEvent>()
            .add_systems(Update, tick_pending_restart);
        app
    }

    fn advance(app: &mut App, millis: u64) {
        app.world_mut()
            .resource_mut::<Time<Real>>()
            .advance_by(Duration::from_millis(millis));
        app.update();
    }

    fn restart_count(app: &App) -> usize {
        app.world().resource::<Events<RestartEvent>>().len()
    }

    #[test]
    fn fires_once_after_the_delay() {
        let mut app = test_app();
        app.world_mut().resource_mut::<PendingRestart>().schedule(1.0);

        advance(&mut app, 500);
        assert_eq!(restart_count(&app), 0);

        advance(&mut app, 600);
        assert_eq!(restart_count(&app), 1);
        assert!(!app.world().resource::<PendingRestart>().is_pending());
    }

    #[test]
    fn rescheduling_overwrites_the_pending_timer() {
        let mut app = test_app();
        app.world_mut().resource_mut::<PendingRestart>().schedule(1.0);
        advance(&mut app, 500);

        // A second trigger re-schedules; the old deadline no longer applies.
        app.world_mut().resource_mut::<PendingRestart>().schedule(2.0);
        advance(&mut app, 600);
        assert_eq!(restart_count(&app), 0);

        advance(&mut app, 1500);
        assert_eq!(restart_count(&app), 1);
    }

    #[test]
    fn idle_timer_never_fires() {
        let mut app = test_app();
        advance(&mut app, 5000);
        assert_eq!(restart_count(&app), 0);
    }
}
