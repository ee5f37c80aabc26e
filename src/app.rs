#[cfg(target_os = "windows")]
pub use windows_app::run;

#[cfg(not(target_os = "windows"))]
pub fn run() -> anyhow::Result<()> {
    anyhow::bail!("no window host is available on this platform")
}

#[cfg(target_os = "windows")]
mod windows_app {
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{debug, info};
    use tray_icon::menu::MenuEvent;
    use tray_icon::{MouseButton, MouseButtonState, TrayIconEvent};
    use winit::event::{Event, StartCause};
    use winit::event_loop::{ControlFlow, EventLoop};

    use crate::config::{get_config_path, load_config};
    use crate::engine::LifecycleEngine;
    use crate::model::{EngineEvent, EngineFlow, UserAction};
    use crate::platform::current::window::Win32Host;
    use crate::queue::EventQueue;
    use crate::ui::icon::IconSet;
    use crate::ui::menu::parse_menu_action;
    use crate::ui::tray::TrayPresenter;

    const MENU_POLL_INTERVAL: Duration = Duration::from_millis(50);

    pub fn run() -> Result<()> {
        let config_path = get_config_path();
        let config = load_config(&config_path).with_context(|| {
            format!(
                "Please review the config file: {}",
                config_path.display()
            )
        })?;
        let icons = IconSet::load(&config)?;
        let poll_interval = config.poll_interval;
        info!(
            "Supervising '{}' (window title contains '{}'), polling every {:?}",
            config.name, config.window_title, poll_interval
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let sink = TrayPresenter::new(&config.name, &icons)?;
        let mut engine = LifecycleEngine::start(config, Win32Host, sink);
        let queue = EventQueue::new();

        let menu_receiver = MenuEvent::receiver().clone();
        let tray_receiver = TrayIconEvent::receiver().clone();
        let mut next_tick = Instant::now() + poll_interval;

        #[allow(deprecated)]
        let run_result = event_loop.run(move |event, event_loop| match event {
            Event::NewEvents(StartCause::Init) => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(wake_at(next_tick)));
            }
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                while let Ok(event) = menu_receiver.try_recv() {
                    match parse_menu_action(event.id.0.as_str()) {
                        Some(action) => queue.push(EngineEvent::UserAction(action)),
                        None => debug!("Ignoring unknown menu id {:?}", event.id),
                    }
                }
                while let Ok(event) = tray_receiver.try_recv() {
                    if let Some(event) = adapt_tray_event(&event) {
                        queue.push(event);
                    }
                }

                let now = Instant::now();
                if now >= next_tick {
                    queue.push(EngineEvent::Tick);
                    next_tick = now + poll_interval;
                }

                if queue.dispatch(&mut engine) == EngineFlow::Exit {
                    event_loop.exit();
                    return;
                }
                event_loop.set_control_flow(ControlFlow::WaitUntil(wake_at(next_tick)));
            }
            _ => {}
        });

        run_result.context("event loop terminated unexpectedly")
    }

    fn wake_at(next_tick: Instant) -> Instant {
        (Instant::now() + MENU_POLL_INTERVAL).min(next_tick)
    }

    /// Secondary click opens the context menu; primary double-click toggles.
    fn adapt_tray_event(event: &TrayIconEvent) -> Option<EngineEvent> {
        match event {
            TrayIconEvent::Click {
                button: MouseButton::Right,
                button_state: MouseButtonState::Up,
                ..
            } => Some(EngineEvent::MenuOpenRequest),
            TrayIconEvent::DoubleClick {
                button: MouseButton::Left,
                ..
            } => Some(EngineEvent::UserAction(UserAction::Toggle)),
            _ => None,
        }
    }
}
