//! Lifecycle engine: polls the target, renders on change, dispatches actions.
//!
//! All mutation happens through `handle`, one event at a time. The engine
//! owns its config, host and sink; there is no process-wide state.

use log::{debug, info, warn};

use crate::config::TargetConfig;
use crate::host::WindowHost;
use crate::model::{EngineEvent, EngineFlow, EnginePhase, Notice, TargetState, UserAction};
use crate::presentation::{PresentationDescriptor, PresentationSink};
use crate::target::{ProcessController, classify, locate};

pub struct LifecycleEngine<H: WindowHost, S: PresentationSink> {
    config: TargetConfig,
    host: H,
    sink: S,
    last_state: TargetState,
    phase: EnginePhase,
}

impl<H: WindowHost, S: PresentationSink> LifecycleEngine<H, S> {
    /// Classifies the target once, autostarts it if configured and stopped,
    /// renders the startup state and enters `Running`.
    ///
    /// The start outcome is not awaited; the next tick reconciles it.
    pub fn start(config: TargetConfig, host: H, sink: S) -> Self {
        let mut engine = Self {
            config,
            host,
            sink,
            last_state: TargetState::Stopped,
            phase: EnginePhase::Initializing,
        };

        let state = engine.observe();
        info!("{} is {} at startup", engine.config.name, state);
        if state == TargetState::Stopped && engine.config.autostart {
            info!("Autostarting {}", engine.config.name);
            let result = engine.controller().start();
            engine.report(result);
        }

        engine.last_state = state;
        engine.render(state);
        engine.phase = EnginePhase::Running;
        engine
    }

    pub fn handle(&mut self, event: EngineEvent) -> EngineFlow {
        if self.phase == EnginePhase::Terminating {
            debug!("Ignoring {:?} after exit", event);
            return EngineFlow::Exit;
        }

        match event {
            EngineEvent::Tick => {
                self.poll();
            }
            EngineEvent::MenuOpenRequest => self.sink.open_menu(),
            EngineEvent::UserAction(action) => return self.dispatch(action),
        }
        EngineFlow::Continue
    }

    /// Re-classifies the target and renders only if the state changed.
    fn poll(&mut self) {
        let state = self.observe();
        if state == self.last_state {
            return;
        }
        debug!(
            "{} changed: {} -> {}",
            self.config.name, self.last_state, state
        );
        // Commit before rendering.
        self.last_state = state;
        self.render(state);
    }

    fn dispatch(&mut self, action: UserAction) -> EngineFlow {
        info!("User action: {:?}", action);
        let result = match action {
            UserAction::Toggle => {
                let handle = locate(&self.host, &self.config.window_title);
                self.controller().toggle(handle.as_ref())
            }
            UserAction::Start => self.controller().start(),
            UserAction::Stop => self.controller().stop(),
            UserAction::Exit => return self.shutdown(),
        };
        self.report(result);
        EngineFlow::Continue
    }

    fn shutdown(&mut self) -> EngineFlow {
        self.phase = EnginePhase::Terminating;

        let handle = locate(&self.host, &self.config.window_title);
        if classify(&self.host, handle.as_ref()) == TargetState::Visible
            && let Some(handle) = handle
            && let Err(err) = self.host.set_visible(handle.window, false)
        {
            warn!("Could not hide {} on exit: {}", self.config.name, err);
        }

        self.sink.remove();
        info!("Exiting");
        EngineFlow::Exit
    }

    fn observe(&self) -> TargetState {
        let handle = locate(&self.host, &self.config.window_title);
        classify(&self.host, handle.as_ref())
    }

    fn render(&mut self, state: TargetState) {
        let descriptor = PresentationDescriptor::for_state(state);
        self.sink.show(state, descriptor.icon);
        self.sink.set_menu(&descriptor.menu);
    }

    fn report(&mut self, result: Result<(), Notice>) {
        if let Err(notice) = result {
            warn!("{}", notice.message);
            self.sink.notify(&notice);
        }
    }

    fn controller(&self) -> ProcessController<'_, H> {
        ProcessController::new(&self.host, &self.config)
    }

    pub fn state(&self) -> TargetState {
        self.last_state
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
