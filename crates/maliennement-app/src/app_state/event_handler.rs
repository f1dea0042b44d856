//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use maliennement_webview::SurfaceEvent;

use super::core::ShellApp;
use super::keys::{command_for_key, ShellCommand};

impl ApplicationHandler for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.poll_and_schedule(event_loop);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        tracing::info!("Suspended, saving navigation state");
        self.save_session();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.save_session();
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_surface_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_surface_bounds();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event_loop, event);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Back,
                ..
            } => {
                self.run_command(event_loop, ShellCommand::Back);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl ShellApp {
    fn handle_keyboard_input(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if let Some(command) = command_for_key(&event.logical_key, self.modifiers) {
            self.run_command(event_loop, command);
        }
    }

    fn run_command(&mut self, event_loop: &ActiveEventLoop, command: ShellCommand) {
        tracing::debug!(?command, "Shell command");
        match command {
            ShellCommand::Back => self.handle_back(event_loop),
            ShellCommand::Refresh => self.host.handle_event(&SurfaceEvent::RefreshRequested),
        }
    }
}
