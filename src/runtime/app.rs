use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use rfd::{MessageButtons, MessageDialogResult, MessageLevel};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Window;

use jotpad::cli::StartupConfig;
use jotpad::commands::{Cmd, FileFilter};
use jotpad::geometry::WindowLayout;
use jotpad::keymap::{load_default_keymap, modifiers_from_winit, Keymap, Modifiers};
use jotpad::messages::{AppMsg, EditorMsg, Msg, UiMsg};
use jotpad::model::{AppModel, CloseChoice, TextSurface};
use jotpad::update::update;

use super::input::{key_event_to_msgs, wheel_msg};
use crate::view::Renderer;

const BLINK_INTERVAL: Duration = Duration::from_millis(500);

pub struct App {
    model: AppModel,
    keymap: Keymap,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    last_tick: Instant,
    modifiers: Modifiers,
    mouse_position: Option<(f64, f64)>,
    /// File and cursor position applied once the window exists
    startup_path: Option<PathBuf>,
    initial_position: Option<(usize, usize)>,
    /// Set by `Cmd::Exit`; the event loop is only reachable from handler methods
    should_exit: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(model: AppModel, startup: StartupConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let keymap = Keymap::with_bindings(load_default_keymap());
        tracing::debug!("Keymap loaded with {} bindings", keymap.len());

        Self {
            model,
            keymap,
            renderer: None,
            window: None,
            context: None,
            last_tick: Instant::now(),
            modifiers: Modifiers::NONE,
            mouse_position: None,
            startup_path: startup.path,
            initial_position: startup.initial_position,
            should_exit: false,
            msg_tx,
            msg_rx,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.model.window_size;
        let window_attributes = Window::default_attributes()
            .with_title(self.model.window_title())
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;

        let renderer = Renderer::new(
            Rc::clone(&window),
            &context,
            self.model.config.font_path.as_deref(),
            self.model.surface.font_point_size(),
        )?;

        let size = window.inner_size();
        self.model.resize(size.width, size.height);
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        self.push_font_metrics();
        Ok(())
    }

    /// Apply queued startup actions once the renderer has real metrics
    fn run_startup(&mut self) {
        if let Some(path) = self.startup_path.take() {
            self.dispatch(Msg::App(AppMsg::OpenFile(path)));
        }
        if let Some((line, column)) = self.initial_position.take() {
            self.dispatch(Msg::Editor(EditorMsg::SetCursorPosition { line, column }));
        }
    }

    fn push_font_metrics(&mut self) {
        if let Some(renderer) = &self.renderer {
            let msg = AppMsg::FontMetrics {
                line_height: renderer.line_height(),
                char_width: renderer.char_width(),
            };
            update(&mut self.model, Msg::App(msg));
        }
    }

    /// Run one message through update and execute the resulting command.
    ///
    /// Returns true if a redraw is needed.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let Some(cmd) = update(&mut self.model, msg) else {
            return false;
        };
        self.after_update();
        let needs_redraw = cmd.needs_redraw();
        self.process_cmd(cmd);
        needs_redraw
    }

    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> bool {
        msgs.into_iter()
            .fold(false, |redraw, msg| self.dispatch(msg) || redraw)
    }

    /// Keep the renderer and window in step with model changes
    fn after_update(&mut self) {
        let point_size = self.model.surface.font_point_size();
        let resized = match &mut self.renderer {
            Some(renderer) => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                match renderer.set_font_size(point_size, scale) {
                    Ok(changed) => changed,
                    Err(e) => {
                        tracing::error!("Failed to resize font: {}", e);
                        false
                    }
                }
            }
            None => false,
        };
        if resized {
            self.push_font_metrics();
        }

        if let Some(window) = &self.window {
            window.set_title(&self.model.window_title());
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.dispatch(Msg::App(AppMsg::Resize(size.width, size.height)))
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                self.after_update();
                true
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = modifiers_from_winit(mods.state());
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let msgs = key_event_to_msgs(&self.keymap, event, self.modifiers);
                self.dispatch_all(msgs)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                false
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => match self.mouse_position {
                Some((x, y)) => self.dispatch(Msg::Ui(UiMsg::Click {
                    x: x as f32,
                    y: y as f32,
                })),
                None => false,
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let over_text = self.mouse_position.is_some_and(|(x, y)| {
                    WindowLayout::for_model(&self.model)
                        .text_area
                        .contains(x as f32, y as f32)
                });
                if !over_text {
                    return false;
                }
                match wheel_msg(delta, self.model.line_height, self.modifiers) {
                    Some(msg) => self.dispatch(msg),
                    None => false,
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
                false
            }
            _ => false,
        }
    }

    fn render(&mut self) {
        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render(&self.model) {
                tracing::error!("Render failed: {}", e);
            }
        }
    }

    fn tick(&mut self) -> bool {
        self.dispatch(Msg::Ui(UiMsg::BlinkCursor))
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::Exit => {
                tracing::info!("Exit requested");
                self.should_exit = true;
            }

            // =====================================================================
            // Native dialogs (using rfd)
            // =====================================================================
            Cmd::ShowOpenFileDialog { start_dir, filters } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let path = with_filters(rfd::FileDialog::new(), filters)
                        .set_directory(start_dir)
                        .pick_file();
                    let _ = tx.send(Msg::App(AppMsg::OpenFileDialogResult { path }));
                });
            }

            Cmd::ShowSaveFileDialog {
                suggested_path,
                filters,
            } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let mut dlg = with_filters(rfd::FileDialog::new(), filters);
                    if let Some(dir) = suggested_path.parent() {
                        dlg = dlg.set_directory(dir);
                    }
                    if let Some(name) = suggested_path.file_name() {
                        dlg = dlg.set_file_name(name.to_string_lossy());
                    }
                    let path = dlg.save_file();
                    let _ = tx.send(Msg::App(AppMsg::SaveFileAsDialogResult { path }));
                });
            }

            Cmd::ShowCloseDialog { title, message } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = rfd::MessageDialog::new()
                        .set_level(MessageLevel::Warning)
                        .set_title(title)
                        .set_description(message)
                        .set_buttons(MessageButtons::YesNoCancelCustom(
                            "Save".into(),
                            "Discard".into(),
                            "Cancel".into(),
                        ))
                        .show();
                    let choice = close_choice(result);
                    let _ = tx.send(Msg::App(AppMsg::CloseDialogResult(choice)));
                });
            }
        }
    }

    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            needs_redraw |= self.dispatch(msg);
        }
        needs_redraw
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn with_filters(mut dlg: rfd::FileDialog, filters: &[FileFilter]) -> rfd::FileDialog {
    for filter in filters {
        dlg = dlg.add_filter(filter.name, filter.extensions);
    }
    dlg
}

/// Map the dialog's answer onto the three close choices
fn close_choice(result: MessageDialogResult) -> CloseChoice {
    match result {
        MessageDialogResult::Yes => CloseChoice::Save,
        MessageDialogResult::No => CloseChoice::Discard,
        MessageDialogResult::Custom(label) => match label.as_str() {
            "Save" => CloseChoice::Save,
            "Discard" => CloseChoice::Discard,
            _ => CloseChoice::Cancel,
        },
        MessageDialogResult::Ok | MessageDialogResult::Cancel => CloseChoice::Cancel,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to initialize window: {:#}", e);
            eprintln!("jotpad: {:#}", e);
            event_loop.exit();
            return;
        }
        self.run_startup();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        let needs_redraw = match event {
            // The close prompt decides whether the process exits
            WindowEvent::CloseRequested => self.dispatch(Msg::App(AppMsg::RequestExit)),
            ref other => self.handle_event(other),
        };

        if self.should_exit {
            event_loop.exit();
        } else if needs_redraw {
            self.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let next_tick = self.last_tick + BLINK_INTERVAL;
        event_loop.set_control_flow(ControlFlow::WaitUntil(next_tick.max(now)));

        if self.process_async_messages() {
            self.request_redraw();
        }

        if now >= next_tick {
            self.last_tick = now;
            if self.tick() {
                self.request_redraw();
            }
        }

        if self.should_exit {
            event_loop.exit();
        }
    }
}
