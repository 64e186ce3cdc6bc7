use anyhow::{anyhow, Result};
use eframe::egui;
use tracing::{error, info};

use crate::draw::canvas::Canvas;
use crate::draw::capture::DisplayGeometry;
use crate::draw::command::{pointer_action, Command, Dispatch, KeyBindings, PointerAction};
use crate::draw::model::{Rgba, WindowSize};
use crate::draw::save;
use crate::draw::toolbar::{toolbars, Toolbar, ToolbarItem, ToolbarKind};
use crate::hotkey::parse_key_name;
use crate::settings::{MouseButton, Settings, ToolbarArea};

pub const APP_NAME: &str = "screen_pen";

/// The full-screen window the canvas is drawn into.
pub struct OverlayApp {
    canvas: Canvas,
    settings: Settings,
    bindings: KeyBindings,
    toolbars: Vec<Toolbar>,
    menus_visible: bool,
    picker_color: egui::Color32,
    texture: Option<egui::TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl OverlayApp {
    pub fn new(canvas: Canvas, settings: Settings) -> Self {
        let bindings = KeyBindings::from_settings(&settings);
        let toolbars = toolbars(&settings, canvas.default_background());
        let color = canvas.pen().color;
        Self {
            menus_visible: !settings.hidden_menus,
            canvas,
            bindings,
            toolbars,
            settings,
            picker_color: egui::Color32::from_rgb(color.r, color.g, color.b),
            texture: None,
            uploaded_revision: None,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, command: Command) {
        match self.canvas.apply(command) {
            Dispatch::Done => {}
            Dispatch::Save => self.save(),
            Dispatch::ToggleMenus => self.menus_visible = !self.menus_visible,
            Dispatch::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn save(&self) {
        let frame = self.canvas.export_frame();
        match save::save_to_working_dir(&frame) {
            Ok(path) => info!("saved {}", path.display()),
            Err(err) => error!("failed to save screenshot: {err:#}"),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        self.canvas
            .set_window_size(WindowSize::new(screen.width(), screen.height()));

        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => {
                    let Some(code) = parse_key_name(key.name()) else {
                        continue;
                    };
                    let ctrl = modifiers.ctrl || modifiers.mac_cmd;
                    if let Some(command) = self.bindings.lookup(code, ctrl, modifiers.shift, modifiers.alt) {
                        self.dispatch(ctx, command);
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    let Some(button) = mouse_button(button) else {
                        continue;
                    };
                    let local = pos - screen.min;
                    let on_canvas =
                        press_reaches_canvas(ctx.available_rect(), ctx.layer_id_at(pos), pos);
                    match (pointer_action(&self.settings, button), pressed) {
                        (PointerAction::Draw, true) if on_canvas => {
                            self.canvas.pointer_down(local.x, local.y);
                        }
                        (PointerAction::Draw, false) => self.canvas.pointer_up(local.x, local.y),
                        (PointerAction::Command(command), true) if on_canvas => {
                            self.dispatch(ctx, command);
                        }
                        _ => {}
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    let local = pos - screen.min;
                    self.canvas.pointer_move(local.x, local.y);
                }
                _ => {}
            }
        }
    }

    /// Uploads the frame if it changed and draws it into `slot`.
    fn paint_canvas(&mut self, ctx: &egui::Context, slot: egui::layers::ShapeIdx) {
        self.canvas.paint_stroke();
        if self.uploaded_revision != Some(self.canvas.revision()) {
            let frame = self.canvas.render();
            let revision = self.canvas.revision();
            let size = [frame.width() as usize, frame.height() as usize];
            let image = egui::ColorImage::from_rgba_premultiplied(size, frame.data());
            match self.texture.as_mut() {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture = Some(ctx.load_texture("canvas", image, egui::TextureOptions::LINEAR))
                }
            }
            self.uploaded_revision = Some(revision);
        }

        if let Some(texture) = &self.texture {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            let image = egui::Shape::image(texture.id(), ctx.screen_rect(), uv, egui::Color32::WHITE);
            ctx.layer_painter(egui::LayerId::background()).set(slot, image);
        }
    }

    fn show_toolbars(&mut self, ctx: &egui::Context) -> Vec<Command> {
        let mut commands = Vec::new();
        if !self.menus_visible {
            return commands;
        }

        let icon = self.settings.icon_size as f32;
        let picker = &mut self.picker_color;
        for toolbar in &self.toolbars {
            let id = match toolbar.kind {
                ToolbarKind::Pen => "pen_bar",
                ToolbarKind::Board => "board_bar",
                ToolbarKind::Action => "action_bar",
            };
            let mut contents = |ui: &mut egui::Ui| {
                toolbar_items(ui, &toolbar.items, icon, picker, &mut commands);
            };
            match toolbar.area {
                ToolbarArea::Top => {
                    egui::TopBottomPanel::top(id)
                        .resizable(false)
                        .show(ctx, |ui| ui.horizontal_wrapped(|ui| contents(ui)));
                }
                ToolbarArea::Bottom => {
                    egui::TopBottomPanel::bottom(id)
                        .resizable(false)
                        .show(ctx, |ui| ui.horizontal_wrapped(|ui| contents(ui)));
                }
                ToolbarArea::Left => {
                    egui::SidePanel::left(id)
                        .resizable(false)
                        .show(ctx, |ui| ui.vertical(|ui| contents(ui)));
                }
                ToolbarArea::Right => {
                    egui::SidePanel::right(id)
                        .resizable(false)
                        .show(ctx, |ui| ui.vertical(|ui| contents(ui)));
                }
            }
        }
        commands
    }
}

fn toolbar_items(
    ui: &mut egui::Ui,
    items: &[ToolbarItem],
    icon: f32,
    picker: &mut egui::Color32,
    commands: &mut Vec<Command>,
) {
    let size = egui::vec2(icon, icon);
    for item in items {
        match item {
            ToolbarItem::Button { label, tooltip, .. } => {
                if ui
                    .add(egui::Button::new(*label).min_size(size))
                    .on_hover_text(*tooltip)
                    .clicked()
                {
                    commands.extend(item.command());
                }
            }
            ToolbarItem::Swatch { name, color } => {
                let fill = egui::Color32::from_rgb(color.r, color.g, color.b);
                if ui
                    .add(egui::Button::new("").fill(fill).min_size(size))
                    .on_hover_text(*name)
                    .clicked()
                {
                    commands.extend(item.command());
                }
            }
            ToolbarItem::ColorPicker => {
                let response = egui::color_picker::color_edit_button_srgba(
                    ui,
                    picker,
                    egui::color_picker::Alpha::Opaque,
                );
                if response.changed() {
                    commands.push(Command::SetColor(Rgba::rgb(picker.r(), picker.g(), picker.b())));
                }
            }
            ToolbarItem::Menu { label, entries } => {
                ui.menu_button(*label, |ui| {
                    for (name, command) in entries {
                        if ui.button(*name).clicked() {
                            commands.push(*command);
                            ui.close_menu();
                        }
                    }
                });
            }
        }
    }
}

/// A press starts a stroke only outside the docked panels and outside any
/// floating egui area such as an open menu or the colour picker.
fn press_reaches_canvas(
    canvas_rect: egui::Rect,
    layer: Option<egui::LayerId>,
    pos: egui::Pos2,
) -> bool {
    let over_area = layer.is_some_and(|layer| layer.order != egui::Order::Background);
    canvas_rect.contains(pos) && !over_area
}

fn mouse_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Panels share the background layer; keep the canvas beneath them.
        let slot = ctx.layer_painter(egui::LayerId::background()).add(egui::Shape::Noop);

        // Toolbars and their popups go first so input sees this frame's layout.
        let commands = self.show_toolbars(ctx);
        self.handle_input(ctx);
        self.paint_canvas(ctx, slot);

        if !commands.is_empty() {
            for command in commands {
                self.dispatch(ctx, command);
            }
            ctx.request_repaint();
        }
    }
}

/// Opens the overlay on `display` and blocks until it is closed.
pub fn run_overlay(
    canvas: Canvas,
    settings: Settings,
    display: DisplayGeometry,
    transparent: bool,
) -> Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_position([display.x as f32, display.y as f32])
        .with_inner_size([display.width as f32, display.height as f32])
        .with_decorations(false)
        .with_transparent(transparent)
        .with_always_on_top()
        .with_fullscreen(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = OverlayApp::new(canvas, settings);
    eframe::run_native(APP_NAME, native_options, Box::new(move |_cc| Box::new(app)))
        .map_err(|err| anyhow!("overlay window failed: {err}"))
}
