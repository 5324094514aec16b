use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::RESULT_DELAY;
use crate::gui::result::ResultPanel;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::wheel::{self, WheelStyle};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use rotor::{Engine, Frame, Label, ReplaceError};
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub engine: Rc<RefCell<Engine>>,
    pub style: Rc<RefCell<WheelStyle>>,
    pub wheel_size: i32,
    pub spinning: bool,
    pub notice: Option<String>,
    pub drawing_area: gtk::DrawingArea,
    pub entries: gtk::TextBuffer,
    pub result: ResultPanel,
}

#[derive(Debug)]
pub enum AppMsg {
    Spin,
    SpinFinished(Label),
    ShowResult(Label),
    SpinAgain,
    DismissResult,
    UpdateLabels,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Engine, Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Whirl"),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::DismissResult);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "overlay"]
            gtk::Overlay {
                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 24,
                    set_margin_all: 24,

                    #[name = "drawing_area"]
                    gtk::DrawingArea {
                        set_content_width: model.wheel_size,
                        set_content_height: model.wheel_size,
                        set_hexpand: true,
                        set_vexpand: true,
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 12,
                        set_width_request: 240,

                        gtk::Label {
                            set_label: "Entries, one per line",
                            set_xalign: 0.0,
                        },

                        gtk::ScrolledWindow {
                            set_vexpand: true,

                            #[name = "entries_view"]
                            gtk::TextView {
                                set_wrap_mode: gtk::WrapMode::WordChar,
                                #[watch]
                                set_editable: !model.spinning,
                            }
                        },

                        gtk::Label {
                            add_css_class: "error",
                            set_wrap: true,
                            set_xalign: 0.0,
                            #[watch]
                            set_visible: model.notice.is_some(),
                            #[watch]
                            set_label: model.notice.as_deref().unwrap_or_default(),
                        },

                        gtk::Button {
                            set_label: "Update",
                            #[watch]
                            set_sensitive: !model.spinning,
                            connect_clicked => AppMsg::UpdateLabels,
                        },

                        gtk::Button {
                            set_label: "Spin",
                            add_css_class: "suggested-action",
                            #[watch]
                            set_sensitive: !model.spinning,
                            connect_clicked => AppMsg::Spin,
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (engine, config, rx) = init;

        theme::load_css();

        let entries_text = engine.labels().to_text();

        let model = AppModel {
            engine: Rc::new(RefCell::new(engine)),
            style: Rc::new(RefCell::new(WheelStyle::from_config(&config.wheel))),
            wheel_size: config.wheel.size,
            spinning: false,
            notice: None,
            drawing_area: gtk::DrawingArea::default(),
            entries: gtk::TextBuffer::new(None),
            result: ResultPanel::new(&sender),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.entries = widgets.entries_view.buffer();
        model.entries.set_text(&entries_text);
        widgets.overlay.add_overlay(&model.result.root);

        let engine_draw = model.engine.clone();
        let style_draw = model.style.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                let engine = engine_draw.borrow();
                let style = style_draw.borrow();
                let scene = engine.scene(&style.palette);
                if let Err(e) =
                    wheel::draw(cr, &scene, &style, &colors, width as f64, height as f64)
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Spin => {
                if self.result.is_visible() || !self.engine.borrow_mut().start_spin() {
                    return;
                }
                self.spinning = !self.engine.borrow().controls_enabled();
                self.notice = None;
                self.start_frames(sender);
            }
            AppMsg::SpinFinished(winner) => {
                self.spinning = !self.engine.borrow().controls_enabled();
                self.drawing_area.queue_draw();
                glib::timeout_add_local_once(RESULT_DELAY, move || {
                    sender.input(AppMsg::ShowResult(winner));
                });
            }
            AppMsg::ShowResult(winner) => self.result.show(&winner),
            AppMsg::SpinAgain => {
                self.result.hide();
                glib::timeout_add_local_once(RESULT_DELAY, move || {
                    sender.input(AppMsg::Spin);
                });
            }
            AppMsg::DismissResult => self.result.hide(),
            AppMsg::UpdateLabels => {
                let (start, end) = self.entries.bounds();
                let text = self.entries.text(&start, &end, false);

                let mut engine = self.engine.borrow_mut();
                let outcome = engine.replace_labels(&text).map(|labels| labels.len());
                match outcome {
                    Ok(_) => self.notice = None,
                    Err(ReplaceError::Spinning) => return,
                    Err(e) => {
                        self.notice = Some(e.to_string());
                        self.entries.set_text(&engine.labels().to_text());
                    }
                }
                drop(engine);
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    *self.style.borrow_mut() = WheelStyle::from_config(&new_config.wheel);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    /// Advances the engine once per frame-clock tick until the wheel rests.
    fn start_frames(&self, sender: ComponentSender<Self>) {
        let engine = self.engine.clone();
        self.drawing_area.add_tick_callback(move |drawing_area, _| {
            let frame = engine.borrow_mut().advance_frame();
            drawing_area.queue_draw();
            match frame {
                Frame::Spinning => glib::ControlFlow::Continue,
                Frame::Stopped(winner) => {
                    sender.input(AppMsg::SpinFinished(winner));
                    glib::ControlFlow::Break
                }
                Frame::Idle => glib::ControlFlow::Break,
            }
        });
    }
}
