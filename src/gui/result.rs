use crate::gui::app::{AppModel, AppMsg};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::ComponentSender;
use rotor::Label;

/// Overlay announcing the winner. Dismissed by its close button or a click
/// on the dimmed backdrop around the card.
pub struct ResultPanel {
    pub root: gtk::Box,
    winner: gtk::Label,
}

impl ResultPanel {
    pub fn new(sender: &ComponentSender<AppModel>) -> Self {
        let title = gtk::Label::new(Some("The wheel has chosen"));

        let winner = gtk::Label::new(None);
        winner.add_css_class("whirl-winner");
        winner.set_wrap(true);

        let spin_again = gtk::Button::with_label("Spin again");
        spin_again.add_css_class("suggested-action");
        let close = gtk::Button::with_label("Close");

        let buttons = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        buttons.set_halign(gtk::Align::Center);
        buttons.append(&close);
        buttons.append(&spin_again);

        let card = gtk::Box::new(gtk::Orientation::Vertical, 16);
        card.add_css_class("whirl-result-card");
        card.set_halign(gtk::Align::Center);
        card.set_valign(gtk::Align::Center);
        card.set_hexpand(true);
        card.set_vexpand(true);
        card.append(&title);
        card.append(&winner);
        card.append(&buttons);

        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.add_css_class("whirl-backdrop");
        root.set_visible(false);
        root.append(&card);

        {
            let sender = sender.clone();
            spin_again.connect_clicked(move |_| sender.input(AppMsg::SpinAgain));
        }
        {
            let sender = sender.clone();
            close.connect_clicked(move |_| sender.input(AppMsg::DismissResult));
        }

        let click = gtk::GestureClick::new();
        {
            let sender = sender.clone();
            let backdrop = root.clone();
            click.connect_released(move |_, _, x, y| {
                let outside = backdrop
                    .pick(x, y, gtk::PickFlags::DEFAULT)
                    .is_some_and(|w| &w == backdrop.upcast_ref::<gtk::Widget>());
                if outside {
                    sender.input(AppMsg::DismissResult);
                }
            });
        }
        root.add_controller(click);

        Self { root, winner }
    }

    pub fn show(&self, winner: &Label) {
        self.winner.set_label(winner);
        self.root.set_visible(true);
    }

    pub fn hide(&self) {
        self.root.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.root.is_visible()
    }
}
