// Application state and the per-frame dispatch. Screens live in the app/
// submodules; reusable cards and widgets in views/.

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use eframe::egui::{self, RichText};
use eframe::App;

use crate::app::simulate::SimMsg;
use crate::app::state::{DetailState, DirectoryState, Page};
use crate::catalog;
use crate::gallery::GalleryController;
use crate::localization::translate;
use crate::types::ToastKind;
use crate::ui_constants::revert;
use crate::views::ui_helpers::{self, Toast};
use crate::views::widgets::SlideCache;

mod checkin_screen;
mod detail_screen;
mod directory_screen;
mod forum_screen;
mod logs_ui;
mod profile_screen;
pub mod settings;
pub mod simulate;
pub mod state;

pub struct EncontreiApp {
    page: Page,
    directory: DirectoryState,
    detail: Option<DetailState>,
    checkin: state::CheckinState,
    forum: state::ForumState,
    composer: state::ComposerState,
    profile: state::ProfileState,
    slides: SlideCache,
    toasts: Vec<Toast>,
    tx: mpsc::Sender<SimMsg>,
    rx: mpsc::Receiver<SimMsg>,
}

impl Default for EncontreiApp {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            page: Page::Directory,
            directory: DirectoryState::default(),
            detail: None,
            checkin: state::CheckinState::default(),
            forum: state::ForumState::default(),
            composer: state::ComposerState::default(),
            profile: state::ProfileState::default(),
            slides: HashMap::new(),
            toasts: Vec::new(),
            tx,
            rx,
        }
    }
}

impl App for EncontreiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        self.poll_sim(ctx);
        self.tick_deadlines(ctx);

        // The gallery honors keys only while its page is the visible one.
        if let Some(detail) = &mut self.detail {
            detail.gallery.set_focused(self.page == Page::Detail);
        }

        self.draw_top_bar(ctx);

        match self.page {
            Page::Directory => directory_screen::update(self, ctx),
            Page::Detail => detail_screen::update(self, ctx),
            Page::Checkin => checkin_screen::update(self, ctx),
            Page::Forum => forum_screen::update(self, ctx),
            Page::Profile => profile_screen::update(self, ctx),
        }

        ui_helpers::draw_toasts(ctx, &mut self.toasts);
        logs_ui::draw_logs_viewport(ctx);
        settings::draw_settings_viewport(ctx);
    }
}

impl EncontreiApp {
    pub(crate) fn toast(&mut self, kind: ToastKind, text: String) {
        log::debug!("toast [{kind:?}]: {text}");
        self.toasts.push(Toast::new(text, kind));
    }

    /// Open a partner detail page with a fresh gallery controller wired to
    /// the repaint boundary.
    fn open_detail(&mut self, ctx: &egui::Context, partner_id: u32) {
        let Some(partner) = catalog::partner(partner_id) else {
            log::warn!("unknown partner id {partner_id}");
            return;
        };
        let ctx2 = ctx.clone();
        let gallery = GalleryController::new(partner.photo_count, move |i| {
            log::debug!("gallery shows slide {i}");
            ctx2.request_repaint();
        });
        self.detail = Some(DetailState::new(partner_id, gallery));
        self.page = Page::Detail;
    }

    fn poll_sim(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                SimMsg::QrScanned { code } => {
                    self.checkin.scanning = false;
                    self.checkin.book_id = code;
                }
                SimMsg::LocationResolved { address } => {
                    self.checkin.locating = false;
                    self.checkin.location = address;
                    self.toast(ToastKind::Success, translate("checkin-location-found"));
                }
                SimMsg::CheckinAccepted(receipt) => {
                    self.checkin.submitting = false;
                    self.checkin.receipt = Some(receipt);
                    self.checkin.reset_due =
                        Some(Instant::now() + Duration::from_millis(revert::CHECKIN_FORM_MS));
                    self.toast(ToastKind::Success, translate("checkin-success"));
                }
                SimMsg::PostPublished(receipt) => {
                    self.composer.publishing = false;
                    self.composer.receipt = Some(receipt);
                    self.composer.title.clear();
                    self.composer.category = None;
                    self.composer.content.clear();
                }
            }
            ctx.request_repaint();
        }
    }

    /// Walk every wall-clock deadline and schedule a wake-up for the
    /// nearest one still pending.
    fn tick_deadlines(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let mut pending: Vec<Instant> = Vec::new();

        // Directory CTA opening its detail page
        if let Some((id, due)) = self.directory.opening {
            if now >= due {
                self.directory.opening = None;
                self.open_detail(ctx, id);
            } else {
                pending.push(due);
            }
        }

        // Timed buttons on the detail page
        if let Some(detail) = &mut self.detail {
            let mut changed = detail.checkin_widget.tick(now);
            for button in detail.reservations.values_mut() {
                changed |= button.tick(now);
            }
            if changed {
                ctx.request_repaint();
            }
            pending.extend(detail.checkin_widget.next_deadline());
            pending.extend(detail.reservations.values().filter_map(|b| b.next_deadline()));
        }

        // Check-in form reset after the success modal
        if let Some(due) = self.checkin.reset_due {
            if now >= due {
                self.checkin.reset_due = None;
                self.checkin.reset_form();
                ctx.request_repaint();
            } else {
                pending.push(due);
            }
        }

        // Profile save button
        if self.profile.save.tick(now) {
            ctx.request_repaint();
        }
        pending.extend(self.profile.save.next_deadline());

        if let Some(due) = pending.into_iter().min() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("topbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Encontrei")
                        .heading()
                        .strong()
                        .color(crate::views::ACCENT),
                );
                ui.separator();
                for (page, key) in [
                    (Page::Directory, "nav-directory"),
                    (Page::Checkin, "nav-checkin"),
                    (Page::Forum, "nav-forum"),
                    (Page::Profile, "nav-profile"),
                ] {
                    let active = self.page == page
                        || (page == Page::Directory && self.page == Page::Detail);
                    if ui.selectable_label(active, translate(key)).clicked() {
                        self.page = page;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(translate("nav-settings")).clicked() {
                        settings::open_settings();
                        ui.ctx().request_repaint();
                    }
                    if ui.button(translate("nav-logs")).clicked() {
                        logs_ui::open_logs();
                        ui.ctx().request_repaint();
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}
