//! App module - renderer state and lifecycle
//!
//! The renderer owns the catalog engine, the shared load status written by
//! the loader task, and view-only state (covers, toast, scroll, transitions).

mod covers;
mod library;
mod overlay;
mod pages;
mod toast;

use crate::catalog::Catalog;
use crate::loader;
use crate::settings::{self, Settings};
use crate::theme;
use crate::types::{LoadStatus, View, ZineRecord};
use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) catalog: Catalog,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    // Record feed
    pub(crate) load_status: Arc<Mutex<LoadStatus>>,
    pub(crate) load_error: Option<String>,
    pub(crate) cancel_token: Option<CancellationToken>,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Cover images
    pub(crate) http: reqwest::Client,
    pub(crate) cache_dir: PathBuf,
    pub(crate) cover_cache: HashMap<String, Option<egui::TextureHandle>>,
    pub(crate) covers_requested: HashSet<String>,
    pub(crate) cover_failures: Arc<Mutex<HashSet<String>>>,
    pub(crate) cover_semaphore: Arc<tokio::sync::Semaphore>,
    // View state
    pub(crate) view: View,
    pub(crate) scroll_to_top: bool,
    pub(crate) overlay_shown: Option<(String, f64)>,
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let cache_dir = settings::cache_dir();
        std::fs::create_dir_all(cache_dir.join("covers")).ok();

        let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");

        let mut app = Self {
            catalog: Catalog::new(settings.excluded_subjects.clone()),
            settings,
            data_dir,
            load_status: Arc::new(Mutex::new(LoadStatus::Idle)),
            load_error: None,
            cancel_token: None,
            runtime,
            http: reqwest::Client::new(),
            cache_dir,
            cover_cache: HashMap::new(),
            covers_requested: HashSet::new(),
            cover_failures: Arc::new(Mutex::new(HashSet::new())),
            cover_semaphore: Arc::new(tokio::sync::Semaphore::new(
                crate::constants::COVER_FETCH_CONCURRENCY,
            )),
            view: View::default(),
            scroll_to_top: false,
            overlay_shown: None,
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
        };

        app.start_load(&cc.egui_ctx);
        app
    }

    /// Start (or restart) the record fetch. Any in-flight request is aborted.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if let Some(previous) = self.cancel_token.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());

        loader::spawn_load(
            &self.runtime,
            self.settings.endpoint.clone(),
            self.settings.token.clone(),
            self.load_status.clone(),
            token,
            ctx.clone(),
        );
    }

    /// Move a finished load from the shared status into the catalog.
    pub fn poll_load(&mut self) {
        let finished = {
            let mut status = self.load_status.lock().unwrap_or_else(|e| e.into_inner());
            match &*status {
                LoadStatus::Loaded(_) | LoadStatus::Failed(_) => std::mem::take(&mut *status),
                LoadStatus::Idle | LoadStatus::Loading => return,
            }
        };

        match finished {
            LoadStatus::Loaded(records) => {
                self.load_error = None;
                self.catalog.set_records(records);
            }
            LoadStatus::Failed(msg) => self.load_error = Some(msg),
            LoadStatus::Idle | LoadStatus::Loading => {}
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            *self.load_status.lock().unwrap_or_else(|e| e.into_inner()),
            LoadStatus::Loading
        )
    }

    /// Abort any in-flight request; the view is going away.
    pub fn shutdown(&mut self) {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }

    pub fn show_toast(&mut self, msg: impl Into<String>) {
        self.toast_message = Some(msg.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    /// "Read Zine": open the document in the system browser, or tell the
    /// user there is none.
    pub fn read_zine(&mut self, record: &ZineRecord) {
        let Some(link) = record.pdf_link() else {
            self.show_toast("No PDF link available.");
            return;
        };
        info!(identifier = %record.identifier, link, "Opening zine document");
        if let Err(e) = open::that(link) {
            warn!(error = %e, link, "Failed to open zine document");
            self.show_toast("Could not open the zine in a browser.");
        }
    }
}
