//! App module - egui shell around the catalog core
//!
//! Three panes like the original page: item list on the left, image
//! gallery in the middle, name/categories/description on the right. All
//! state transitions go through the [`SelectionController`]; this module
//! only paints payloads and forwards clicks.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;

use curio_catalog::{
    load_ui_strings_or_empty, CatalogStore, Language, SelectionController, UiStrings,
};

use crate::settings::AppSettings;

// 與原版一致的載入失敗提示
const LOAD_FAILED_NOTICE: &str = "無法載入資料，請檢查檔案路徑。";

/// Display payload snapshot for one frame, owned so the controller stays
/// free for the click handlers below.
#[derive(Default)]
struct FramePayload {
    primary_name: Option<String>,
    translated_name: String,
    description: Option<String>,
    categories: Vec<String>,
    images: Vec<String>,
}

pub struct CurioApp {
    controller: SelectionController,
    ui_strings: UiStrings,
    settings: AppSettings,

    search_input: String,
    /// Both catalog loads failed; show the failure notice instead of a
    /// description.
    load_failed: bool,

    /// Decoded gallery textures by image path. `None` marks a file that
    /// failed to decode so it is not retried every frame.
    textures: HashMap<String, Option<egui::TextureHandle>>,

    show_settings: bool,
    temp_data_dir: String,
    temp_language: Language,
}

impl CurioApp {
    pub fn new() -> Self {
        let settings = AppSettings::load();
        let mut app = Self {
            controller: SelectionController::new(CatalogStore::default(), settings.startup_language),
            ui_strings: UiStrings::empty(),
            temp_data_dir: settings.data_dir.to_string_lossy().into_owned(),
            temp_language: settings.startup_language,
            settings,
            search_input: String::new(),
            load_failed: false,
            textures: HashMap::new(),
            show_settings: false,
        };
        app.reload_data();
        app
    }

    /// (Re)load both catalogs and the UI strings, then reset the session
    /// with the first item selected.
    fn reload_data(&mut self) {
        let lang = self.settings.startup_language;
        let (store, errors) = CatalogStore::load_pair(&self.settings.data_dir);
        self.load_failed = store.is_empty() && !errors.is_empty();

        self.controller = SelectionController::new(store, lang);
        self.ui_strings = load_ui_strings_or_empty(&self.settings.data_dir, lang);
        self.controller.select_first();

        self.search_input.clear();
        self.textures.clear();
    }

    /// Switch language through the controller and refetch that language's
    /// UI strings, as the original page does on every switch.
    fn apply_language(&mut self, lang: Language) {
        if lang == self.controller.active_language() {
            return;
        }
        self.controller.set_language(lang);
        self.ui_strings = load_ui_strings_or_empty(&self.settings.data_dir, lang);
    }

    fn frame_payload(&self) -> FramePayload {
        let payload = self.controller.payload();
        FramePayload {
            primary_name: payload.primary_name.map(str::to_owned),
            translated_name: payload.translated_name.to_owned(),
            description: payload.description.map(str::to_owned),
            categories: payload.categories.to_vec(),
            images: payload.images.to_vec(),
        }
    }

    fn texture_for(&mut self, ctx: &egui::Context, image_path: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.get(image_path) {
            return cached.clone();
        }
        let loaded = load_texture(ctx, &self.settings.data_dir, image_path);
        if loaded.is_none() {
            eprintln!("Warning: could not load image '{}'", image_path);
        }
        self.textures.insert(image_path.to_owned(), loaded.clone());
        loaded
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(title) = self.ui_strings.get("navTitle") {
                    ui.heading(title);
                }
                if let Some(author) = self.ui_strings.get("authorName") {
                    ui.label(author);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").clicked() {
                        self.show_settings = true;
                        self.temp_data_dir =
                            self.settings.data_dir.to_string_lossy().into_owned();
                        self.temp_language = self.settings.startup_language;
                    }

                    let mut selected = self.controller.active_language();
                    if let Some(label) = self.ui_strings.get("languageLabel") {
                        ui.label(label);
                    }
                    egui::ComboBox::from_id_salt("language_select")
                        .selected_text(selected.as_str())
                        .show_ui(ui, |ui| {
                            for lang in Language::ALL {
                                ui.selectable_value(&mut selected, lang, lang.as_str());
                            }
                        });
                    if selected != self.controller.active_language() {
                        self.apply_language(selected);
                    }
                });
            });
        });
    }

    fn item_list(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("item_list").min_width(180.0).show(ctx, |ui| {
            if let Some(title) = self.ui_strings.get("pageTitle") {
                ui.heading(title);
                ui.separator();
            }

            let hint = self.ui_strings.get_or_blank("searchPlaceholder").to_owned();
            let response =
                ui.add(egui::TextEdit::singleline(&mut self.search_input).hint_text(hint));
            if response.changed() {
                let term = self.search_input.clone();
                self.controller.set_search_term(term);
            }
            ui.separator();

            let mut clicked_key: Option<String> = None;
            let selected_key = self.controller.selected_key().map(str::to_owned);
            let visible = self.controller.visible_items();

            if visible.is_empty() {
                if let Some(text) = self.ui_strings.get("noResults") {
                    ui.weak(text);
                }
            }

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for (key, item) in visible {
                    let is_selected = selected_key.as_deref() == Some(key);
                    if ui.selectable_label(is_selected, &item.name).clicked() {
                        clicked_key = Some(key.to_owned());
                    }
                }
            });

            if let Some(key) = clicked_key {
                self.controller.select_item(key);
            }
        });
    }

    fn info_panel(&mut self, ctx: &egui::Context, payload: &FramePayload) {
        egui::SidePanel::right("info_panel").min_width(220.0).show(ctx, |ui| {
            // Translated name doubles as the language toggle; ignored when
            // the opposite catalog lacks the key.
            if self.controller.selected_key().is_some() {
                let name_display = egui::Label::new(
                    egui::RichText::new(&payload.translated_name).heading(),
                )
                .sense(egui::Sense::click());
                if ui.add(name_display).on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
                {
                    if self.controller.toggle_language().is_some() {
                        let lang = self.controller.active_language();
                        self.ui_strings =
                            load_ui_strings_or_empty(&self.settings.data_dir, lang);
                    }
                }
                if let Some(primary) = &payload.primary_name {
                    ui.weak(primary);
                }
                ui.separator();
            }

            if let Some(title) = self.ui_strings.get("categoryTitle") {
                ui.strong(title);
            }
            if payload.categories.is_empty() {
                if let Some(placeholder) = self.ui_strings.get("categoryPlaceholder") {
                    ui.weak(placeholder);
                }
            } else {
                let mut clicked_category: Option<String> = None;
                ui.horizontal_wrapped(|ui| {
                    for category in &payload.categories {
                        if ui.small_button(category).clicked() {
                            clicked_category = Some(category.clone());
                        }
                    }
                });
                // tag click becomes a search, selection untouched
                if let Some(category) = clicked_category {
                    self.search_input = category.clone();
                    self.controller.set_search_term(category);
                }
            }

            ui.separator();
            if let Some(title) = self.ui_strings.get("descriptionTitle") {
                ui.strong(title);
            }
            if self.load_failed {
                ui.colored_label(egui::Color32::LIGHT_RED, LOAD_FAILED_NOTICE);
            } else if let Some(description) = &payload.description {
                ui.label(description);
            } else if let Some(placeholder) =
                self.ui_strings.get("itemDescriptionPlaceholder")
            {
                ui.weak(placeholder);
            }
        });
    }

    fn gallery(&mut self, ctx: &egui::Context, payload: &FramePayload) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if payload.images.is_empty() {
                // 與原版一致：有選取但無圖片時整個畫廊留白
                if self.controller.selected_key().is_none() {
                    if let Some(placeholder) = self.ui_strings.get("imagePlaceholder") {
                        ui.centered_and_justified(|ui| {
                            ui.weak(placeholder);
                        });
                    }
                }
                return;
            }

            let images = payload.images.clone();
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for image_path in &images {
                    if let Some(texture) = self.texture_for(ctx, image_path) {
                        ui.add(
                            egui::Image::new(&texture)
                                .max_width(ui.available_width())
                                .rounding(4.0),
                        );
                        ui.add_space(8.0);
                    }
                }
            });
        });
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }
        let mut open = true;
        let mut apply = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Data folder:");
                    ui.text_edit_singleline(&mut self.temp_data_dir);
                    if ui.button("...").clicked() {
                        if let Some(folder) = rfd::FileDialog::new().pick_folder() {
                            self.temp_data_dir = folder.to_string_lossy().into_owned();
                        }
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Startup language:");
                    egui::ComboBox::from_id_salt("startup_language")
                        .selected_text(self.temp_language.as_str())
                        .show_ui(ui, |ui| {
                            for lang in Language::ALL {
                                ui.selectable_value(&mut self.temp_language, lang, lang.as_str());
                            }
                        });
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        apply = true;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_settings = false;
                    }
                });
            });

        if apply {
            self.settings.data_dir = PathBuf::from(self.temp_data_dir.trim());
            self.settings.startup_language = self.temp_language;
            if let Err(err) = self.settings.save() {
                eprintln!("Warning: failed to save settings: {err:#}");
            }
            self.reload_data();
            self.show_settings = false;
        }
        if !open {
            self.show_settings = false;
        }
    }
}

impl eframe::App for CurioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let payload = self.frame_payload();

        self.top_bar(ctx);
        self.item_list(ctx);
        self.info_panel(ctx, &payload);
        self.gallery(ctx, &payload);
        self.settings_window(ctx);
    }
}

fn load_texture(
    ctx: &egui::Context,
    data_dir: &Path,
    image_path: &str,
) -> Option<egui::TextureHandle> {
    let path = data_dir.join(image_path);
    let decoded = image::open(&path).ok()?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Some(ctx.load_texture(image_path, color_image, egui::TextureOptions::LINEAR))
}
