use super::{DropZone, Route, UiAction};
use crate::browser::{file_icon, tile_tags, PreviewDetails};
use crate::upload::{NotificationLevel, UploadBoard};
use crate::utils::FileSizeUtils;
use eframe::egui::{self, Align, Align2, Color32, RichText, Stroke};
use log::warn;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "⬆",
        "Drag & Drop Upload",
        "Simply drag files into the upload zone and watch them upload \
         with real-time progress tracking.",
    ),
    (
        "👁",
        "File Preview",
        "Preview images, videos, and documents instantly without downloading them first.",
    ),
    (
        "📂",
        "Smart Organization",
        "Organize files into collections and tag them for easy searching and filtering.",
    ),
    (
        "🔗",
        "Easy Sharing",
        "Share files and collections with others using secure, customizable sharing links.",
    ),
    (
        "⬇",
        "Batch Operations",
        "Select multiple files for bulk operations like download, delete, or organize.",
    ),
    (
        "🛡",
        "Secure Storage",
        "Your files are stored securely with advanced encryption and privacy protection.",
    ),
];

impl DropZone {
    pub fn render(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();
        let board = self.orchestrator.snapshot();

        self.render_header(ctx, &mut actions);
        match self.state.route.clone() {
            Route::Home => {
                self.render_footer(ctx);
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            self.render_home(ui, &board, &mut actions);
                        });
                });
            }
            Route::NotFound(path) => self.render_not_found(ctx, &path, &mut actions),
        }
        self.render_preview(ctx);
        self.render_toasts(ctx);

        for action in actions {
            self.apply(action);
        }
    }

    fn render_header(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("☁").size(22.0).color(self.palette.primary));
                ui.label(
                    RichText::new("DropZone")
                        .size(20.0)
                        .strong()
                        .color(self.palette.primary_dark),
                );

                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    let _ = ui.button("⚙").on_hover_text("Settings");
                    let _ = ui.button("🔍 Search Files");
                    if ui
                        .button("↺ Reset demo")
                        .on_hover_text("Restore the bundled sample files")
                        .clicked()
                    {
                        actions.push(UiAction::ResetDemo);
                    }
                });
            });
            ui.add_space(8.0);
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui, board: &UploadBoard, actions: &mut Vec<UiAction>) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Effortless File Management").size(32.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Upload, organize, and share your files with our intuitive \
                     drag-and-drop interface. Track progress, preview content, \
                     and manage everything in one place.",
                )
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
        ui.add_space(24.0);

        self.render_upload_zone(ui, board, actions);
        ui.add_space(16.0);
        self.render_uploads(ui, board, actions);

        if !board.files.is_empty() {
            ui.add_space(16.0);
            self.render_browser(ui, board, actions);
        }

        if !self.state.recent_files.is_empty() || self.state.recent_loading {
            ui.add_space(32.0);
            self.render_recent_files(ui);
        }

        ui.add_space(32.0);
        self.render_features(ui);
        ui.add_space(24.0);
    }

    fn render_upload_zone(
        &self,
        ui: &mut egui::Ui,
        board: &UploadBoard,
        actions: &mut Vec<UiAction>,
    ) {
        let stroke_color = if board.drag_active {
            self.palette.primary
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        };

        egui::Frame::none()
            .stroke(Stroke::new(2.0, stroke_color))
            .rounding(12.0)
            .inner_margin(32.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let (icon, title) = if board.drag_active {
                        ("☁", "Drop files here!")
                    } else {
                        ("⬆", "Drag & drop files here")
                    };
                    ui.label(RichText::new(icon).size(40.0).color(self.palette.primary));
                    ui.add_space(8.0);
                    ui.label(RichText::new(title).size(20.0).strong());
                    ui.label(
                        RichText::new("Or click to browse and select files from your device")
                            .color(self.palette.muted),
                    );
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        let width = 320.0;
                        ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
                        let choose = egui::Button::new("📂 Choose Files")
                            .min_size(egui::vec2(150.0, 32.0));
                        if ui.add_enabled(!board.drag_active, choose).clicked() {
                            actions.push(UiAction::PickFiles);
                        }
                        let folder = egui::Button::new("📁 Choose Folder")
                            .min_size(egui::vec2(150.0, 32.0));
                        if ui.add_enabled(!board.drag_active, folder).clicked() {
                            actions.push(UiAction::PickFolder);
                        }
                    });

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        let width = 260.0;
                        ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
                        for badge in ["Images", "Documents", "Videos", "Archives"] {
                            ui.label(RichText::new(badge).small().color(self.palette.muted));
                        }
                    });
                });
            });
    }

    fn render_recent_files(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Recent Files").size(22.0).strong());
        ui.add_space(12.0);

        if self.state.recent_loading {
            ui.spinner();
            return;
        }

        egui::Grid::new("recent_files")
            .num_columns(3)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (i, file) in self.state.recent_files.iter().enumerate() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(260.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(file_icon(&file.mime_type).glyph())
                                    .size(20.0)
                                    .color(self.palette.primary),
                            );
                            ui.add(
                                egui::Label::new(RichText::new(&file.name).strong())
                                    .truncate(true),
                            );
                        });
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(FileSizeUtils::format_size(file.size))
                                    .color(self.palette.muted),
                            );
                            for tag in tile_tags(file) {
                                ui.label(RichText::new(tag).small());
                            }
                        });
                    });
                    if (i + 1) % 3 == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_features(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Powerful Features").size(26.0).strong());
            ui.label(
                RichText::new("Everything you need to manage your files efficiently and securely.")
                    .color(self.palette.muted),
            );
        });
        ui.add_space(16.0);

        egui::Grid::new("features")
            .num_columns(3)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (i, (icon, title, description)) in FEATURES.iter().enumerate() {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(260.0);
                        ui.label(RichText::new(*icon).size(24.0).color(self.palette.primary));
                        ui.label(RichText::new(*title).size(16.0).strong());
                        ui.label(*description);
                    });
                    if (i + 1) % 3 == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("☁").color(self.palette.primary));
                ui.label(RichText::new("DropZone").strong());
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new("© 2024 DropZone. Secure file management platform.")
                            .color(self.palette.muted),
                    );
                });
            });

            if let Some(error) = &self.state.error_message {
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(self.palette.error, error);
                });
            }
            ui.add_space(6.0);
        });
    }

    fn render_not_found(&self, ctx: &egui::Context, path: &str, actions: &mut Vec<UiAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.2);
                ui.label(RichText::new("☁").size(64.0).color(self.palette.primary));
                ui.label(RichText::new("404").size(56.0).strong());
                ui.label(RichText::new("Page Not Found").size(24.0));
                ui.label(
                    RichText::new(
                        "The page you're looking for doesn't exist. \
                         It might have been moved or deleted.",
                    )
                    .color(self.palette.muted),
                );
                ui.label(RichText::new(path).monospace().color(self.palette.muted));
                ui.add_space(16.0);
                if ui.button("🏠 Back to Home").clicked() {
                    actions.push(UiAction::GoHome);
                }
            });
        });
    }

    fn render_preview(&mut self, ctx: &egui::Context) {
        let Some(file) = self.state.preview.clone() else {
            return;
        };
        let details = PreviewDetails::new(&file);
        let mut open = true;

        egui::Window::new(format!("{} {}", details.icon.glyph(), details.title))
            .id(egui::Id::new("file_preview"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(560.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(ui.visuals().extreme_bg_color)
                    .rounding(8.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_min_height(300.0);
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            let texture = details
                                .thumbnail
                                .as_deref()
                                .and_then(|reference| self.thumbnails.get(reference));
                            match texture {
                                Some(texture) => {
                                    ui.add(
                                        egui::Image::new(&texture)
                                            .max_size(egui::vec2(520.0, 400.0)),
                                    );
                                }
                                None => {
                                    ui.add_space(80.0);
                                    ui.label(
                                        RichText::new(details.icon.glyph())
                                            .size(64.0)
                                            .color(self.palette.muted),
                                    );
                                    ui.label(PreviewDetails::UNAVAILABLE);
                                }
                            }
                        });
                    });

                ui.add_space(12.0);
                egui::Grid::new("preview_metadata")
                    .num_columns(4)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.strong("Size:");
                        ui.label(&details.size);
                        ui.strong("Type:");
                        ui.label(&details.mime_type);
                        ui.end_row();

                        ui.strong("Uploaded:");
                        ui.label(&details.uploaded);
                        ui.strong("Tags:");
                        ui.label(details.tags_label());
                        ui.end_row();
                    });

                let local_path = details
                    .thumbnail
                    .as_deref()
                    .and_then(|reference| reference.strip_prefix("file://"));
                if let Some(path) = local_path {
                    ui.add_space(8.0);
                    if ui.button("Open original").clicked() {
                        if let Err(e) = open::that(path) {
                            warn!("Failed to open {}: {}", path, e);
                        }
                    }
                }
            });

        if !open {
            self.state.close_preview();
        }
    }

    fn render_toasts(&self, ctx: &egui::Context) {
        if self.state.toasts.is_empty() {
            return;
        }

        egui::Area::new("toasts")
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.state.toasts {
                    let (icon, color): (&str, Color32) = match toast.notification.level {
                        NotificationLevel::Success => ("✅", self.palette.success),
                        NotificationLevel::Error => ("❌", self.palette.error),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(icon);
                            ui.colored_label(color, &toast.notification.message);
                        });
                    });
                    ui.add_space(6.0);
                }
            });
    }
}
