use super::{DropZone, UiAction};
use crate::browser::{file_icon, sorted_view, tile_tags, SortBy, ViewMode};
use crate::models::{FileRecord, UploadRecord, UploadStatus};
use crate::upload::UploadBoard;
use crate::utils::FileSizeUtils;
use eframe::egui::{self, Align, RichText, Sense, Stroke};

const TILE_WIDTH: f32 = 200.0;
const TILE_PREVIEW_HEIGHT: f32 = 130.0;

impl DropZone {
    pub(crate) fn render_uploads(
        &self,
        ui: &mut egui::Ui,
        board: &UploadBoard,
        actions: &mut Vec<UiAction>,
    ) {
        if board.uploads.is_empty() {
            return;
        }

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Uploads").size(18.0).strong());
            ui.add_space(6.0);
            for upload in &board.uploads {
                self.render_upload_row(ui, upload, actions);
                ui.add_space(8.0);
            }
        });
    }

    fn render_upload_row(
        &self,
        ui: &mut egui::Ui,
        upload: &UploadRecord,
        actions: &mut Vec<UiAction>,
    ) {
        ui.horizontal(|ui| {
            let (icon, color) = match upload.status {
                UploadStatus::Uploading => ("⬆", self.palette.primary),
                UploadStatus::Completed => ("✅", self.palette.success),
                UploadStatus::Error => ("❌", self.palette.error),
            };
            ui.colored_label(color, icon);
            ui.add(egui::Label::new(RichText::new(&upload.file_name).strong()).truncate(true));

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                match upload.status {
                    UploadStatus::Uploading => {
                        ui.label(
                            RichText::new(format!("{:.1} MB/s", upload.speed))
                                .color(self.palette.muted),
                        );
                    }
                    UploadStatus::Completed => {
                        ui.colored_label(self.palette.success, "Done");
                    }
                    UploadStatus::Error => {
                        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                            actions.push(UiAction::DismissUpload(upload.id.clone()));
                        }
                        ui.colored_label(self.palette.error, "Failed");
                    }
                }
            });
        });

        let fill = match upload.status {
            UploadStatus::Error => self.palette.error,
            UploadStatus::Completed => self.palette.success,
            UploadStatus::Uploading => self.palette.primary,
        };
        let bar = egui::ProgressBar::new(upload.progress / 100.0)
            .show_percentage()
            .animate(upload.status == UploadStatus::Uploading)
            .fill(fill);
        ui.add(bar);
    }

    pub(crate) fn render_browser(
        &mut self,
        ui: &mut egui::Ui,
        board: &UploadBoard,
        actions: &mut Vec<UiAction>,
    ) {
        self.render_toolbar(ui, board, actions);
        ui.add_space(12.0);

        let files = sorted_view(&board.files, self.state.sort_by);
        match self.state.view_mode {
            ViewMode::Grid => self.render_grid(ui, &files, board, actions),
            ViewMode::List => {
                for file in &files {
                    self.render_list_row(ui, file, board.is_selected(&file.id), actions);
                    ui.add_space(4.0);
                }
            }
        }
    }

    fn render_toolbar(
        &mut self,
        ui: &mut egui::Ui,
        board: &UploadBoard,
        actions: &mut Vec<UiAction>,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Your Files").size(22.0).strong());
            ui.label(RichText::new(format!("({})", board.files.len())).color(self.palette.muted));

            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                ui.selectable_value(&mut self.state.view_mode, ViewMode::List, "☰ List");
                ui.selectable_value(&mut self.state.view_mode, ViewMode::Grid, "▦ Grid");

                egui::ComboBox::from_id_source("sort_by")
                    .selected_text(self.state.sort_by.label())
                    .show_ui(ui, |ui| {
                        for sort in SortBy::ALL {
                            ui.selectable_value(&mut self.state.sort_by, sort, sort.label());
                        }
                    });

                if !board.selected.is_empty() {
                    let delete =
                        egui::Button::new(RichText::new("🗑 Delete").color(egui::Color32::WHITE))
                            .fill(self.palette.error);
                    if ui.add(delete).clicked() {
                        actions.push(UiAction::DeleteSelected);
                    }
                    ui.label(format!("{} selected", board.selected.len()));
                }
            });
        });
    }

    fn render_grid(
        &mut self,
        ui: &mut egui::Ui,
        files: &[FileRecord],
        board: &UploadBoard,
        actions: &mut Vec<UiAction>,
    ) {
        let spacing = 12.0;
        let per_row = ((ui.available_width() + spacing) / (TILE_WIDTH + 20.0 + spacing))
            .floor()
            .max(1.0) as usize;

        egui::Grid::new("file_grid")
            .num_columns(per_row)
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for (i, file) in files.iter().enumerate() {
                    self.render_tile(ui, file, board.is_selected(&file.id), actions);
                    if (i + 1) % per_row == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_tile(
        &mut self,
        ui: &mut egui::Ui,
        file: &FileRecord,
        selected: bool,
        actions: &mut Vec<UiAction>,
    ) {
        let (fill, stroke) = if selected {
            (self.palette.selected_fill, Stroke::new(2.0, self.palette.primary))
        } else {
            (
                ui.visuals().faint_bg_color,
                ui.visuals().widgets.noninteractive.bg_stroke,
            )
        };
        let mut control_clicked = false;

        let response = egui::Frame::none()
            .fill(fill)
            .stroke(stroke)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(TILE_WIDTH);
                let hovered = ui.ui_contains_pointer();

                let texture = file
                    .thumbnail
                    .as_deref()
                    .and_then(|reference| self.thumbnails.get(reference));
                ui.allocate_ui(egui::vec2(TILE_WIDTH, TILE_PREVIEW_HEIGHT), |ui| {
                    ui.centered_and_justified(|ui| match texture {
                        Some(texture) => {
                            ui.add(
                                egui::Image::new(&texture)
                                    .max_size(egui::vec2(TILE_WIDTH, TILE_PREVIEW_HEIGHT))
                                    .rounding(6.0),
                            );
                        }
                        None => {
                            ui.label(
                                RichText::new(file_icon(&file.mime_type).glyph())
                                    .size(48.0)
                                    .color(self.palette.primary),
                            );
                        }
                    });
                });

                ui.add(egui::Label::new(RichText::new(&file.name).strong()).truncate(true))
                    .on_hover_text(&file.name);
                ui.label(
                    RichText::new(FileSizeUtils::format_size(file.size)).color(self.palette.muted),
                );
                self.render_tags(ui, tile_tags(file));

                ui.horizontal(|ui| {
                    let visible = hovered || selected;
                    let check = if selected { "☑" } else { "☐" };
                    if ui
                        .add_visible(visible, egui::Button::new(check).small())
                        .on_hover_text("Select")
                        .clicked()
                    {
                        control_clicked = true;
                        actions.push(UiAction::ToggleSelection(file.id.clone()));
                    }
                    if ui
                        .add_visible(visible, egui::Button::new("👁").small())
                        .on_hover_text("Preview")
                        .clicked()
                    {
                        control_clicked = true;
                        actions.push(UiAction::Preview(file.clone()));
                    }
                });
            })
            .response
            .interact(Sense::click());

        if response.clicked() && !control_clicked {
            actions.push(UiAction::Preview(file.clone()));
        }
    }

    fn render_list_row(
        &self,
        ui: &mut egui::Ui,
        file: &FileRecord,
        selected: bool,
        actions: &mut Vec<UiAction>,
    ) {
        let fill = if selected {
            self.palette.selected_fill
        } else {
            ui.visuals().faint_bg_color
        };
        let mut control_clicked = false;

        let response = egui::Frame::none()
            .fill(fill)
            .rounding(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let check = if selected { "☑" } else { "☐" };
                    if ui.small_button(check).clicked() {
                        control_clicked = true;
                        actions.push(UiAction::ToggleSelection(file.id.clone()));
                    }
                    ui.label(
                        RichText::new(file_icon(&file.mime_type).glyph())
                            .size(20.0)
                            .color(self.palette.primary),
                    );
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&file.name).strong());
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(FileSizeUtils::format_size(file.size))
                                    .color(self.palette.muted),
                            );
                            ui.label(
                                RichText::new(file.upload_date.format("%Y-%m-%d").to_string())
                                    .color(self.palette.muted),
                            );
                        });
                    });

                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("👁").on_hover_text("Preview").clicked() {
                            control_clicked = true;
                            actions.push(UiAction::Preview(file.clone()));
                        }
                        self.render_tags(ui, tile_tags(file));
                    });
                });
            })
            .response
            .interact(Sense::click());

        if response.clicked() && !control_clicked {
            actions.push(UiAction::Preview(file.clone()));
        }
    }

    fn render_tags(&self, ui: &mut egui::Ui, tags: &[String]) {
        if tags.is_empty() {
            return;
        }
        ui.horizontal(|ui| {
            for tag in tags {
                ui.label(
                    RichText::new(tag)
                        .small()
                        .color(self.palette.primary_dark)
                        .background_color(self.palette.selected_fill),
                );
            }
        });
    }
}
