//! Presentation logic for the file browser, kept free of any egui types.

use crate::models::FileRecord;
use crate::utils::file_size::FileSizeUtils;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Date,
    Name,
    Size,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Date, SortBy::Name, SortBy::Size];

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Date => "Sort by Date",
            SortBy::Name => "Sort by Name",
            SortBy::Size => "Sort by Size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Returns a freshly ordered copy of `files`; the input is never reordered.
///
/// Dates and sizes sort newest/largest first, names alphabetically. Equal
/// keys keep their input order.
pub fn sorted_view(files: &[FileRecord], sort_by: SortBy) -> Vec<FileRecord> {
    let mut view = files.to_vec();
    view.sort_by(|a, b| compare(a, b, sort_by));
    view
}

fn compare(a: &FileRecord, b: &FileRecord, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Date => b.upload_date.cmp(&a.upload_date),
        SortBy::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        SortBy::Size => b.size.cmp(&a.size),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Video,
    Music,
    FileText,
    Table,
    Archive,
    File,
}

impl FileIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            FileIcon::Image => "🖼",
            FileIcon::Video => "🎞",
            FileIcon::Music => "🎵",
            FileIcon::FileText => "📄",
            FileIcon::Table => "📊",
            FileIcon::Archive => "📦",
            FileIcon::File => "📃",
        }
    }
}

pub fn file_icon(mime_type: &str) -> FileIcon {
    let has = |needle: &str| mime_type.contains(needle);
    if has("image") {
        FileIcon::Image
    } else if has("video") {
        FileIcon::Video
    } else if has("audio") {
        FileIcon::Music
    } else if has("spreadsheet") || has("excel") {
        // Spreadsheet MIME types also contain "document".
        FileIcon::Table
    } else if has("pdf") || has("document") || has("word") {
        FileIcon::FileText
    } else if has("zip") || has("archive") {
        FileIcon::Archive
    } else {
        FileIcon::File
    }
}

/// Tiles only show this many tags.
pub const TILE_TAGS: usize = 2;

pub fn tile_tags(file: &FileRecord) -> &[String] {
    &file.tags[..file.tags.len().min(TILE_TAGS)]
}

/// The metadata block of the preview dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDetails {
    pub title: String,
    pub icon: FileIcon,
    pub size: String,
    pub mime_type: String,
    pub uploaded: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
}

impl PreviewDetails {
    pub const UNAVAILABLE: &'static str = "Preview not available for this file type";

    pub fn new(file: &FileRecord) -> Self {
        Self {
            title: file.name.clone(),
            icon: file_icon(&file.mime_type),
            size: FileSizeUtils::format_size(file.size),
            mime_type: if file.mime_type.is_empty() {
                "Unknown".to_string()
            } else {
                file.mime_type.clone()
            },
            uploaded: file.upload_date.format("%Y-%m-%d").to_string(),
            tags: file.tags.clone(),
            thumbnail: file.thumbnail.clone(),
        }
    }

    pub fn tags_label(&self) -> String {
        if self.tags.is_empty() {
            "None".to_string()
        } else {
            self.tags.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn file(id: &str, name: &str, size: u64, day: u32) -> FileRecord {
        let date = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            size,
            mime_type: "text/plain".to_string(),
            tags: Vec::new(),
            thumbnail: None,
            upload_date: date,
            last_modified: date,
        }
    }

    fn ids(files: &[FileRecord]) -> Vec<&str> {
        files.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn size_sort_is_strictly_descending() {
        let files = vec![file("a", "a", 10, 1), file("b", "b", 30, 2), file("c", "c", 20, 3)];
        assert_eq!(ids(&sorted_view(&files, SortBy::Size)), vec!["b", "c", "a"]);
    }

    #[test]
    fn name_sort_is_alphabetical_ignoring_case() {
        let files = vec![
            file("1", "zebra.txt", 1, 1),
            file("2", "Apple.txt", 1, 1),
            file("3", "mango.txt", 1, 1),
        ];
        assert_eq!(ids(&sorted_view(&files, SortBy::Name)), vec!["2", "3", "1"]);
    }

    #[test]
    fn date_sort_puts_newest_first() {
        let files = vec![file("old", "a", 1, 1), file("new", "b", 1, 20), file("mid", "c", 1, 10)];
        assert_eq!(ids(&sorted_view(&files, SortBy::Date)), vec!["new", "mid", "old"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let files = vec![file("x", "x", 5, 1), file("y", "y", 5, 1), file("z", "z", 9, 1)];
        assert_eq!(ids(&sorted_view(&files, SortBy::Size)), vec!["z", "x", "y"]);
        assert_eq!(ids(&sorted_view(&files, SortBy::Date)), vec!["x", "y", "z"]);
    }

    #[test]
    fn sorting_leaves_the_source_untouched() {
        let files = vec![file("a", "a", 10, 1), file("b", "b", 30, 2)];
        let before = files.clone();
        let _ = sorted_view(&files, SortBy::Size);
        assert_eq!(files, before);
    }

    #[test]
    fn icons_follow_mime_families() {
        assert_eq!(file_icon("image/png"), FileIcon::Image);
        assert_eq!(file_icon("video/mp4"), FileIcon::Video);
        assert_eq!(file_icon("audio/mpeg"), FileIcon::Music);
        assert_eq!(file_icon("application/pdf"), FileIcon::FileText);
        assert_eq!(
            file_icon("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            FileIcon::Table
        );
        assert_eq!(file_icon("application/zip"), FileIcon::Archive);
        assert_eq!(file_icon(""), FileIcon::File);
    }

    #[test]
    fn preview_details_fill_placeholders() {
        let mut record = file("x", "blob", 0, 5);
        record.mime_type.clear();
        let details = PreviewDetails::new(&record);
        assert_eq!(details.mime_type, "Unknown");
        assert_eq!(details.tags_label(), "None");
        assert_eq!(details.size, "0 Bytes");
        assert_eq!(details.uploaded, "2024-01-05");
    }

    #[test]
    fn tiles_show_at_most_two_tags() {
        let mut record = file("x", "x", 1, 1);
        record.tags = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(tile_tags(&record).to_vec(), vec!["a", "b"]);
    }
}
