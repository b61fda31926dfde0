/// MIME type for a file name, guessed from its extension.
pub fn for_name(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(for_name("Holiday.JPG"), "image/jpeg");
        assert_eq!(for_name("report.PDF"), "application/pdf");
        assert_eq!(for_name("clip.mp4"), "video/mp4");
    }

    #[test]
    fn unknown_or_missing_extensions_fall_back() {
        assert_eq!(for_name("Makefile"), "application/octet-stream");
        assert_eq!(for_name("data.unknownext"), "application/octet-stream");
    }
}
