pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Binary units, at most two decimals, trailing zeros dropped.
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        let rounded = format!("{:.2}", size);
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        format!("{} {}", trimmed, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_use_binary_units() {
        assert_eq!(FileSizeUtils::format_size(0), "0 Bytes");
        assert_eq!(FileSizeUtils::format_size(500), "500 Bytes");
        assert_eq!(FileSizeUtils::format_size(1536), "1.5 KB");
        assert_eq!(FileSizeUtils::format_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(FileSizeUtils::format_size(3_221_225_472), "3 GB");
    }

    #[test]
    fn decimals_are_rounded_to_two_places() {
        assert_eq!(FileSizeUtils::format_size(1_234_567), "1.18 MB");
    }
}
