// Size formatting
// 1024-based tiers up to GB, always two decimals and a period separator

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Format a byte count for display
///
/// With `human_readable` unset the raw count is returned. Otherwise the
/// count is scaled to Byte, KB, MB or GB and printed with two decimals,
/// e.g. `"1.23 MB"`. Sizes past a terabyte stay in GB.
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if !human_readable {
        return bytes.to_string();
    }

    let (divisor, unit) = if bytes < KB {
        (1, "Byte")
    } else if bytes < MB {
        (KB, "KB")
    } else if bytes < GB {
        (MB, "MB")
    } else {
        (GB, "GB")
    };

    // Hundredths rounded half-up on the exact quotient
    let divisor = u128::from(divisor);
    let hundredths = (u128::from(bytes) * 200 + divisor) / (2 * divisor);

    format!("{}.{:02} {}", hundredths / 100, hundredths % 100, unit)
}
