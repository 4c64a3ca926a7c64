use crate::foundation::core::Rgb8;
use crate::foundation::error::{SwatchError, SwatchResult};

/// Parse `RRGGBB` with an optional leading `#` (case-insensitive, surrounding whitespace ignored).
pub fn parse_hex_rgb(s: &str) -> SwatchResult<Rgb8> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SwatchError::malformed_color(format!(
            "\"{s}\": expected #RRGGBB"
        )));
    }

    let byte = |pair: &str| {
        u8::from_str_radix(pair, 16)
            .map_err(|_| SwatchError::malformed_color(format!("invalid hex byte \"{pair}\"")))
    };
    Ok(Rgb8::new(
        byte(&hex[0..2])?,
        byte(&hex[2..4])?,
        byte(&hex[4..6])?,
    ))
}

/// Like [`parse_hex_rgb`], but malformed input falls back to [`Rgb8::NEUTRAL_GRAY`].
pub fn parse_hex_rgb_or_gray(s: &str) -> Rgb8 {
    match parse_hex_rgb(s) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to neutral gray");
            Rgb8::NEUTRAL_GRAY
        }
    }
}
