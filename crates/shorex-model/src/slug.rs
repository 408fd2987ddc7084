//! Label slugification.
//!
//! Supplier workbooks mix English and Spanish labels with inconsistent
//! casing, accents, and punctuation ("Fecha de servicio", "Excursión nombre
//! local"). A slug is the normalized lookup key: lowercase, diacritics folded
//! to their ASCII base letter, everything non-alphanumeric removed. Slugs are
//! only ever used as alias-table keys; they are never shown to callers.

/// Reduce a raw label to its slug form.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for ch in label.chars() {
        for lower in ch.to_lowercase() {
            match fold_diacritic(lower) {
                Some(base) => slug.push(base),
                None if lower.is_ascii_alphanumeric() => slug.push(lower),
                None => {}
            }
        }
    }
    slug
}

/// Fold an accented Latin letter to its unaccented base.
///
/// Covers the Spanish/Portuguese/French range seen in real confirmation
/// files; anything else passes through unchanged.
fn fold_diacritic(ch: char) -> Option<char> {
    let base = match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        _ => return None,
    };
    Some(base)
}
