//! Free-function translators keyed by a raw locale string.
//!
//! Only the exact locale `"ar"` selects passthrough. Any other value,
//! including codes this crate does not know, selects English and falls back
//! to the input when the table has no entry. Nothing here allocates: the
//! result borrows either the input or a `'static` table value.

use tracing::trace;

use crate::table::PlaceKind;

/// Locale string that returns names untouched.
pub const SOURCE_LOCALE: &str = "ar";

/// Translate an office name for `locale`.
#[inline]
pub fn translate_office_name<'a>(name: &'a str, locale: &str) -> &'a str {
    translate(PlaceKind::Office, name, locale)
}

/// Translate a governorate name for `locale`.
#[inline]
pub fn translate_governorate<'a>(name: &'a str, locale: &str) -> &'a str {
    translate(PlaceKind::Governorate, name, locale)
}

#[inline]
pub fn translate_office_name_opt<'a>(name: Option<&'a str>, locale: &str) -> Option<&'a str> {
    name.map(|n| translate_office_name(n, locale))
}

#[inline]
pub fn translate_governorate_opt<'a>(name: Option<&'a str>, locale: &str) -> Option<&'a str> {
    name.map(|n| translate_governorate(n, locale))
}

pub fn translate<'a>(kind: PlaceKind, name: &'a str, locale: &str) -> &'a str {
    if locale == SOURCE_LOCALE || name.is_empty() {
        return name;
    }
    lookup_or_passthrough(kind, name)
}

pub(crate) fn lookup_or_passthrough(kind: PlaceKind, name: &str) -> &str {
    match kind.lookup(name) {
        Some(english) => english,
        None => {
            trace!(kind = kind.code(), name, "no translation, passing through");
            name
        }
    }
}
