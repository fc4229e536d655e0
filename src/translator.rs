use crate::{
    lang::{DEFAULT_LANG, Lang},
    table::PlaceKind,
    translate::lookup_or_passthrough,
};

/// A translator bound to one output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    lang: Lang,
}

impl Default for Translator {
    #[inline(always)]
    fn default() -> Self {
        Self { lang: DEFAULT_LANG }
    }
}

impl Translator {
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    #[inline(always)]
    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn translate<'a>(&self, kind: PlaceKind, name: &'a str) -> &'a str {
        if self.lang.is_source() || name.is_empty() {
            return name;
        }
        lookup_or_passthrough(kind, name)
    }

    #[inline]
    pub fn translate_opt<'a>(&self, kind: PlaceKind, name: Option<&'a str>) -> Option<&'a str> {
        name.map(|n| self.translate(kind, n))
    }

    #[inline]
    pub fn office_name<'a>(&self, name: &'a str) -> &'a str {
        self.translate(PlaceKind::Office, name)
    }

    #[inline]
    pub fn governorate<'a>(&self, name: &'a str) -> &'a str {
        self.translate(PlaceKind::Governorate, name)
    }
}

#[derive(Default)]
pub struct TranslatorBuilder {
    lang: Lang,
}

impl TranslatorBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn build(self) -> Translator {
        Translator { lang: self.lang }
    }
}
