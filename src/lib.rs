pub mod lang;
pub mod table;
pub mod translate;
pub mod translator;

pub use lang::{ARA, DEFAULT_LANG, ENG, Lang, LangError};
pub use table::{GOVERNORATES, KindError, OFFICE_NAMES, PlaceKind, PlaceTable, all_kinds};
pub use translate::{
    translate, translate_governorate, translate_governorate_opt, translate_office_name,
    translate_office_name_opt,
};
pub use translator::Translator;
