use std::{fmt, str::FromStr};

use paste::paste;
use phf::{Map, phf_map};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KindError {
    #[error("unknown place kind `{0}`: expected one of `office`, `governorate`")]
    Unknown(String),
}

/// A static Arabic → English mapping.
///
/// `map` answers lookups, `entries` keeps declaration order for listing.
#[derive(Debug)]
pub struct PlaceTable {
    pub kind: PlaceKind,
    pub map: &'static Map<&'static str, &'static str>,
    pub entries: &'static [(&'static str, &'static str)],
}

impl PlaceTable {
    #[inline(always)]
    pub fn get(&self, arabic: &str) -> Option<&'static str> {
        self.map.get(arabic).copied()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// ---------------------------------------------------------------------------
///    Macro – generates the kind enum, the maps and the listings from a
///    single table
/// ---------------------------------------------------------------------------
macro_rules! define_tables {
    ($(
        $kind:ident, $table:ident, $code_str:literal, $name:literal,
        entries: [ $($ar:literal => $en:literal),* $(,)? ]
    );* $(;)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PlaceKind {
            $($kind),*
        }

        // Per-kind static data modules
        $(
            paste! {
                mod [<$kind:lower _data>] {
                    use super::*;

                    pub static MAP: Map<&'static str, &'static str> = phf_map! {
                        $($ar => $en),*
                    };

                    pub static ENTRIES: &[(&str, &str)] = &[
                        $(($ar, $en)),*
                    ];
                }

                pub static $table: PlaceTable = PlaceTable {
                    kind: PlaceKind::$kind,
                    map: &[<$kind:lower _data>]::MAP,
                    entries: [<$kind:lower _data>]::ENTRIES,
                };
            }
        )*

        static ALL_KINDS: &[PlaceKind] = &[$(PlaceKind::$kind),*];

        impl PlaceKind {
            #[inline(always)]
            pub const fn code(self) -> &'static str {
                match self {
                    $(PlaceKind::$kind => $code_str),*
                }
            }

            #[inline(always)]
            pub const fn name(self) -> &'static str {
                match self {
                    $(PlaceKind::$kind => $name),*
                }
            }

            #[inline(always)]
            pub fn table(self) -> &'static PlaceTable {
                match self {
                    $(PlaceKind::$kind => &$table),*
                }
            }

            /// Case-insensitive lookup by code (`"office"`, `"governorate"`).
            pub fn from_code(code: &str) -> Option<PlaceKind> {
                let lower = code.to_ascii_lowercase();
                match lower.as_str() {
                    $(
                        $code_str => Some(PlaceKind::$kind),
                    )*
                    _ => None,
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Table definitions (single source of truth)
//    Keys are matched byte-exactly: "القاهره" (office) and "القاهرة"
//    (governorate) are different spellings and both are kept as written.
// ---------------------------------------------------------------------------
define_tables! {
    Office, OFFICE_NAMES, "office", "Office names",
    entries: [
        "شبرا فرعي" => "Shubra Branch",
        "القاهره الرئيسي" => "Cairo Main Office",
        "الحي السادس - مدينة نصر" => "Sixth District - Nasr City",
        "باب الخلق" => "Bab El-Khalq",
        "السعوديه" => "Al-Saudiya",
        "اسكر" => "Askar",
    ];

    Governorate, GOVERNORATES, "governorate", "Governorates",
    entries: [
        "القاهرة" => "Cairo",
        "الجيزة" => "Giza",
        "القليوبية" => "Qalyubia",
        "الإسكندرية" => "Alexandria",
        "البحيرة" => "Beheira",
        "مطروح" => "Matrouh",
        "كفر الشيخ" => "Kafr El-Sheikh",
        "الغربية" => "Gharbia",
        "الدقهلية" => "Dakahlia",
        "دمياط" => "Damietta",
        "بورسعيد" => "Port Said",
        "الإسماعيلية" => "Ismailia",
        "السويس" => "Suez",
        "الشرقية" => "Sharqia",
        "الفيوم" => "Fayoum",
        "بني سويف" => "Beni Suef",
        "المنيا" => "Minya",
        "أسيوط" => "Assiut",
        "سوهاج" => "Sohag",
        "قنا" => "Qena",
        "الأقصر" => "Luxor",
        "أسوان" => "Aswan",
        "البحر الأحمر" => "Red Sea",
        "الوادي الجديد" => "New Valley",
        "شمال سيناء" => "North Sinai",
        "جنوب سيناء" => "South Sinai",
        "المنوفية" => "Monufia",
    ];
}

impl PlaceKind {
    /// Raw table lookup, no locale involved.
    #[inline(always)]
    pub fn lookup(self, arabic: &str) -> Option<&'static str> {
        self.table().get(arabic)
    }

    /// `(arabic, english)` pairs in declaration order.
    pub fn entries(self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.table().entries.iter().copied()
    }

    #[inline(always)]
    pub fn len(self) -> usize {
        self.table().len()
    }

    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.table().is_empty()
    }
}

pub fn all_kinds() -> &'static [PlaceKind] {
    ALL_KINDS
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PlaceKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaceKind::from_code(s).ok_or_else(|| KindError::Unknown(s.to_owned()))
    }
}
