use placename::{ARA, ENG, PlaceKind, Translator, translate_governorate, translate_office_name};

fn main() {
    // ────────────────────────────────────────────────────────────────
    // Free functions – locale comes straight from the request
    // ────────────────────────────────────────────────────────────────
    for locale in ["ar", "en"] {
        println!(
            "[{locale}] {} / {}",
            translate_office_name("شبرا فرعي", locale),
            translate_governorate("القاهرة", locale)
        );
    }
    // → [ar] شبرا فرعي / القاهرة
    // → [en] Shubra Branch / Cairo

    // ────────────────────────────────────────────────────────────────
    // Bound translator – unknown names fall back to Arabic
    // ────────────────────────────────────────────────────────────────
    let en = Translator::builder().lang(ENG).build();
    let ar = Translator::builder().lang(ARA).build();
    for name in ["الأقصر", "مدينة مجهولة"] {
        println!("{} | {}", ar.governorate(name), en.governorate(name));
    }

    // ────────────────────────────────────────────────────────────────
    // Listing a table
    // ────────────────────────────────────────────────────────────────
    for (arabic, english) in PlaceKind::Office.entries() {
        println!("{english:<28} {arabic}");
    }
}
