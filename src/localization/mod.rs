use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

/// Languages shipped with the app. Portuguese is the platform's home
/// language and doubles as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, serde::Serialize, serde::Deserialize)]
pub enum SupportedLang {
    #[serde(rename = "pt-br")]
    PortugueseBr,
    #[serde(rename = "en")]
    English,
}

impl SupportedLang {
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLang::PortugueseBr => "pt-br",
            SupportedLang::English => "en",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            SupportedLang::PortugueseBr => "Português (Brasil)",
            SupportedLang::English => "English",
        }
    }

    fn ftl_source(&self) -> &'static str {
        match self {
            SupportedLang::PortugueseBr => include_str!("resources/pt-br.ftl"),
            SupportedLang::English => include_str!("resources/en.ftl"),
        }
    }
}

const FALLBACK: SupportedLang = SupportedLang::PortugueseBr;

/// Maps a raw locale string ("pt_BR.UTF-8", "en-US", ...) onto a shipped
/// language; anything unrecognized lands on the fallback.
fn normalize_lang(raw: &str) -> SupportedLang {
    let mut code = raw.to_ascii_lowercase();
    if let Some(dot) = code.find('.') {
        code.truncate(dot);
    }
    let primary = code.split(['-', '_']).next().unwrap_or("");
    match primary {
        "pt" => SupportedLang::PortugueseBr,
        "en" => SupportedLang::English,
        _ => FALLBACK,
    }
}

fn detect_system_lang() -> SupportedLang {
    let sys = sys_locale::get_locale().unwrap_or_default();
    normalize_lang(&sys)
}

fn parse_langid(code: &str) -> LanguageIdentifier {
    code.parse::<LanguageIdentifier>()
        .unwrap_or_else(|_| "pt-BR".parse().expect("static langid"))
}

struct LocalizationManager {
    current: SupportedLang,
    bundles: HashMap<SupportedLang, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        use strum::IntoEnumIterator;
        let mut bundles = HashMap::new();
        for lang in SupportedLang::iter() {
            let mut bundle: Bundle = FluentBundle::new(vec![parse_langid(lang.code())]);
            // No Unicode isolation marks around placeables; egui renders
            // them as visible glyphs.
            bundle.set_use_isolating(false);
            let res = FluentResource::try_new(lang.ftl_source().to_string())
                .expect("embedded FTL resource must parse");
            bundle
                .add_resource(res)
                .expect("embedded FTL resource must load");
            bundles.insert(lang, bundle);
        }
        Self {
            current: FALLBACK,
            bundles,
        }
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for lang in [self.current, FALLBACK] {
            if let Some(bundle) = self.bundles.get(&lang) {
                if let Some(pattern) = bundle.get_message(id).and_then(|m| m.value()) {
                    let mut errors = vec![];
                    return bundle.format_pattern(pattern, args, &mut errors).to_string();
                }
            }
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

/// Initialize the language from settings; `None` means auto-detect from
/// the system locale.
pub fn initialize_localization(preferred: Option<SupportedLang>) {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    LOCALIZATION.with(|cell| cell.borrow_mut().current = lang);
}

pub fn set_current_language(lang: SupportedLang) {
    LOCALIZATION.with(|cell| cell.borrow_mut().current = lang);
}

/// Switch back to following the system locale.
pub fn set_language_auto() {
    LOCALIZATION.with(|cell| cell.borrow_mut().current = detect_system_lang());
}

pub fn current_language() -> SupportedLang {
    LOCALIZATION.with(|cell| cell.borrow().current)
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_codes_collapse_to_shipped_languages() {
        assert_eq!(normalize_lang("pt_BR.UTF-8"), SupportedLang::PortugueseBr);
        assert_eq!(normalize_lang("pt-PT"), SupportedLang::PortugueseBr);
        assert_eq!(normalize_lang("en-US"), SupportedLang::English);
        assert_eq!(normalize_lang("fr-FR"), FALLBACK);
        assert_eq!(normalize_lang(""), FALLBACK);
    }

    #[test]
    fn unknown_message_id_is_marked() {
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");
    }
}
