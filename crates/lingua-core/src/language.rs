//! Reply-language options — a closed set of languages plus the prompt
//! directive that pins a model's reply language.
//!
//! Lookup by code is fail-open: an unknown code falls back to Chinese
//! Simplified instead of erroring. Language choice is advisory, unlike
//! model resolution, which fails loudly on bad input.

/// A supported reply language.
///
/// Discriminants double as the stable numeric ids. Codes follow ISO 639-1,
/// with region codes where variants must be told apart (zh-CN / zh-TW).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum LanguageOption {
    ChineseSimplified = 1,
    ChineseTraditional = 2,
    English = 3,
    Japanese = 4,
    Korean = 5,
    French = 6,
    German = 7,
    Spanish = 8,
    Portuguese = 9,
    Italian = 10,
    Russian = 11,
    Arabic = 12,
    Hindi = 13,
    Dutch = 14,
    Swedish = 15,
    Norwegian = 16,
    Danish = 17,
    Finnish = 18,
    Ukrainian = 19,
    Polish = 20,
    Czech = 21,
    Slovak = 22,
    Hungarian = 23,
    Romanian = 24,
    Bulgarian = 25,
    Serbian = 26,
    Bengali = 27,
    Urdu = 28,
    Tamil = 29,
    Telugu = 30,
    Thai = 31,
    Vietnamese = 32,
    Indonesian = 33,
    Malay = 34,
    Filipino = 35,
    Hebrew = 36,
    Persian = 37,
    Turkish = 38,
    Greek = 39,
    Latin = 40,
}

impl LanguageOption {
    /// All members, in id order.
    pub const ALL: [LanguageOption; 40] = [
        LanguageOption::ChineseSimplified,
        LanguageOption::ChineseTraditional,
        LanguageOption::English,
        LanguageOption::Japanese,
        LanguageOption::Korean,
        LanguageOption::French,
        LanguageOption::German,
        LanguageOption::Spanish,
        LanguageOption::Portuguese,
        LanguageOption::Italian,
        LanguageOption::Russian,
        LanguageOption::Arabic,
        LanguageOption::Hindi,
        LanguageOption::Dutch,
        LanguageOption::Swedish,
        LanguageOption::Norwegian,
        LanguageOption::Danish,
        LanguageOption::Finnish,
        LanguageOption::Ukrainian,
        LanguageOption::Polish,
        LanguageOption::Czech,
        LanguageOption::Slovak,
        LanguageOption::Hungarian,
        LanguageOption::Romanian,
        LanguageOption::Bulgarian,
        LanguageOption::Serbian,
        LanguageOption::Bengali,
        LanguageOption::Urdu,
        LanguageOption::Tamil,
        LanguageOption::Telugu,
        LanguageOption::Thai,
        LanguageOption::Vietnamese,
        LanguageOption::Indonesian,
        LanguageOption::Malay,
        LanguageOption::Filipino,
        LanguageOption::Hebrew,
        LanguageOption::Persian,
        LanguageOption::Turkish,
        LanguageOption::Greek,
        LanguageOption::Latin,
    ];

    /// Look up a language by code. Unknown codes fall back to Chinese
    /// Simplified; this never fails.
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .unwrap_or(LanguageOption::ChineseSimplified)
    }

    /// Stable numeric id.
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Native-script display name.
    pub fn label(self) -> &'static str {
        self.spec().0
    }

    /// Language code (ISO 639-1, region-qualified where needed).
    pub fn code(self) -> &'static str {
        self.spec().1
    }

    /// System-prompt directive constraining the reply language.
    pub fn system_prompt(self) -> String {
        format!("Reply strictly in {} ({}).", self.label(), self.code())
    }

    fn spec(self) -> (&'static str, &'static str) {
        match self {
            LanguageOption::ChineseSimplified => ("中文（简体）", "zh-CN"),
            LanguageOption::ChineseTraditional => ("中文（繁體）", "zh-TW"),
            LanguageOption::English => ("English", "en"),
            LanguageOption::Japanese => ("日本語", "ja"),
            LanguageOption::Korean => ("한국어", "ko"),
            LanguageOption::French => ("Français", "fr"),
            LanguageOption::German => ("Deutsch", "de"),
            LanguageOption::Spanish => ("Español", "es"),
            LanguageOption::Portuguese => ("Português", "pt"),
            LanguageOption::Italian => ("Italiano", "it"),
            LanguageOption::Russian => ("Русский", "ru"),
            LanguageOption::Arabic => ("العربية", "ar"),
            LanguageOption::Hindi => ("हिन्दी", "hi"),
            LanguageOption::Dutch => ("Nederlands", "nl"),
            LanguageOption::Swedish => ("Svenska", "sv"),
            LanguageOption::Norwegian => ("Norsk", "no"),
            LanguageOption::Danish => ("Dansk", "da"),
            LanguageOption::Finnish => ("Suomi", "fi"),
            LanguageOption::Ukrainian => ("Українська", "uk"),
            LanguageOption::Polish => ("Polski", "pl"),
            LanguageOption::Czech => ("Čeština", "cs"),
            LanguageOption::Slovak => ("Slovenčina", "sk"),
            LanguageOption::Hungarian => ("Magyar", "hu"),
            LanguageOption::Romanian => ("Română", "ro"),
            LanguageOption::Bulgarian => ("Български", "bg"),
            LanguageOption::Serbian => ("Српски", "sr"),
            LanguageOption::Bengali => ("বাংলা", "bn"),
            LanguageOption::Urdu => ("اردو", "ur"),
            LanguageOption::Tamil => ("தமிழ்", "ta"),
            LanguageOption::Telugu => ("తెలుగు", "te"),
            LanguageOption::Thai => ("ไทย", "th"),
            LanguageOption::Vietnamese => ("Tiếng Việt", "vi"),
            LanguageOption::Indonesian => ("Bahasa Indonesia", "id"),
            LanguageOption::Malay => ("Bahasa Melayu", "ms"),
            LanguageOption::Filipino => ("Filipino", "fil"),
            LanguageOption::Hebrew => ("עברית", "he"),
            LanguageOption::Persian => ("فارسی", "fa"),
            LanguageOption::Turkish => ("Türkçe", "tr"),
            LanguageOption::Greek => ("Ελληνικά", "el"),
            LanguageOption::Latin => ("Latina", "la"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_exact_match() {
        assert_eq!(LanguageOption::from_code("en"), LanguageOption::English);
        assert_eq!(LanguageOption::from_code("ja"), LanguageOption::Japanese);
        assert_eq!(LanguageOption::from_code("zh-TW"), LanguageOption::ChineseTraditional);
        assert_eq!(LanguageOption::from_code("fil"), LanguageOption::Filipino);
    }

    #[test]
    fn test_from_code_unknown_defaults_to_chinese_simplified() {
        assert_eq!(
            LanguageOption::from_code("zz-invalid"),
            LanguageOption::ChineseSimplified
        );
        assert_eq!(LanguageOption::from_code(""), LanguageOption::ChineseSimplified);
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        // "EN" is not a known code, so it falls back
        assert_eq!(LanguageOption::from_code("EN"), LanguageOption::ChineseSimplified);
    }

    #[test]
    fn test_system_prompt_french() {
        let lang = LanguageOption::from_code("fr");
        assert_eq!(lang, LanguageOption::French);
        assert_eq!(lang.system_prompt(), "Reply strictly in Français (fr).");
    }

    #[test]
    fn test_system_prompt_default() {
        assert_eq!(
            LanguageOption::ChineseSimplified.system_prompt(),
            "Reply strictly in 中文（简体） (zh-CN)."
        );
    }

    #[test]
    fn test_ids_are_dense_and_ordered() {
        for (i, lang) in LanguageOption::ALL.iter().enumerate() {
            assert_eq!(lang.id() as usize, i + 1);
        }
    }

    #[test]
    fn test_all_codes_unique() {
        let codes: Vec<&str> = LanguageOption::ALL.iter().map(|l| l.code()).collect();
        let mut unique = codes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(codes.len(), unique.len(), "Duplicate language codes found");
    }

    #[test]
    fn test_member_count() {
        assert_eq!(LanguageOption::ALL.len(), 40);
        assert_eq!(LanguageOption::Latin.id(), 40);
    }
}
