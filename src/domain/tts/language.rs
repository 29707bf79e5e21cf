use serde::{Deserialize, Serialize};

macro_rules! language_codes {
    ($($variant:ident => ($code:literal, $name:literal)),+ $(,)?) => {
        /// Language codes accepted by the speech backend, with the display name
        /// the translation prompt uses.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LanguageCode {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl LanguageCode {
            /// Every supported language, in display order
            pub const ALL: &'static [LanguageCode] = &[$(LanguageCode::$variant),+];

            /// Code passed to the speech backend
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(LanguageCode::$variant => $code,)+
                }
            }

            /// Human readable name, also used in the translation prompt
            pub fn display_name(&self) -> &'static str {
                match self {
                    $(LanguageCode::$variant => $name,)+
                }
            }
        }
    };
}

// `iw`, `jw`, `zh-CN` and `zh-TW` are what the speech backend accepts. Keep them verbatim.
language_codes! {
    Afrikaans => ("af", "Afrikaans"),
    Arabic => ("ar", "Arabic"),
    Bulgarian => ("bg", "Bulgarian"),
    Bengali => ("bn", "Bengali"),
    Bosnian => ("bs", "Bosnian"),
    Catalan => ("ca", "Catalan"),
    Czech => ("cs", "Czech"),
    Danish => ("da", "Danish"),
    German => ("de", "German"),
    Greek => ("el", "Greek"),
    English => ("en", "English"),
    Spanish => ("es", "Spanish"),
    Estonian => ("et", "Estonian"),
    Finnish => ("fi", "Finnish"),
    French => ("fr", "French"),
    Gujarati => ("gu", "Gujarati"),
    Hindi => ("hi", "Hindi"),
    Croatian => ("hr", "Croatian"),
    Hungarian => ("hu", "Hungarian"),
    Indonesian => ("id", "Indonesian"),
    Icelandic => ("is", "Icelandic"),
    Italian => ("it", "Italian"),
    Hebrew => ("iw", "Hebrew"),
    Japanese => ("ja", "Japanese"),
    Javanese => ("jw", "Javanese"),
    Khmer => ("km", "Khmer"),
    Kannada => ("kn", "Kannada"),
    Korean => ("ko", "Korean"),
    Latin => ("la", "Latin"),
    Latvian => ("lv", "Latvian"),
    Malayalam => ("ml", "Malayalam"),
    Marathi => ("mr", "Marathi"),
    Malay => ("ms", "Malay"),
    Burmese => ("my", "Myanmar (Burmese)"),
    Nepali => ("ne", "Nepali"),
    Dutch => ("nl", "Dutch"),
    Norwegian => ("no", "Norwegian"),
    Polish => ("pl", "Polish"),
    Portuguese => ("pt", "Portuguese"),
    Romanian => ("ro", "Romanian"),
    Russian => ("ru", "Russian"),
    Sinhala => ("si", "Sinhala"),
    Slovak => ("sk", "Slovak"),
    Albanian => ("sq", "Albanian"),
    Serbian => ("sr", "Serbian"),
    Sundanese => ("su", "Sundanese"),
    Swedish => ("sv", "Swedish"),
    Swahili => ("sw", "Swahili"),
    Tamil => ("ta", "Tamil"),
    Telugu => ("te", "Telugu"),
    Thai => ("th", "Thai"),
    Filipino => ("tl", "Filipino"),
    Turkish => ("tr", "Turkish"),
    Ukrainian => ("uk", "Ukrainian"),
    Urdu => ("ur", "Urdu"),
    Vietnamese => ("vi", "Vietnamese"),
    ChineseSimplified => ("zh-CN", "Chinese (Simplified)"),
    ChineseTraditional => ("zh-TW", "Chinese (Traditional)"),
}

impl LanguageCode {
    /// Look up a language by its exact backend code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == code)
    }

    /// Look up a language by its exact display name
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.display_name() == name)
    }

    /// Resolve user input that may be either a code or a display name.
    /// Codes win when both could match.
    pub fn resolve(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::from_code(input).or_else(|| Self::from_display_name(input))
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Code/name pair as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

impl From<LanguageCode> for LanguageEntry {
    fn from(language: LanguageCode) -> Self {
        Self {
            code: language.as_str().to_string(),
            name: language.display_name().to_string(),
        }
    }
}

/// Full language table in display order
pub fn supported_languages() -> Vec<LanguageEntry> {
    LanguageCode::ALL.iter().copied().map(LanguageEntry::from).collect()
}
