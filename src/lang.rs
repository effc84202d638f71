//! Language codes and names.
//!
//! Holds the Wikipedia language codes the collector knows a name for.
//! Names are used to name corpus files (`icelandic.plain`).
//!
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;
use oxilangtag::LanguageTag;

use crate::error::Error;

lazy_static! {

    /// Wikipedia language code -> lowercase english name.
    pub static ref LANG: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("af", "afrikaans");
        m.insert("ar", "arabic");
        m.insert("az", "azerbaijani");
        m.insert("be", "belarusian");
        m.insert("bg", "bulgarian");
        m.insert("bn", "bengali");
        m.insert("br", "breton");
        m.insert("bs", "bosnian");
        m.insert("ca", "catalan");
        m.insert("cs", "czech");
        m.insert("cy", "welsh");
        m.insert("da", "danish");
        m.insert("de", "german");
        m.insert("el", "greek");
        m.insert("en", "english");
        m.insert("eo", "esperanto");
        m.insert("es", "spanish");
        m.insert("et", "estonian");
        m.insert("eu", "basque");
        m.insert("fa", "persian");
        m.insert("fi", "finnish");
        m.insert("fo", "faroese");
        m.insert("fr", "french");
        m.insert("fy", "frisian");
        m.insert("ga", "irish");
        m.insert("gd", "gaelic");
        m.insert("gl", "galician");
        m.insert("he", "hebrew");
        m.insert("hi", "hindi");
        m.insert("hr", "croatian");
        m.insert("hu", "hungarian");
        m.insert("hy", "armenian");
        m.insert("id", "indonesian");
        m.insert("is", "icelandic");
        m.insert("it", "italian");
        m.insert("ja", "japanese");
        m.insert("ka", "georgian");
        m.insert("kk", "kazakh");
        m.insert("ko", "korean");
        m.insert("la", "latin");
        m.insert("lb", "luxembourgish");
        m.insert("lt", "lithuanian");
        m.insert("lv", "latvian");
        m.insert("mk", "macedonian");
        m.insert("ms", "malay");
        m.insert("mt", "maltese");
        m.insert("nl", "dutch");
        m.insert("nn", "nynorsk");
        m.insert("no", "norwegian");
        m.insert("oc", "occitan");
        m.insert("pl", "polish");
        m.insert("pt", "portuguese");
        m.insert("ro", "romanian");
        m.insert("ru", "russian");
        m.insert("sk", "slovak");
        m.insert("sl", "slovene");
        m.insert("sq", "albanian");
        m.insert("sr", "serbian");
        m.insert("sv", "swedish");
        m.insert("sw", "swahili");
        m.insert("ta", "tamil");
        m.insert("th", "thai");
        m.insert("tr", "turkish");
        m.insert("uk", "ukrainian");
        m.insert("ur", "urdu");
        m.insert("uz", "uzbek");
        m.insert("vi", "vietnamese");
        m.insert("zh", "chinese");

        m
    };
}

/// Name of the language identified by `code`, if known.
pub fn name(code: &str) -> Option<&'static str> {
    LANG.get(code).copied()
}

/// Check that `code` can be a wiki subdomain (`is`, `zh-min-nan`, `zh-classical`...).
///
/// Codes that are not BCP 47 tags are accepted with a warning.
pub fn validate_code(code: &str) -> Result<(), Error> {
    let well_formed = !code.is_empty()
        && !code.starts_with('-')
        && !code.ends_with('-')
        && code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !well_formed {
        return Err(Error::Config(format!("invalid language code {:?}", code)));
    }

    if let Err(e) = LanguageTag::parse(code) {
        warn!("{:?} is not a BCP 47 language tag: {}", code, e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known() {
        assert_eq!(name("is"), Some("icelandic"));
        assert_eq!(name("hu"), Some("hungarian"));
        assert_eq!(name("xx"), None);
    }

    #[test]
    fn codes() {
        assert!(validate_code("is").is_ok());
        assert!(validate_code("zh-min-nan").is_ok());
        assert!(validate_code("be-x-old").is_ok());
        assert!(validate_code("zh-classical").is_ok());
        assert!(validate_code("map-bms").is_ok());
        assert!(validate_code("IS").is_err());
        assert!(validate_code("-is").is_err());
        assert!(validate_code("").is_err());
        assert!(validate_code("is land").is_err());
        assert!(validate_code("../is").is_err());
    }
}
