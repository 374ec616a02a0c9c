use std::collections::{BTreeMap, HashMap};

use log::debug;
use url::{ParseError, Position, Url};

use crate::kernel::constants::{EDIT_PARAM, LANG_PARAM};

/// Stand-in base used to manipulate relative URLs such as request URIs
const RELATIVE_BASE: &str = "http://relative.invalid";

/// Translates a page URL into its equivalent in another language
pub trait UrlTranslator: Send + Sync {
    /// Translate `url` from language `from` (empty for the source language)
    /// to language `to`
    fn translate(&self, url: &str, from: &str, to: &str) -> String;
}

impl<F> UrlTranslator for F
where
    F: Fn(&str, &str, &str) -> String + Send + Sync,
{
    fn translate(&self, url: &str, from: &str, to: &str) -> String {
        self(url, from, to)
    }
}

/// Encodes or strips the language selector of a URL
pub trait UrlRewriter: Send + Sync {
    /// Rewrite `url` for language `lang`; an empty `lang` removes any
    /// selector. `permalinks` selects path-prefix mode over the query
    /// parameter, and `edit` adds the edit-mode flag.
    fn rewrite(&self, url: &str, home: &str, permalinks: bool, lang: &str, edit: bool) -> String;
}

impl<F> UrlRewriter for F
where
    F: Fn(&str, &str, bool, &str, bool) -> String + Send + Sync,
{
    fn rewrite(&self, url: &str, home: &str, permalinks: bool, lang: &str, edit: bool) -> String {
        self(url, home, permalinks, lang, edit)
    }
}

/// Translator that leaves every URL unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

impl UrlTranslator for IdentityTranslator {
    fn translate(&self, url: &str, _from: &str, _to: &str) -> String {
        url.to_string()
    }
}

/// Translates URL path segments through a per-language dictionary
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator {
    dictionaries: HashMap<String, HashMap<String, String>>,
}

impl DictionaryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dictionaries(dictionaries: &BTreeMap<String, BTreeMap<String, String>>) -> Self {
        let dictionaries = dictionaries
            .iter()
            .map(|(lang, words)| {
                let words = words.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                (lang.clone(), words)
            })
            .collect();
        Self { dictionaries }
    }

    /// Add a translation of one path segment
    pub fn insert(&mut self, lang: &str, original: &str, translated: &str) {
        self.dictionaries
            .entry(lang.to_string())
            .or_default()
            .insert(original.to_string(), translated.to_string());
    }
}

impl UrlTranslator for DictionaryTranslator {
    fn translate(&self, url: &str, _from: &str, to: &str) -> String {
        let Some(words) = self.dictionaries.get(to) else {
            return url.to_string();
        };
        let Some((mut parsed, form)) = parse_url(url) else {
            debug!("Not translating unparsable URL '{}'", url);
            return url.to_string();
        };

        let translated: Vec<String> = parsed
            .path()
            .split('/')
            .map(|segment| words.get(segment).cloned().unwrap_or_else(|| segment.to_string()))
            .collect();
        parsed.set_path(&translated.join("/"));
        serialize_url(&parsed, form)
    }
}

/// Default [`UrlRewriter`]: a `lang` query parameter, or a `/<lang>/` path
/// prefix right after the home path when permalinks are rewritten.
///
/// Existing selectors for any of the known languages are removed first, so
/// rewriting is idempotent.
#[derive(Debug, Clone, Default)]
pub struct LangParamRewriter {
    known_languages: Vec<String>,
}

impl LangParamRewriter {
    pub fn new<I, S>(known_languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_languages: known_languages.into_iter().map(Into::into).collect(),
        }
    }

    fn strip_language_segment<'r>(&self, rest: &'r str) -> &'r str {
        let trimmed = rest.strip_prefix('/').unwrap_or(rest);
        let (first, remainder) = match trimmed.find('/') {
            Some(i) => (&trimmed[..i], &trimmed[i..]),
            None => (trimmed, ""),
        };
        let is_language = !first.is_empty()
            && self
                .known_languages
                .iter()
                .any(|code| code.eq_ignore_ascii_case(first));
        if is_language { remainder } else { rest }
    }
}

impl UrlRewriter for LangParamRewriter {
    fn rewrite(&self, url: &str, home: &str, permalinks: bool, lang: &str, edit: bool) -> String {
        let Some((mut parsed, form)) = parse_url(url) else {
            debug!("Not rewriting unparsable URL '{}'", url);
            return url.to_string();
        };
        let home_path = Url::parse(home)
            .map(|h| h.path().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let mut pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(k, _)| k != LANG_PARAM && k != EDIT_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        // Only paths below home can carry a path selector
        let path = parsed.path().to_string();
        let below_home = path
            .strip_prefix(home_path.as_str())
            .filter(|rest| rest.is_empty() || rest.starts_with('/'));

        let mut needs_param = !lang.is_empty();
        if let Some(rest) = below_home {
            let rest = self.strip_language_segment(rest);
            let rest = if rest.is_empty() { "/" } else { rest };
            if permalinks && !lang.is_empty() {
                parsed.set_path(&format!("{}/{}{}", home_path, lang, rest));
                needs_param = false;
            } else {
                parsed.set_path(&format!("{}{}", home_path, rest));
            }
        }

        if needs_param {
            pairs.push((LANG_PARAM.to_string(), lang.to_string()));
        }
        if edit {
            pairs.push((EDIT_PARAM.to_string(), "1".to_string()));
        }

        if pairs.is_empty() {
            parsed.set_query(None);
        } else {
            let mut query = parsed.query_pairs_mut();
            query.clear();
            for (k, v) in &pairs {
                query.append_pair(k, v);
            }
        }
        serialize_url(&parsed, form)
    }
}

/// How an input URL was written, so it can be written back the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UrlForm {
    Absolute,
    /// `//host/path`, inheriting the page's scheme
    SchemeRelative,
    /// `/path`, relative to the current host
    PathRelative,
}

/// Parse absolute, scheme-relative or root-relative URLs
fn parse_url(raw: &str) -> Option<(Url, UrlForm)> {
    let form = match Url::parse(raw) {
        Ok(url) => return Some((url, UrlForm::Absolute)),
        Err(ParseError::RelativeUrlWithoutBase) if raw.starts_with("//") => {
            UrlForm::SchemeRelative
        }
        Err(ParseError::RelativeUrlWithoutBase) => UrlForm::PathRelative,
        Err(_) => return None,
    };
    Url::parse(RELATIVE_BASE)
        .and_then(|base| base.join(raw))
        .ok()
        .map(|url| (url, form))
}

fn serialize_url(url: &Url, form: UrlForm) -> String {
    match form {
        UrlForm::Absolute => url.to_string(),
        // Drops the stand-in scheme and keeps the host
        UrlForm::SchemeRelative => url[Position::AfterScheme..]
            .trim_start_matches(':')
            .to_string(),
        UrlForm::PathRelative => url[Position::BeforePath..].to_string(),
    }
}
