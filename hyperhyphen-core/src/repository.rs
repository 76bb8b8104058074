//! Downloading dictionaries from the LibreOffice dictionary repository
//!
//! Each language directory of the repository carries a `dictionaries.xcu`
//! descriptor. Its hyphenation node names the `.dic` file (relative to
//! `%origin%`) and the locales it serves. When no descriptor matches, the
//! conventional `<language>/hyph_<language>.dic` path is tried instead.

use crate::error::RepositoryError;
use crate::store::{language_part, DictionaryStore};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Raw file root of the LibreOffice dictionaries repository
pub const DEFAULT_REPOSITORY: &str =
    "https://raw.githubusercontent.com/LibreOffice/dictionaries/master/";

/// Language directories of the default repository
pub const LANGUAGES: &[&str] = &[
    "af_ZA", "an_ES", "ar", "be_BY", "bg_BG", "bn_BD", "bo", "br_FR", "bs_BA", "ca", "ckb",
    "cs_CZ", "da_DK", "de", "el_GR", "en", "eo", "es", "et_EE", "fa_IR", "fr_FR", "gd_GB", "gl",
    "gu_IN", "gug", "he_IL", "hi_IN", "hr_HR", "hu_HU", "id", "is", "it_IT", "kmr_Latn", "ko_KR",
    "lo_LA", "lt_LT", "lv_LV", "mn_MN", "ne_NP", "nl_NL", "no", "oc_FR", "pl_PL", "pt_BR",
    "pt_PT", "ro", "ru_RU", "si_LK", "sk_SK", "sl_SI", "sq_AL", "sr", "sv_SE", "sw_TZ", "te_IN",
    "th_TH", "tr_TR", "uk_UA", "vi", "zu_ZA",
];

const DESCRIPTOR: &str = "dictionaries.xcu";
const ORIGIN: &str = "%origin%/";
const USER_AGENT: &str = concat!("hyperhyphen/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// A hyphenation dictionary found through a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLocation {
    /// Download URL of the `.dic` file
    pub url: String,
    /// Locales the dictionary serves, `ll_CC` style
    pub locales: Vec<String>,
}

/// A dictionary repository reachable over HTTP
#[derive(Debug, Clone)]
pub struct Repository {
    base_url: String,
    client: Client,
}

impl Repository {
    /// Repository rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// The LibreOffice repository
    pub fn libreoffice() -> Result<Self, RepositoryError> {
        Self::new(DEFAULT_REPOSITORY)
    }

    /// Repository root without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Find the dictionary for `language` through the descriptors
    ///
    /// The directory named by the full code is tried first, then the one
    /// named by its language part. Missing or unreadable descriptors count
    /// as no match.
    pub fn locate(&self, language: &str) -> Option<DictionaryLocation> {
        let mut directories = vec![language];
        let part = language_part(language);
        if part != language {
            directories.push(part);
        }

        for directory in directories {
            let origin = format!("{}/{}", self.base_url(), directory);
            let descriptor = match self.download(&format!("{origin}/{DESCRIPTOR}")) {
                Ok(descriptor) => descriptor,
                Err(err) => {
                    log::debug!("No descriptor in '{}': {}", directory, err);
                    continue;
                }
            };
            match parse_descriptor(&descriptor, &origin, language) {
                Ok(Some(location)) => return Some(location),
                Ok(None) => {}
                Err(err) => log::debug!("Unreadable descriptor in '{}': {}", directory, err),
            }
        }
        None
    }

    /// Conventional URL of the dictionary for `language`
    pub fn fallback_url(&self, language: &str) -> String {
        format!("{}/{language}/hyph_{language}.dic", self.base_url())
    }

    /// Fetch `url`; any status other than success is an error
    pub fn download(&self, url: &str) -> Result<Vec<u8>, RepositoryError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }

    /// Download the dictionary for `language` into `store`
    ///
    /// An installed dictionary (exact code or same language) is kept unless
    /// `overwrite` is set. Returns the path of the installed file.
    pub fn install(
        &self,
        store: &DictionaryStore,
        language: &str,
        overwrite: bool,
    ) -> Result<PathBuf, RepositoryError> {
        if !overwrite && store.is_installed(language)? {
            let path = store.path_for(language)?;
            log::info!("'{}' already installed at {}", language, path.display());
            return Ok(path);
        }

        let url = match self.locate(language) {
            Some(location) => {
                log::debug!("Descriptor lists {} for {:?}", location.url, location.locales);
                location.url
            }
            None => self.fallback_url(language),
        };
        log::info!("Downloading {}", url);
        let content = self.download(&url)?;
        Ok(store.add(language, &content)?)
    }
}

/// Hyphenation dictionary for `language` in a `dictionaries.xcu` descriptor
///
/// A node counts when one of its attribute values mentions `HyphDic`. Its
/// `Locations` property holds the file (first entry, relative to
/// `%origin%`), its `Locales` property the served locales. `language`
/// matches a locale exactly or as its language part.
pub fn parse_descriptor(
    xml: &[u8],
    origin_url: &str,
    language: &str,
) -> Result<Option<DictionaryLocation>, quick_xml::Error> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut depth = 0usize;
    // Depth of the hyphenation node being read
    let mut hyph_depth = None;
    let mut prop = Property::Other;
    let mut in_value = false;
    let mut location: Option<String> = None;
    let mut locales: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"node" if hyph_depth.is_none() => {
                        if mentions_hyphdic(e)? {
                            hyph_depth = Some(depth);
                            location = None;
                            locales.clear();
                        }
                    }
                    b"prop" if hyph_depth.is_some() => prop = Property::of(e)?,
                    b"value" if hyph_depth.is_some() => in_value = true,
                    _ => {}
                }
            }
            Event::End(ref e) => {
                match e.local_name().as_ref() {
                    b"node" if hyph_depth == Some(depth) => {
                        hyph_depth = None;
                        if let Some(file) = location.take() {
                            if language_matches(language, &locales) {
                                return Ok(Some(DictionaryLocation {
                                    url: format!("{origin_url}/{file}"),
                                    locales,
                                }));
                            }
                        }
                    }
                    b"prop" => prop = Property::Other,
                    b"value" => in_value = false,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(e) if in_value => {
                let text = e.unescape()?;
                match prop {
                    Property::Locations => {
                        location = text
                            .split_whitespace()
                            .next()
                            .map(|first| first.strip_prefix(ORIGIN).unwrap_or(first).to_string());
                    }
                    Property::Locales => {
                        locales = text
                            .split_whitespace()
                            .map(|locale| locale.replace('-', "_"))
                            .collect();
                    }
                    Property::Other => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    Locations,
    Locales,
    Other,
}

impl Property {
    fn of(e: &BytesStart<'_>) -> Result<Self, quick_xml::Error> {
        for attr in e.attributes() {
            let attr = attr?;
            if attr.value.eq_ignore_ascii_case(b"locations") {
                return Ok(Property::Locations);
            }
            if attr.value.eq_ignore_ascii_case(b"locales") {
                return Ok(Property::Locales);
            }
        }
        Ok(Property::Other)
    }
}

fn mentions_hyphdic(e: &BytesStart<'_>) -> Result<bool, quick_xml::Error> {
    for attr in e.attributes() {
        let value = attr?.value.to_ascii_lowercase();
        if value.windows(7).any(|window| window == b"hyphdic") {
            return Ok(true);
        }
    }
    Ok(false)
}

fn language_matches(language: &str, locales: &[String]) -> bool {
    let prefix = format!("{language}_");
    locales
        .iter()
        .any(|locale| locale == language || locale.starts_with(&prefix))
}
