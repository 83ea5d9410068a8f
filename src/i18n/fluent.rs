// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, plus any `.ftl` files found in
    /// `i18n_dir` (which replace embedded ones for the same locale).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(String, String)> = Asset::iter()
            .filter_map(|file| {
                let name = file.as_ref().to_string();
                let content = Asset::get(&name)?;
                Some((name, String::from_utf8_lossy(content.data.as_ref()).into_owned()))
            })
            .collect();

        if let Some(dir) = i18n_dir {
            sources.extend(read_ftl_dir(Path::new(&dir)));
        }

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (filename, content) in sources {
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let resource = match FluentResource::try_new(content) {
                Ok(res) => res,
                Err((res, errors)) => {
                    tracing::warn!(%locale, errors = errors.len(), "FTL file has syntax errors");
                    res
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Plain output; isolation marks show up as boxes in some fonts.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, errors = errors.len(), "duplicate FTL messages ignored");
            }
            if bundles.insert(locale.clone(), bundle).is_none() {
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn read_ftl_dir(dir: &Path) -> Vec<(String, String)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot read i18n directory");
            return Vec::new();
        }
    };
    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            if !name.ends_with(".ftl") {
                return None;
            }
            let content = std::fs::read_to_string(entry.path()).ok()?;
            Some((name, content))
        })
        .collect()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
            // "fr-FR" should still pick "fr"
            if let Some(lang) = available.iter().find(|l| l.language == os_lang.language) {
                return Some(lang.clone());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::tempdir;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_unknown_cli_falls_through() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn embedded_english_translations_resolve() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        assert!(!i18n.tr("window-title").starts_with("MISSING:"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let text = i18n.tr_with_args("notification-list-error", &[("error", "timeout")]);
        assert!(text.contains("timeout"), "got: {text}");
    }

    #[test]
    fn external_directory_adds_locales() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("de.ftl"), "window-title = Galerie-Verwaltung\n")
            .expect("write ftl");

        let i18n = I18n::new(
            Some("de".into()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.current_locale().to_string(), "de");
        assert_eq!(i18n.tr("window-title"), "Galerie-Verwaltung");
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        i18n.set_locale("xx".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }
}
