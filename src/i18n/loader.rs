//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality including
//! translation loading, language detection, and message formatting.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, error, debug};
use crate::utils::errors::{RegistrarError, Result};
use crate::config::I18nConfig;

/// Translations compiled into the binary
const BUILTIN_TRANSLATIONS: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.json")),
    ("ru", include_str!("../../translations/ru.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
    /// Optional directory with translation overrides
    translations_dir: Option<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create a new I18n instance preloaded with the built-in translations
    pub fn new(config: &I18nConfig) -> Self {
        let mut i18n = Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
            translations_dir: config.translations_dir.clone(),
        };

        for (lang_code, content) in BUILTIN_TRANSLATIONS {
            if !i18n.is_language_supported(lang_code) {
                continue;
            }
            match serde_json::from_str::<Value>(content) {
                Ok(Value::Object(map)) => {
                    i18n.translations.insert(lang_code.to_string(), map);
                }
                Ok(_) => error!("Built-in translations for {} are not a JSON object", lang_code),
                Err(e) => error!("Failed to parse built-in translations for {}: {}", lang_code, e),
            }
        }

        i18n
    }

    /// Load translation files from the configured directory
    ///
    /// Files replace the built-in translations of their language. Without a
    /// configured directory only the built-in set is used.
    pub async fn load_translations(&mut self) -> Result<()> {
        if let Some(dir) = self.translations_dir.clone() {
            let translations_dir = Path::new(&dir);

            if !translations_dir.exists() {
                warn!("Translations directory {} not found, using built-in texts", dir);
            } else {
                let supported_languages = self.supported_languages.clone();
                for lang_code in &supported_languages {
                    let file_path = translations_dir.join(format!("{}.json", lang_code));

                    if !file_path.exists() {
                        debug!("No translation override at {}", file_path.display());
                        continue;
                    }

                    match self.load_language_file(&file_path, lang_code).await {
                        Ok(_) => info!("Loaded translations for language: {}", lang_code),
                        Err(e) => {
                            error!("Failed to load translations for {}: {}", lang_code, e);
                            if lang_code == &self.default_language {
                                return Err(RegistrarError::Config(
                                    format!("Failed to load default language translations: {}", e)
                                ));
                            }
                        }
                    }
                }
            }
        }

        if !self.translations.contains_key(&self.default_language) {
            return Err(RegistrarError::Config(
                format!("No translations available for default language: {}", self.default_language)
            ));
        }

        Ok(())
    }

    /// Load a single language file
    async fn load_language_file(&mut self, file_path: &Path, lang_code: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let translations: Value = serde_json::from_str(&content)?;

        if let Value::Object(map) = translations {
            debug!("Loaded {} translation keys for {}", map.len(), lang_code);
            self.translations.insert(lang_code.to_string(), map);
        } else {
            return Err(RegistrarError::Config(
                format!("Invalid translation file format for {}", lang_code)
            ));
        }

        Ok(())
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let value = self.get_translation_value(key, &effective_lang).or_else(|| {
            if effective_lang != self.default_language {
                self.get_translation_value(key, &self.default_language)
            } else {
                None
            }
        });

        match value {
            Some(translation) => {
                let text = self.extract_text_from_value(translation);
                self.format_message(&text, params)
            }
            None => {
                warn!("Translation key '{}' not found", key);
                key.to_string()
            }
        }
    }

    /// Get a translated message with pluralization support
    pub fn tp(&self, key: &str, lang: &str, count: i64, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);
        let plural_key = self.get_plural_key(key, count, &effective_lang);

        let mut final_params = params.cloned().unwrap_or_default();
        final_params.insert("count".to_string(), count.to_string());

        match self.get_translation_value(&plural_key, &effective_lang) {
            Some(_) => self.t(&plural_key, &effective_lang, Some(&final_params)),
            None => self.t(key, &effective_lang, Some(&final_params)),
        }
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|supported| supported == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language(&self, lang: &str) -> String {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang.to_string()
        } else {
            self.default_language.clone()
        }
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&Value> {
        let translations = self.translations.get(lang)?;

        // Support nested keys like "commands.start.ask_name"
        let mut parts = key.split('.');
        let mut current = translations.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }

        Some(current)
    }

    /// Extract text from JSON value (handle both strings and objects with pluralization)
    fn extract_text_from_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Object(obj) => {
                // For pluralization objects, default to "other" or first available key
                if let Some(other) = obj.get("other") {
                    self.extract_text_from_value(other)
                } else if let Some((_, first_value)) = obj.iter().next() {
                    self.extract_text_from_value(first_value)
                } else {
                    String::new()
                }
            }
            _ => value.to_string(),
        }
    }

    /// Format message with parameters
    ///
    /// Placeholders are substituted in a single pass, so parameter values
    /// that themselves look like `{placeholder}` are left untouched.
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        let Some(params) = params else {
            return template.to_string();
        };

        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            match after.find('}') {
                Some(end) if params.contains_key(&after[..end]) => {
                    result.push_str(&params[&after[..end]]);
                    rest = &after[end + 1..];
                }
                _ => {
                    result.push('{');
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }

    /// Get the appropriate plural key based on count and language rules
    fn get_plural_key(&self, base_key: &str, count: i64, lang: &str) -> String {
        let plural_form = self.get_plural_form(count, lang);
        format!("{}.{}", base_key, plural_form)
    }

    /// Determine plural form based on language-specific rules
    fn get_plural_form(&self, count: i64, lang: &str) -> &'static str {
        match lang {
            "ru" => {
                // Russian: one, few, many
                let abs_count = count.abs();
                let last_digit = abs_count % 10;
                let last_two_digits = abs_count % 100;

                if last_digit == 1 && last_two_digits != 11 {
                    "one"
                } else if (2..=4).contains(&last_digit) && !(12..=14).contains(&last_two_digits) {
                    "few"
                } else {
                    "many"
                }
            }
            _ => {
                // English rules: one, other
                if count == 1 { "one" } else { "other" }
            }
        }
    }

    /// Detect user language from Telegram language code
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            // Extract language code from locale (e.g., "en-US" -> "en")
            let lang_code = lang.split('-').next().unwrap_or(lang);

            if self.is_language_supported(lang_code) {
                return lang_code.to_string();
            }
        }

        self.default_language.clone()
    }
}
