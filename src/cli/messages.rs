//! User-facing message catalogs, keyed by language.

/// Supported message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    /// Parse a language tag such as `fr`, `fr_FR.UTF-8`, or `en-US`.
    pub fn from_tag(tag: &str) -> Option<Lang> {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.starts_with("fr") {
            Some(Lang::Fr)
        } else if tag.starts_with("en") {
            Some(Lang::En)
        } else {
            None
        }
    }

    /// Explicit tag first, then `LC_ALL`, `LC_MESSAGES`, `LANG`. French only
    /// when the winning value says so; English otherwise.
    pub fn detect(explicit: Option<&str>) -> Lang {
        if let Some(lang) = explicit.and_then(Lang::from_tag) {
            return lang;
        }
        let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty())
            .unwrap_or_default();
        Self::from_locale(&locale)
    }

    pub fn from_locale(locale: &str) -> Lang {
        if locale.to_ascii_lowercase().starts_with("fr") {
            Lang::Fr
        } else {
            Lang::En
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Title,
    SelectSource,
    SelectTargets,
    AskOutputFile,
    AskOutputDir,
    DoneSingle,
    DoneMulti,
    ErrLoad,
    ErrSave,
    Cancelled,
    NoJsonFiles,
    Partial,
    Failures,
}

const EN: &[(MessageKey, &str)] = &[
    (MessageKey::Title, "Apply binds"),
    (MessageKey::SelectSource, "Select the SOURCE file (with the binds)"),
    (MessageKey::SelectTargets, "Select one or more TARGET files (to apply to)"),
    (
        MessageKey::AskOutputFile,
        "OUTPUT file (leave empty to save next to the TARGET)",
    ),
    (
        MessageKey::AskOutputDir,
        "OUTPUT FOLDER for all generated files (leave empty to save next to each TARGET)",
    ),
    (MessageKey::DoneSingle, "Binds applied successfully.\nResult:\n{path}"),
    (
        MessageKey::DoneMulti,
        "Binds applied successfully.\nGenerated files:\n{paths}",
    ),
    (MessageKey::ErrLoad, "Cannot load '{path}':\n{err}"),
    (MessageKey::ErrSave, "Cannot save '{path}':\n{err}"),
    (MessageKey::Cancelled, "Operation cancelled."),
    (MessageKey::NoJsonFiles, "No JSON files found in {path}"),
    (MessageKey::Partial, "Files written before the error:\n{paths}"),
    (MessageKey::Failures, "Some targets could not be processed:\n{paths}"),
];

const FR: &[(MessageKey, &str)] = &[
    (MessageKey::Title, "Appliquer des binds"),
    (
        MessageKey::SelectSource,
        "Sélectionnez le fichier SOURCE (avec les binds)",
    ),
    (
        MessageKey::SelectTargets,
        "Sélectionnez un ou plusieurs fichiers CIBLES (où appliquer)",
    ),
    (
        MessageKey::AskOutputFile,
        "Fichier de SORTIE (laisser vide pour enregistrer au même endroit)",
    ),
    (
        MessageKey::AskOutputDir,
        "DOSSIER DE SORTIE pour tous les fichiers générés (laisser vide pour enregistrer à côté de chaque fichier CIBLE)",
    ),
    (
        MessageKey::DoneSingle,
        "Les binds ont été appliqués avec succès.\nRésultat :\n{path}",
    ),
    (
        MessageKey::DoneMulti,
        "Les binds ont été appliqués avec succès.\nFichiers générés :\n{paths}",
    ),
    (MessageKey::ErrLoad, "Impossible de charger '{path}':\n{err}"),
    (MessageKey::ErrSave, "Impossible de sauvegarder '{path}':\n{err}"),
    (MessageKey::Cancelled, "Opération annulée."),
    (MessageKey::NoJsonFiles, "Aucun fichier JSON trouvé dans {path}"),
    (
        MessageKey::Partial,
        "Fichiers écrits avant l'erreur :\n{paths}",
    ),
    (
        MessageKey::Failures,
        "Certains fichiers CIBLES n'ont pas pu être traités :\n{paths}",
    ),
];

/// Message lookup for one language, falling back to English.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    lang: Lang,
}

impl Messages {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn text(&self, key: MessageKey) -> &'static str {
        let table = match self.lang {
            Lang::En => EN,
            Lang::Fr => FR,
        };
        lookup(table, key).or_else(|| lookup(EN, key)).unwrap_or("")
    }

    /// Template with `{name}` placeholders filled from `args`.
    pub fn render(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}

fn lookup(table: &[(MessageKey, &'static str)], key: MessageKey) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}
