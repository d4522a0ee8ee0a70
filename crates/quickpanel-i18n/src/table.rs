//! The built-in translation table.
//!
//! Every entry carries `ru`, `cs` and `en`. New keys need at least an `en`
//! variant; `validate` enforces that in tests.

/// One translatable label and its localized variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Identifier the UI asks for, e.g. `"Network"`.
    pub key: &'static str,
    /// `(language code, text)` pairs.
    pub variants: &'static [(&'static str, &'static str)],
}

impl Entry {
    /// The non-empty variant for `language`, if any.
    pub fn get(&self, language: &str) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|(code, text)| *code == language && !text.is_empty())
            .map(|(_, text)| *text)
    }

    /// Language codes listed for this entry, in table order.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> {
        self.variants.iter().map(|(code, _)| *code)
    }
}

const TABLE: &[Entry] = &[
    Entry {
        key: "Network",
        variants: &[("ru", "Сеть"), ("cs", "Síť"), ("en", "Network")],
    },
    Entry {
        key: "On",
        variants: &[("ru", "Вкл"), ("cs", "Zapnuto"), ("en", "On")],
    },
    Entry {
        key: "Off",
        variants: &[("ru", "Выкл"), ("cs", "Vypnuto"), ("en", "Off")],
    },
    Entry {
        key: "Not Connected",
        variants: &[
            ("ru", "Не подключено"),
            ("cs", "Nepřipojeno"),
            ("en", "Not Connected"),
        ],
    },
    Entry {
        key: "Bluetooth",
        variants: &[("ru", "Bluetooth"), ("cs", "Bluetooth"), ("en", "Bluetooth")],
    },
    Entry {
        key: "Screenshot",
        variants: &[
            ("ru", "Снимок экрана"),
            ("cs", "Snímek obrazovky"),
            ("en", "Screenshot"),
        ],
    },
    Entry {
        key: "Night Light",
        variants: &[
            ("ru", "Ночной режим"),
            ("cs", "Noční osvětlení"),
            ("en", "Night Light"),
        ],
    },
    Entry {
        key: "Unmute",
        variants: &[
            ("ru", "Включить звук"),
            ("cs", "Zapnout zvuk"),
            ("en", "Unmute"),
        ],
    },
    Entry {
        key: "Mute",
        variants: &[
            ("ru", "Выключить звук"),
            ("cs", "Ztlumit zvuk"),
            ("en", "Mute"),
        ],
    },
    Entry {
        key: "Terminal",
        variants: &[("ru", "Терминал"), ("cs", "Terminál"), ("en", "Terminal")],
    },
    Entry {
        key: "No media playing",
        variants: &[
            ("ru", "Ничего не воспроизводится..."),
            ("cs", "Žádné přehrávání médií..."),
            ("en", "No media playing..."),
        ],
    },
];

/// The full table, in declaration order.
pub fn entries() -> &'static [Entry] {
    TABLE
}

/// The entry for `key`, if the table has one.
pub fn lookup(key: &str) -> Option<&'static Entry> {
    TABLE.iter().find(|entry| entry.key == key)
}

/// Every key, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|entry| entry.key)
}

/// Sorted, de-duplicated language codes used anywhere in the table.
pub fn languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = TABLE.iter().flat_map(Entry::languages).collect();
    codes.sort_unstable();
    codes.dedup();
    codes
}
