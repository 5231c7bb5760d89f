// ImeClip - Raccourcis clavier
// Touches, modificateurs, combinaisons et leur description textuelle
//
// # Format texte
// - Une combinaison : modificateurs et touche separes par `+`,
//   ex. `ctrl+semicolon`, `ctrl+shift+v`, `F5`
// - Un raccourci : une ou plusieurs combinaisons alternatives separees
//   par des espaces, ex. `minus up`
//
// Les noms sont insensibles a la casse. Les noms de ponctuation
// (`semicolon`, `minus`, `equal`...) designent le caractere correspondant.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{ClipError, ClipResult};

bitflags! {
    /// Modificateurs actifs lors d'un appui de touche.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const CTRL = 1 << 0;
        const ALT = 1 << 1;
        const SHIFT = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Touches nommees (non imprimables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Space,
    Return,
    Escape,
    Tab,
    BackSpace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    F(u8),
}

/// Touche appuyee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Caractere imprimable (lettres stockees en minuscule)
    Char(char),
    /// Touche speciale
    Named(NamedKey),
}

impl Key {
    /// Normalise une touche (lettres en minuscule, espace nomme).
    fn normalized(self) -> Self {
        match self {
            Key::Char(' ') => Key::Named(NamedKey::Space),
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }

    /// Parse un nom de touche.
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let named = match lower.as_str() {
            "space" => Some(NamedKey::Space),
            "return" | "enter" => Some(NamedKey::Return),
            "escape" | "esc" => Some(NamedKey::Escape),
            "tab" => Some(NamedKey::Tab),
            "backspace" => Some(NamedKey::BackSpace),
            "delete" | "del" => Some(NamedKey::Delete),
            "up" => Some(NamedKey::Up),
            "down" => Some(NamedKey::Down),
            "left" => Some(NamedKey::Left),
            "right" => Some(NamedKey::Right),
            "pageup" | "prior" => Some(NamedKey::PageUp),
            "pagedown" | "next" => Some(NamedKey::PageDown),
            "home" => Some(NamedKey::Home),
            "end" => Some(NamedKey::End),
            _ => None,
        };
        if let Some(k) = named {
            return Some(Key::Named(k));
        }

        let punct = match lower.as_str() {
            "semicolon" => Some(';'),
            "minus" => Some('-'),
            "equal" => Some('='),
            "comma" => Some(','),
            "period" => Some('.'),
            "slash" => Some('/'),
            "backslash" => Some('\\'),
            "apostrophe" => Some('\''),
            "grave" => Some('`'),
            "bracketleft" => Some('['),
            "bracketright" => Some(']'),
            _ => None,
        };
        if let Some(c) = punct {
            return Some(Key::Char(c));
        }

        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_graphic() => Some(Key::Char(c)),
            (Some('f'), Some(_)) => {
                let num: u8 = lower[1..].parse().ok()?;
                if (1..=12).contains(&num) {
                    Some(Key::Named(NamedKey::F(num)))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Char(';') => "semicolon",
            Key::Char('-') => "minus",
            Key::Char('=') => "equal",
            Key::Char(',') => "comma",
            Key::Char('.') => "period",
            Key::Char('/') => "slash",
            Key::Char('\\') => "backslash",
            Key::Char('\'') => "apostrophe",
            Key::Char('`') => "grave",
            Key::Char('[') => "bracketleft",
            Key::Char(']') => "bracketright",
            Key::Char(c) => return write!(f, "{}", c),
            Key::Named(NamedKey::Space) => "space",
            Key::Named(NamedKey::Return) => "return",
            Key::Named(NamedKey::Escape) => "escape",
            Key::Named(NamedKey::Tab) => "tab",
            Key::Named(NamedKey::BackSpace) => "backspace",
            Key::Named(NamedKey::Delete) => "delete",
            Key::Named(NamedKey::Up) => "up",
            Key::Named(NamedKey::Down) => "down",
            Key::Named(NamedKey::Left) => "left",
            Key::Named(NamedKey::Right) => "right",
            Key::Named(NamedKey::PageUp) => "pageup",
            Key::Named(NamedKey::PageDown) => "pagedown",
            Key::Named(NamedKey::Home) => "home",
            Key::Named(NamedKey::End) => "end",
            Key::Named(NamedKey::F(n)) => return write!(f, "f{}", n),
        };
        f.write_str(name)
    }
}

/// Evenement clavier transmis par l'hote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Cree un evenement clavier.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Appui simple, sans modificateur.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::empty())
    }
}

/// Combinaison touche + modificateurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyChord {
    /// Cree une combinaison.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key: key.normalized(),
            modifiers,
        }
    }

    /// Verifie si l'evenement correspond exactement a la combinaison.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.key.normalized() && self.modifiers == event.modifiers
    }
}

impl FromStr for KeyChord {
    type Err = ClipError;

    fn from_str(s: &str) -> ClipResult<Self> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key_name, mod_names) = match parts.split_last() {
            Some((last, rest)) if !last.is_empty() => (*last, rest),
            _ => return Err(ClipError::Hotkey(format!("empty chord: {:?}", s))),
        };

        let mut modifiers = Modifiers::empty();
        for name in mod_names {
            modifiers |= match name.to_lowercase().as_str() {
                "ctrl" | "control" => Modifiers::CTRL,
                "alt" => Modifiers::ALT,
                "shift" => Modifiers::SHIFT,
                "super" | "win" | "meta" => Modifiers::SUPER,
                _ => return Err(ClipError::Hotkey(format!("unknown modifier: {:?}", name))),
            };
        }

        let key = Key::parse(key_name)
            .ok_or_else(|| ClipError::Hotkey(format!("unknown key: {:?}", key_name)))?;
        Ok(KeyChord::new(key, modifiers))
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (Modifiers::CTRL, "ctrl"),
            (Modifiers::ALT, "alt"),
            (Modifiers::SHIFT, "shift"),
            (Modifiers::SUPER, "super"),
        ] {
            if self.modifiers.contains(flag) {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// Raccourci : une ou plusieurs combinaisons equivalentes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    chords: Vec<KeyChord>,
}

impl Hotkey {
    /// Cree un raccourci a partir de combinaisons alternatives.
    pub fn from_chords(chords: &[KeyChord]) -> Self {
        Self { chords: chords.to_vec() }
    }

    /// Cree un raccourci a partir d'une combinaison unique.
    pub fn single(chord: KeyChord) -> Self {
        Self { chords: vec![chord] }
    }

    /// Verifie si l'evenement correspond a l'une des combinaisons.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.chords.iter().any(|c| c.matches(event))
    }

    /// Combinaisons du raccourci.
    pub fn chords(&self) -> &[KeyChord] {
        &self.chords
    }
}

impl FromStr for Hotkey {
    type Err = ClipError;

    fn from_str(s: &str) -> ClipResult<Self> {
        let chords = s
            .split_whitespace()
            .map(KeyChord::from_str)
            .collect::<ClipResult<Vec<_>>>()?;
        if chords.is_empty() {
            return Err(ClipError::Hotkey("empty hotkey".into()));
        }
        Ok(Self { chords })
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", chord)?;
        }
        Ok(())
    }
}
