//! User configuration — keybindings, animation tuning, and persistence.
//!
//! Stored as plain `key = value` lines at
//! `$XDG_CONFIG_HOME/story-header/config.toml` (default
//! `~/.config/story-header/config.toml`).  The first run writes the defaults
//! there so the file can be edited in place.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the chats screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollDown,
    ScrollUp,
    StoriesPrev,
    StoriesNext,
    ScrollTop,
    OpenDebug,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::ScrollDown,
        Action::ScrollUp,
        Action::StoriesPrev,
        Action::StoriesNext,
        Action::ScrollTop,
        Action::OpenDebug,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollDown => "scroll_down",
            Action::ScrollUp => "scroll_up",
            Action::StoriesPrev => "stories_prev",
            Action::StoriesNext => "stories_next",
            Action::ScrollTop => "scroll_top",
            Action::OpenDebug => "open_debug",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Named keys: (config name, display label, code).  The first entry for a
/// code is the canonical one used when saving.
const NAMED_KEYS: &[(&str, &str, KeyCode)] = &[
    ("Up", "↑", KeyCode::Up),
    ("Down", "↓", KeyCode::Down),
    ("Left", "←", KeyCode::Left),
    ("Right", "→", KeyCode::Right),
    ("Enter", "Enter", KeyCode::Enter),
    ("Return", "Enter", KeyCode::Enter),
    ("Esc", "Esc", KeyCode::Esc),
    ("Escape", "Esc", KeyCode::Esc),
    ("Tab", "Tab", KeyCode::Tab),
    ("Home", "Home", KeyCode::Home),
    ("End", "End", KeyCode::End),
    ("PageUp", "PgUp", KeyCode::PageUp),
    ("PageDown", "PgDn", KeyCode::PageDown),
    ("Space", "Space", KeyCode::Char(' ')),
];

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT take part in matching.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && self.modifiers & MODIFIER_MASK == event.modifiers & MODIFIER_MASK
    }

    fn modifier_prefix(&self) -> String {
        [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ]
        .iter()
        .filter(|(m, _)| self.modifiers.contains(*m))
        .map(|(_, s)| *s)
        .collect()
    }

    /// User-facing label, e.g. `"Shift+↓"`.
    pub fn display(&self) -> String {
        let key = match NAMED_KEYS.iter().find(|(_, _, c)| *c == self.code) {
            Some((_, label, _)) => (*label).to_string(),
            None => code_fallback(self.code),
        };
        format!("{}{key}", self.modifier_prefix())
    }

    fn to_config_string(&self) -> String {
        let key = match NAMED_KEYS.iter().find(|(_, _, c)| *c == self.code) {
            Some((name, _, _)) => (*name).to_string(),
            None => code_fallback(self.code),
        };
        format!("{}{key}", self.modifier_prefix())
    }

    /// Parse `"Ctrl+c"`, `"Shift+Down"`, `"j"`, `"F5"`.
    fn parse(s: &str) -> Option<Self> {
        let (mods, key) = match s.rsplit_once('+') {
            // "+" on its own is a key, not a separator.
            Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(""), "+"),
            Some((mods, key)) => (mods, key),
            None => ("", s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            modifiers |= match part.to_lowercase().as_str() {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return None,
            };
        }

        let code = if let Some((_, _, code)) = NAMED_KEYS
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(key))
        {
            *code
        } else if let Some(n) = key.strip_prefix(['f', 'F']).and_then(|n| n.parse().ok()) {
            KeyCode::F(n)
        } else {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        };
        Some(Self { code, modifiers })
    }
}

fn code_fallback(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Redraw / animation tick, in milliseconds.
    pub frame_ms: u64,
    /// Fraction of the remaining distance an animation covers per tick.
    pub animation_speed: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            frame_ms: 33,
            animation_speed: 0.3,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        HashMap::from([
            (ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]),
            (ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]),
            (StoriesPrev, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]),
            (StoriesNext, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]),
            (ScrollTop, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]),
            (OpenDebug, vec![KeyBind::new(Char('?'), n)]),
            (Quit, vec![KeyBind::new(Char('q'), n)]),
        ])
    }

    /// Action bound to `event`; with several matches the binding with the
    /// most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(action, binds)| binds.iter().map(move |b| (*action, b)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        self.bindings
            .get(&action)
            .and_then(|binds| binds.first())
            .map_or_else(|| "?".into(), KeyBind::display)
    }

    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}/{}: stories | {}: debug | {}: quit",
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::StoriesPrev),
            self.short_binding(Action::StoriesNext),
            self.short_binding(Action::OpenDebug),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let config = Self::default();
                match config.save(path) {
                    Ok(()) => tracing::info!("wrote default config to {}", path.display()),
                    Err(err) => tracing::warn!("could not write {}: {err:#}", path.display()),
                }
                config
            }
            Err(err) => {
                tracing::warn!("unreadable config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "frame_ms" => match value.parse::<u64>() {
                    Ok(v) => config.frame_ms = v.clamp(10, 200),
                    Err(_) => tracing::warn!("ignoring frame_ms = {value}"),
                },
                "animation_speed" => match value.parse::<f64>() {
                    Ok(v) if v.is_finite() => config.animation_speed = v.clamp(0.05, 0.95),
                    _ => tracing::warn!("ignoring animation_speed = {value}"),
                },
                _ => {
                    let Some(action) = Action::from_config_key(key) else {
                        tracing::warn!("unknown config key `{key}`");
                        continue;
                    };
                    let parsed: Vec<KeyBind> = value
                        .split(',')
                        .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                        .collect();
                    if !parsed.is_empty() {
                        config.bindings.insert(action, parsed);
                    }
                }
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# story-header configuration".to_string(),
            String::new(),
            "# Animation".to_string(),
            format!("frame_ms = {}", self.frame_ms),
            format!("animation_speed = {}", self.animation_speed),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];
        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("story-header").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parse_key_strings() {
        assert_eq!(
            KeyBind::parse("Ctrl+c"),
            Some(KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            KeyBind::parse("shift+down"),
            Some(KeyBind::new(KeyCode::Down, KeyModifiers::SHIFT))
        );
        assert_eq!(KeyBind::parse("F5"), Some(KeyBind::new(KeyCode::F(5), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("+"), Some(KeyBind::new(KeyCode::Char('+'), KeyModifiers::NONE)));
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("xy"), None);
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.frame_ms = 50;
        config
            .bindings
            .insert(Action::Quit, vec![KeyBind::new(KeyCode::Esc, KeyModifiers::NONE)]);
        let parsed = AppConfig::parse(&config.serialise());
        assert_eq!(parsed.frame_ms, 50);
        assert_eq!(parsed.bindings, config.bindings);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("story-header-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);

        let config = AppConfig::load_from(&path);
        assert_eq!(config.frame_ms, 33);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("frame_ms = 33"));
        assert!(written.contains("quit = q"));

        // Edits to the written file are picked up on the next load.
        std::fs::write(&path, written.replace("frame_ms = 33", "frame_ms = 50")).unwrap();
        assert_eq!(AppConfig::load_from(&path).frame_ms, 50);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = AppConfig::parse("frame_ms = 1\nanimation_speed = 4.0\nbogus = 3");
        assert_eq!(config.frame_ms, 10);
        assert_eq!(config.animation_speed, 0.95);
    }

    #[test]
    fn match_key_ignores_super() {
        let config = AppConfig::default();
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::SUPER)),
            Some(Action::ScrollDown)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }
}
