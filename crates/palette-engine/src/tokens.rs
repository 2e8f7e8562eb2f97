//! Semantic color roles derived positionally from a palette.
//!
//! Two token sets exist. [`SemanticTokens`] drives the report theme and has
//! seven roles. [`UiTokens`] is the smaller set used for CSS previews.

use serde::{Deserialize, Serialize};

use crate::color::is_valid_hex;

/// A fixed, fully populated mapping from role names to colors.
pub trait TokenSet {
    /// Every `(role, color)` pair in declaration order.
    fn entries(&self) -> Vec<(&'static str, &str)>;

    fn get(&self, name: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(role, _)| *role == name)
            .map(|(_, color)| color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Accent,
    Success,
    Warning,
    Info,
    Neutral,
    Danger,
}

impl Role {
    /// In positional order: role `i` takes `colors[i]`.
    pub const ALL: [Role; 7] = [
        Role::Primary,
        Role::Accent,
        Role::Success,
        Role::Warning,
        Role::Info,
        Role::Neutral,
        Role::Danger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Accent => "accent",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Info => "info",
            Role::Neutral => "neutral",
            Role::Danger => "danger",
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            Role::Primary => "#0b6efd",
            Role::Accent => "#0fcfdf",
            Role::Success => "#06d6a0",
            Role::Warning => "#ffd166",
            Role::Info => "#7b61ff",
            Role::Neutral => "#6b7280",
            Role::Danger => "#ef476f",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Report theme tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticTokens {
    pub primary: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
    pub info: String,
    pub neutral: String,
    pub danger: String,
}

impl SemanticTokens {
    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Self {
        let pick = |role: Role| positional(colors, role.index(), role.default_color());

        SemanticTokens {
            primary: pick(Role::Primary),
            accent: pick(Role::Accent),
            success: pick(Role::Success),
            warning: pick(Role::Warning),
            info: pick(Role::Info),
            neutral: pick(Role::Neutral),
            danger: pick(Role::Danger),
        }
    }

    pub fn role(&self, role: Role) -> &str {
        match role {
            Role::Primary => &self.primary,
            Role::Accent => &self.accent,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Info => &self.info,
            Role::Neutral => &self.neutral,
            Role::Danger => &self.danger,
        }
    }
}

impl Default for SemanticTokens {
    fn default() -> Self {
        SemanticTokens::from_colors::<&str>(&[])
    }
}

impl TokenSet for SemanticTokens {
    fn entries(&self) -> Vec<(&'static str, &str)> {
        Role::ALL
            .into_iter()
            .map(|role| (role.name(), self.role(role)))
            .collect()
    }
}

/// Tokens for the CSS / UI preview target.
///
/// Only the first five are positional. The surface colors are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiTokens {
    pub primary: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub background: String,
    pub foreground: String,
    pub muted: String,
}

impl UiTokens {
    pub const POSITIONAL_DEFAULTS: [&'static str; 5] =
        ["#3b82f6", "#10b981", "#22c55e", "#f59e0b", "#ef4444"];

    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Self {
        let pick = |i: usize| positional(colors, i, Self::POSITIONAL_DEFAULTS[i]);

        UiTokens {
            primary: pick(0),
            accent: pick(1),
            success: pick(2),
            warning: pick(3),
            error: pick(4),
            background: "#ffffff".to_string(),
            foreground: "#0f172a".to_string(),
            muted: "#64748b".to_string(),
        }
    }
}

impl TokenSet for UiTokens {
    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("primary", self.primary.as_str()),
            ("accent", self.accent.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("muted", self.muted.as_str()),
        ]
    }
}

fn positional<S: AsRef<str>>(colors: &[S], index: usize, fallback: &str) -> String {
    match colors.get(index).map(AsRef::as_ref) {
        Some(color) if is_valid_hex(color) => color.to_string(),
        Some(color) => {
            warn!(
                "Ignoring malformed color `{}` at position {}, using {}",
                color, index, fallback
            );
            fallback.to_string()
        }
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DEFAULTS: [&str; 7] = [
        "#0b6efd", "#0fcfdf", "#06d6a0", "#ffd166", "#7b61ff", "#6b7280", "#ef476f",
    ];

    #[test]
    fn empty_palette_gets_every_default() {
        let tokens = SemanticTokens::from_colors::<&str>(&[]);
        let colors: Vec<&str> = tokens.entries().into_iter().map(|(_, c)| c).collect();

        assert_eq!(colors, DEFAULTS);
        assert_eq!(tokens, SemanticTokens::default());
    }

    #[test]
    fn roles_are_assigned_by_position() {
        let tokens = SemanticTokens::from_colors(&["#111111", "#222222", "#333333"]);

        assert_eq!(tokens.primary, "#111111");
        assert_eq!(tokens.accent, "#222222");
        assert_eq!(tokens.success, "#333333");
        assert_eq!(tokens.warning, "#ffd166");
        assert_eq!(tokens.danger, "#ef476f");
    }

    #[test]
    fn extra_colors_are_ignored() {
        let colors: Vec<String> = (0..10).map(|i| format!("#00000{i}")).collect();
        let tokens = SemanticTokens::from_colors(&colors);

        assert_eq!(tokens.danger, "#000006");
    }

    #[test]
    fn malformed_colors_fall_back_to_the_role_default() {
        let tokens = SemanticTokens::from_colors(&["#111111", "not-a-color", ""]);

        assert_eq!(tokens.primary, "#111111");
        assert_eq!(tokens.accent, "#0fcfdf");
        assert_eq!(tokens.success, "#06d6a0");
    }

    #[test]
    fn looks_up_tokens_by_name() {
        let tokens = SemanticTokens::from_colors(&["#111111"]);

        assert_eq!(tokens.get("primary"), Some("#111111"));
        assert_eq!(tokens.get("neutral"), Some("#6b7280"));
        assert_eq!(tokens.get("#123456"), None);
        assert_eq!(Role::from_name("info"), Some(Role::Info));
        assert_eq!(Role::from_name("error"), None);
    }

    #[test]
    fn serializes_roles_in_declaration_order() {
        let json = serde_json::to_string(&SemanticTokens::default()).unwrap();

        assert!(json.starts_with(r##"{"primary":"#0b6efd","accent":"#0fcfdf""##));
        assert!(json.ends_with(r##""danger":"#ef476f"}"##));
    }

    #[test]
    fn ui_tokens_use_their_own_defaults() {
        let tokens = UiTokens::from_colors(&["#264653", "#2a9d8f"]);

        assert_eq!(tokens.primary, "#264653");
        assert_eq!(tokens.accent, "#2a9d8f");
        assert_eq!(tokens.success, "#22c55e");
        assert_eq!(tokens.warning, "#f59e0b");
        assert_eq!(tokens.error, "#ef4444");
        assert_eq!(tokens.get("muted"), Some("#64748b"));
        assert_eq!(tokens.entries().len(), 8);
    }

    proptest! {
        #[test]
        fn first_k_roles_mirror_the_input(raw in prop::collection::vec(any::<[u8; 3]>(), 0..=7)) {
            let colors: Vec<String> = raw
                .iter()
                .map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}"))
                .collect();
            let tokens = SemanticTokens::from_colors(&colors);

            for (i, role) in Role::ALL.into_iter().enumerate() {
                let expected = colors.get(i).map(String::as_str).unwrap_or(DEFAULTS[i]);
                prop_assert_eq!(tokens.role(role), expected);
            }
        }
    }
}
